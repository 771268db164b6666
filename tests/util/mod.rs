//! Helpers for building clients and session stores against the mock server.

use std::{
    cell::Cell,
    rc::Rc,
    time::Duration,
};

use mentorlink::client::{
    api::{
        request::{HttpRequest, HttpResponse},
        transport::{ReqwestTransport, Transport},
        ApiClient,
    },
    config::ApiConfig,
    error::{session::SessionError, Error},
    store::{KeyValueStorage, MemoryStorage, SessionStore},
};
use mentorlink_test_utils::TestSetup;

/// Base address nothing listens on, for tests that must never reach the network
pub static UNREACHABLE_API_URL: &str = "http://127.0.0.1:9/api";

pub type TestSessionStore = SessionStore<ReqwestTransport, MemoryStorage>;

pub trait TestSetupExt {
    /// Request pipeline pointed at the mock server
    fn api_client(&self) -> ApiClient<ReqwestTransport>;

    /// Session store pointed at the mock server, with a handle on its storage
    fn session_store(&self) -> (TestSessionStore, MemoryStorage);
}

impl TestSetupExt for TestSetup {
    fn api_client(&self) -> ApiClient<ReqwestTransport> {
        ApiClient::new(ReqwestTransport::default(), ApiConfig::new(self.api_url()))
    }

    fn session_store(&self) -> (TestSessionStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(self.api_client(), storage.clone());

        (store, storage)
    }
}

/// Session store for tests that never issue a request
pub fn offline_session_store() -> (TestSessionStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    let api = ApiClient::new(
        ReqwestTransport::default(),
        ApiConfig::new(UNREACHABLE_API_URL),
    );

    (SessionStore::new(api, storage.clone()), storage)
}

/// Memory-backed storage whose writes and removals can be made to fail.
#[derive(Clone, Default)]
pub struct FailingStorage {
    pub inner: MemoryStorage,
    pub fail_set: Rc<Cell<bool>>,
    pub fail_clear: Rc<Cell<bool>>,
}

impl KeyValueStorage for FailingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        if self.fail_set.get() {
            return Err(SessionError::StorageWriteFailed("quota exceeded".to_string()));
        }

        self.inner.set(key, value)
    }

    fn clear(&self, key: &str) -> Result<(), SessionError> {
        if self.fail_clear.get() {
            return Err(SessionError::StorageWriteFailed("storage locked".to_string()));
        }

        self.inner.clear(key)
    }
}

/// Session store over [`FailingStorage`], pointed at `api_url`
pub fn failing_session_store(
    api_url: &str,
    storage: FailingStorage,
) -> SessionStore<ReqwestTransport, FailingStorage> {
    let api = ApiClient::new(ReqwestTransport::default(), ApiConfig::new(api_url));

    SessionStore::new(api, storage)
}

/// Transport that answers `200 {}` only after `delay`, recording whether it ever finished.
#[derive(Clone)]
pub struct SlowTransport {
    pub delay: Duration,
    pub completed: Rc<Cell<bool>>,
}

impl SlowTransport {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            completed: Rc::new(Cell::new(false)),
        }
    }
}

impl Transport for SlowTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, Error> {
        tokio::time::sleep(self.delay).await;
        self.completed.set(true);

        Ok(HttpResponse {
            status: 200,
            status_text: "OK".to_string(),
            body: "{}".to_string(),
        })
    }
}
