use mentorlink::{
    client::{
        error::Error,
        store::{KeyValueStorage, SessionState, SESSION_STORAGE_KEY},
    },
    model::session::Role,
};
use mentorlink_test_utils::prelude::*;

use crate::{
    util::{failing_session_store, offline_session_store, FailingStorage, UNREACHABLE_API_URL},
    TestSetupExt,
};

#[tokio::test]
/// Expect login followed by logout to clear memory and storage
async fn login_then_logout_round_trip() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let _mock = test
        .auth()
        .create_login_endpoint(
            TEST_EMAIL,
            TEST_PASSWORD,
            "mentor",
            serde_json::json!({"id": TEST_USER_ID, "email": TEST_EMAIL, "role": "mentor"}),
        )
        .await;
    let (store, storage) = test.session_store();
    store.restore();

    store.login(TEST_EMAIL, TEST_PASSWORD, Role::Mentor).await?;
    store.logout();

    assert_eq!(store.state(), SessionState::Unauthenticated);
    assert!(store.session().is_none());
    assert!(storage.get(SESSION_STORAGE_KEY)?.is_none());

    Ok(())
}

#[test]
/// Expect logout without an active session to change nothing
fn logout_without_session_is_noop() {
    let (store, storage) = offline_session_store();
    store.restore();
    let mut receiver = store.subscribe();

    store.logout();
    store.logout();

    assert_eq!(store.state(), SessionState::Unauthenticated);
    assert!(!receiver.has_changed().unwrap());
    assert!(storage.get(SESSION_STORAGE_KEY).unwrap().is_none());
}

#[test]
/// Expect logout to remove a restored session from storage
fn logout_clears_restored_session() {
    let (store, storage) = offline_session_store();
    storage
        .set(
            SESSION_STORAGE_KEY,
            r#"{"id":"u1","email":"a@b.com","role":"student"}"#,
        )
        .unwrap();
    store.restore();

    store.logout();

    assert_eq!(store.state(), SessionState::Unauthenticated);
    assert!(storage.get(SESSION_STORAGE_KEY).unwrap().is_none());
}

#[test]
/// Expect a logout whose removal fails to leave an entry that restores as no session
fn logout_overwrites_entry_when_clear_fails() {
    let storage = FailingStorage::default();
    storage
        .set(
            SESSION_STORAGE_KEY,
            r#"{"id":"u1","email":"a@b.com","role":"mentor"}"#,
        )
        .unwrap();
    storage.fail_clear.set(true);
    let store = failing_session_store(UNREACHABLE_API_URL, storage.clone());
    store.restore();
    assert!(store.session().is_some());

    store.logout();

    assert_eq!(store.state(), SessionState::Unauthenticated);
    assert_eq!(
        storage.get(SESSION_STORAGE_KEY).unwrap().as_deref(),
        Some("")
    );

    let reloaded = failing_session_store(UNREACHABLE_API_URL, storage);
    reloaded.restore();

    assert_eq!(reloaded.state(), SessionState::Unauthenticated);
}
