//! Session store: the single source of truth for who is logged in.
//!
//! The store owns the current [`Session`] and keeps it in sync with the persisted copy in
//! [`KeyValueStorage`]. Every lifecycle transition is published on a `watch` channel so
//! access guards and UI state can follow it without polling.
//!
//! Overlapping `login` calls are not serialized: whichever completes last determines the
//! final state and the persisted copy.

use std::cell::Cell;

use dioxus_logger::tracing;
use tokio::sync::watch;

use crate::{
    client::{
        api::{transport::Transport, ApiClient},
        error::{session::SessionError, Error},
        store::storage::KeyValueStorage,
    },
    model::{
        api::{LoginDto, LoginResponseDto},
        session::{Role, Session},
    },
};

/// Storage key the serialized [`Session`] is persisted under
pub const SESSION_STORAGE_KEY: &str = "mentorlink:session";

/// Path of the login endpoint, relative to the API base address
pub const LOGIN_PATH: &str = "/auth/login";

/// Lifecycle of the session store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Persisted storage has not been consulted yet, or a login is in flight
    #[default]
    Initializing,
    Authenticated(Session),
    Unauthenticated,
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Initializing)
    }
}

pub struct SessionStore<T, S> {
    api: ApiClient<T>,
    storage: S,
    state: watch::Sender<SessionState>,
    restored: Cell<bool>,
}

impl<T, S> SessionStore<T, S>
where
    T: Transport,
    S: KeyValueStorage,
{
    /// Create a store in the `Initializing` state. Call [`restore`](Self::restore) before
    /// handing it to any access guard.
    pub fn new(api: ApiClient<T>, storage: S) -> Self {
        let (state, _) = watch::channel(SessionState::Initializing);

        Self {
            api,
            storage,
            state,
            restored: Cell::new(false),
        }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn session(&self) -> Option<Session> {
        self.state.borrow().session().cloned()
    }

    /// Receiver observing every subsequent state transition
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Adopt the persisted session, if any.
    ///
    /// Runs at most once per store; later calls leave the state untouched. A persisted
    /// value that cannot be read or parsed is removed and treated as no session, the
    /// failure is only logged.
    pub fn restore(&self) {
        if self.restored.replace(true) {
            return;
        }

        let next = match self.read_persisted() {
            Ok(Some(session)) => {
                tracing::info!(
                    email = %session.email,
                    role = %session.role,
                    "Restored persisted session"
                );

                SessionState::Authenticated(session)
            }
            Ok(None) => {
                tracing::debug!("No persisted session found");

                SessionState::Unauthenticated
            }
            Err(err) => {
                tracing::warn!(error = %err, "Discarding unreadable persisted session");

                if let Err(err) = self.storage.clear(SESSION_STORAGE_KEY) {
                    tracing::error!(error = %err, "Failed to remove unreadable persisted session");
                }

                SessionState::Unauthenticated
            }
        };

        self.state.send_replace(next);
    }

    /// Log in against the API and adopt the resulting session.
    ///
    /// The store reports `Initializing` while the call is in flight. On success the
    /// session is persisted before it is adopted. On failure nothing is persisted and
    /// the error is returned unchanged; the store settles on the previous session if
    /// there was one, the persisted session if it had never been restored, and
    /// `Unauthenticated` otherwise.
    ///
    /// # Arguments
    /// - `email` - Account email, also the fallback when the server omits it
    /// - `password` - Account secret, never stored
    /// - `role` - Declared role, also the fallback when the server omits it
    ///
    /// # Returns
    /// - `Ok(Session)` - The adopted session
    /// - `Err(Error)` - The request pipeline failure, or a storage failure while persisting
    pub async fn login(&self, email: &str, password: &str, role: Role) -> Result<Session, Error> {
        // A login settles the state on its own, so a later restore must not override it
        let was_restored = self.restored.replace(true);

        let previous = self.state.send_replace(SessionState::Initializing);

        let credentials = LoginDto {
            email: email.to_string(),
            password: password.to_string(),
            role,
        };

        let result = self
            .api
            .post::<_, LoginResponseDto>(LOGIN_PATH, &credentials)
            .await
            .and_then(|response| {
                let session = Session {
                    id: response.id,
                    email: response.email.unwrap_or_else(|| email.to_string()),
                    role: response.role.unwrap_or(role),
                };

                self.persist(&session)?;

                Ok(session)
            });

        match result {
            Ok(session) => {
                tracing::info!(email = %session.email, role = %session.role, "Logged in");

                self.state
                    .send_replace(SessionState::Authenticated(session.clone()));

                Ok(session)
            }
            Err(err) => {
                tracing::info!(email = %email, error = %err, "Login failed");

                if was_restored {
                    let settled = match previous {
                        SessionState::Authenticated(session) => {
                            SessionState::Authenticated(session)
                        }
                        _ => SessionState::Unauthenticated,
                    };

                    self.state.send_replace(settled);
                } else {
                    self.restored.set(false);
                    self.restore();
                }

                Err(err)
            }
        }
    }

    /// Drop the current session from memory and storage.
    ///
    /// Does nothing when no session is active. If the persisted entry cannot be
    /// removed it is overwritten with an empty value, which `restore` reads as absent.
    pub fn logout(&self) {
        if matches!(*self.state.borrow(), SessionState::Unauthenticated) {
            return;
        }

        if let Err(err) = self.storage.clear(SESSION_STORAGE_KEY) {
            tracing::warn!(error = %err, "Failed to remove persisted session, overwriting it");

            if let Err(err) = self.storage.set(SESSION_STORAGE_KEY, "") {
                tracing::error!(error = %err, "Failed to overwrite persisted session");
            }
        }

        self.restored.set(true);
        self.state.send_replace(SessionState::Unauthenticated);

        tracing::info!("Logged out");
    }

    fn read_persisted(&self) -> Result<Option<Session>, SessionError> {
        self.storage
            .get(SESSION_STORAGE_KEY)?
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| {
                serde_json::from_str::<Session>(&raw)
                    .map_err(|e| SessionError::MalformedSessionError(e.to_string()))
            })
            .transpose()
    }

    fn persist(&self, session: &Session) -> Result<(), SessionError> {
        let raw = serde_json::to_string(session)
            .map_err(|e| SessionError::StorageWriteFailed(e.to_string()))?;

        self.storage.set(SESSION_STORAGE_KEY, &raw)
    }
}
