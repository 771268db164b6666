use mentorlink::{
    client::store::{KeyValueStorage, SessionState, SESSION_STORAGE_KEY},
    model::session::{Role, Session},
};

use crate::util::offline_session_store;

#[test]
/// Expect the store to report initializing until restore runs
fn initializing_before_restore() {
    let (store, _storage) = offline_session_store();

    assert_eq!(store.state(), SessionState::Initializing);
    assert!(store.state().is_loading());
}

#[test]
/// Expect a well-formed persisted session to be adopted
fn adopts_persisted_session() {
    let (store, storage) = offline_session_store();
    storage
        .set(
            SESSION_STORAGE_KEY,
            r#"{"id":"u1","email":"a@b.com","role":"university"}"#,
        )
        .unwrap();

    store.restore();

    assert_eq!(
        store.state(),
        SessionState::Authenticated(Session {
            id: Some("u1".to_string()),
            email: "a@b.com".to_string(),
            role: Role::University,
        })
    );
}

#[test]
/// Expect no persisted session to yield unauthenticated
fn absent_session_is_unauthenticated() {
    let (store, _storage) = offline_session_store();

    store.restore();

    assert_eq!(store.state(), SessionState::Unauthenticated);
}

#[test]
/// Expect invalid JSON to be discarded without surfacing an error
fn malformed_session_is_discarded() {
    let (store, storage) = offline_session_store();
    storage.set(SESSION_STORAGE_KEY, "{not json").unwrap();

    store.restore();

    assert_eq!(store.state(), SessionState::Unauthenticated);
    assert!(storage.get(SESSION_STORAGE_KEY).unwrap().is_none());
}

#[test]
/// Expect a persisted session with an unknown role to be treated as malformed
fn unknown_role_is_discarded() {
    let (store, storage) = offline_session_store();
    storage
        .set(SESSION_STORAGE_KEY, r#"{"email":"a@b.com","role":"admin"}"#)
        .unwrap();

    store.restore();

    assert_eq!(store.state(), SessionState::Unauthenticated);
}

#[test]
/// Expect a second restore to leave the state from the first one untouched
fn restore_is_idempotent() {
    let (store, storage) = offline_session_store();
    storage
        .set(
            SESSION_STORAGE_KEY,
            r#"{"id":"u1","email":"a@b.com","role":"mentor"}"#,
        )
        .unwrap();

    store.restore();
    let first = store.state();

    storage.clear(SESSION_STORAGE_KEY).unwrap();
    store.restore();

    assert_eq!(store.state(), first);
}
