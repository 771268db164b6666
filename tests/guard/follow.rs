use std::time::Duration;

use mentorlink::{
    client::{
        guard::{AccessGuard, GuardDecision, Redirect},
        store::{KeyValueStorage, SESSION_STORAGE_KEY},
    },
    model::session::Role,
};

use super::RecordingNavigator;
use crate::util::offline_session_store;

const SETTLE: Duration = Duration::from_millis(10);

#[tokio::test]
/// Expect a student-only guard to wait for restore, then bounce a mentor and a logout
async fn follows_store_transitions() {
    let (store, storage) = offline_session_store();
    storage
        .set(
            SESSION_STORAGE_KEY,
            r#"{"id":"u1","email":"a@b.com","role":"mentor"}"#,
        )
        .unwrap();

    let navigator = RecordingNavigator::default();
    let mut guard = AccessGuard::new(vec![Role::Student], navigator.clone());
    let receiver = store.subscribe();

    let handle = tokio::spawn(async move {
        guard.follow(receiver).await;
        guard.decision()
    });

    tokio::time::sleep(SETTLE).await;
    assert!(navigator.recorded().is_empty());

    store.restore();
    tokio::time::sleep(SETTLE).await;
    assert_eq!(navigator.recorded(), vec![Redirect::Landing]);

    store.logout();
    tokio::time::sleep(SETTLE).await;
    assert_eq!(
        navigator.recorded(),
        vec![Redirect::Landing, Redirect::Login]
    );

    drop(store);
    let decision = handle.await.unwrap();

    assert_eq!(decision, GuardDecision::Unauthenticated);
}

#[tokio::test]
/// Expect an allowed role to pass the guard without any navigation
async fn allowed_role_never_navigates() {
    let (store, storage) = offline_session_store();
    storage
        .set(
            SESSION_STORAGE_KEY,
            r#"{"id":"u2","email":"uni@b.com","role":"university"}"#,
        )
        .unwrap();

    let navigator = RecordingNavigator::default();
    let mut guard = AccessGuard::new(vec![Role::Mentor, Role::University], navigator.clone());
    let receiver = store.subscribe();

    let handle = tokio::spawn(async move {
        guard.follow(receiver).await;
        guard.decision()
    });

    store.restore();
    tokio::time::sleep(SETTLE).await;
    drop(store);

    let decision = handle.await.unwrap();

    assert_eq!(decision, GuardDecision::Authorized);
    assert!(navigator.recorded().is_empty());
}
