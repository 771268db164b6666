use std::rc::Rc;

use dioxus::prelude::*;

use crate::client::{
    api::{transport::PlatformTransport, ApiClient},
    store::{PlatformStorage, SessionState, SessionStore},
};

pub type PlatformApi = ApiClient<PlatformTransport>;
pub type PlatformSessionStore = SessionStore<PlatformTransport, PlatformStorage>;

/// Handle every component receives through context.
///
/// `state` mirrors the store's transitions so reading it subscribes a component to
/// session changes. Components never mutate the session directly; they go through
/// `store.login` and `store.logout`.
#[derive(Clone)]
pub struct SessionContext {
    pub store: Rc<PlatformSessionStore>,
    pub state: Signal<SessionState>,
}

impl SessionContext {
    /// Shared request pipeline for data-fetching components
    pub fn api(&self) -> &PlatformApi {
        self.store.api()
    }
}
