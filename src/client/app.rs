use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::{transport::PlatformTransport, ApiClient},
    config::ApiConfig,
    context::SessionContext,
    router::Route,
    store::{PlatformStorage, SessionStore},
};

#[component]
pub fn App() -> Element {
    let store = use_hook(|| {
        let config = ApiConfig::from_env().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Invalid API configuration, using defaults");
            ApiConfig::default()
        });
        tracing::info!(base_url = %config.base_url, "Configured MentorLink API");

        let api = ApiClient::new(PlatformTransport::default(), config);
        let store = Rc::new(SessionStore::new(api, PlatformStorage::default()));

        // Must settle before the router mounts any access guard
        store.restore();

        store
    });

    let state = use_signal(|| store.state());
    use_context_provider(|| SessionContext {
        store: store.clone(),
        state,
    });

    // Mirror session store transitions into the reactive signal
    let sessions = store.clone();
    use_future(move || {
        let mut receiver = sessions.subscribe();
        let mut state = state;

        async move {
            while receiver.changed().await.is_ok() {
                let next = receiver.borrow_and_update().clone();
                state.set(next);
            }
        }
    });

    rsx! {
        Router::<Route> {}
    }
}
