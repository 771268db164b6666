use dioxus::{prelude::*, router::Navigator};
use dioxus_logger::tracing;

use crate::{
    client::{
        context::SessionContext,
        guard::{AccessGuard, GuardDecision, GuardNavigator, Redirect},
        router::Route,
    },
    model::session::Role,
};

/// Router-backed navigation for guard redirects
struct RouterNavigator(Navigator);

impl GuardNavigator for RouterNavigator {
    fn navigate(&self, redirect: Redirect) {
        let target = match redirect {
            Redirect::Login => Route::Login {},
            Redirect::Landing => Route::Dashboard {},
        };

        if self.0.replace(target).is_some() {
            tracing::warn!(?redirect, "Access guard navigation failed");
        }
    }
}

/// Render `children` only for a session whose role is in `allowed`.
///
/// Navigation happens in an effect after render, never during it.
#[component]
pub fn Protected(allowed: Vec<Role>, children: Element) -> Element {
    let state = use_context::<SessionContext>().state;
    let navigator = navigator();

    use_effect(use_reactive((&allowed,), move |(allowed,)| {
        let mut guard = AccessGuard::new(allowed, RouterNavigator(navigator));
        guard.observe(&state.read());
    }));

    let decision = GuardDecision::evaluate(&state.read(), &allowed);

    match decision {
        GuardDecision::Pending => rsx!(
            div { class: "min-h-screen flex items-center justify-center",
                span { class: "loading loading-spinner loading-lg" }
            }
        ),
        GuardDecision::Authorized => children,
        GuardDecision::Unauthenticated | GuardDecision::WrongRole => rsx!(),
    }
}
