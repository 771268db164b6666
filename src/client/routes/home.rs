use dioxus::document::Meta;
use dioxus::prelude::*;

use crate::client::{components::Page, context::SessionContext, router::Route};

#[component]
pub fn Home() -> Element {
    let state = use_context::<SessionContext>().state;

    rsx!(
        Meta {
            name: "description",
            content: "Connect students with mentors and universities."
        }
        Page { title: "Home", class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-256",
                p { class: "text-2xl",
                    "MentorLink"
                }
                p {
                    "Find a mentor, share your progress, and keep your university in the loop."
                }
                if let Some(session) = state.read().session() {
                    Link {
                        to: Route::home_for(session.role),
                        class: "btn btn-primary",
                        "Continue as {session.email}"
                    }
                } else if !state.read().is_loading() {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-primary w-28",
                        "Login"
                    }
                }
            }
        }
    )
}
