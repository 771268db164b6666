use dioxus::prelude::*;

use crate::client::{
    components::{LoginForm, Page},
    context::SessionContext,
    router::Route,
};

#[component]
pub fn Login() -> Element {
    let state = use_context::<SessionContext>().state;

    rsx!(
        Page { title: "Login", class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                div { class: "card-body items-center",
                    h2 { class: "card-title",
                        "Sign in"
                    }
                    if let Some(session) = state.read().session() {
                        p { "Signed in as {session.email}." }
                        Link {
                            to: Route::home_for(session.role),
                            class: "btn btn-outline",
                            "Go to your home"
                        }
                    } else {
                        LoginForm {}
                    }
                }
            }
        }
    )
}
