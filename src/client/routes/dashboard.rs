use dioxus::prelude::*;

use crate::client::{components::Page, context::SessionContext, router::Route};

/// Default landing view for every authenticated role
#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<SessionContext>().state;
    let state = state.read();

    let Some(session) = state.session() else {
        return rsx!();
    };

    rsx!(
        Page { title: "Dashboard", class: "flex flex-col items-center",
            div { class: "card shadow-sm w-full max-w-96",
                div { class: "card-body",
                    h2 { class: "card-title",
                        "Welcome back"
                    }
                    p { "{session.email}" }
                    p { class: "badge badge-outline",
                        {session.role.label()}
                    }
                    Link {
                        to: Route::home_for(session.role),
                        class: "btn btn-primary",
                        "Open {session.role.label()} home"
                    }
                }
            }
        }
    )
}
