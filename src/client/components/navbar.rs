use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUser;
use dioxus_free_icons::Icon;

use crate::client::{context::SessionContext, router::Route};

#[component]
pub fn Navbar() -> Element {
    let context = use_context::<SessionContext>();
    let state = context.state;
    let store = context.store.clone();
    let navigator = navigator();

    let logout = move |_: MouseEvent| {
        store.logout();
        navigator.replace(Route::Login {});
    };

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "text-xl",
                    "MentorLink"
                }
            }
            div {
                class: "navbar-end flex gap-2",
                if let Some(session) = state.read().session() {
                    Link { to: Route::Dashboard {}, class: "flex items-center gap-2",
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaUser
                        }
                        p { class: "text-sm",
                            "{session.email}"
                        }
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: logout,
                        "Logout"
                    }
                } else if !state.read().is_loading() {
                    Link { to: Route::Login {}, class: "btn btn-primary",
                        "Login"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
