use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Page { title: "Not found", class: "flex flex-col items-center justify-center gap-2",
            p { class: "text-xl", "Nothing lives at {path}" }
            Link { to: Route::Home {}, class: "btn btn-outline", "Back home" }
        }
    )
}
