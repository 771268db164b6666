use dioxus::document::Title;
use dioxus::prelude::*;

#[component]
pub fn Page(title: &'static str, class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        Title { "{title} | MentorLink" }
        div {
            class: "min-h-screen p-4 {class}",
            {children}
        }
    )
}
