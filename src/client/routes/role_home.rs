//! Per-role landing pages, each mounted behind the matching role guard.

use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn StudentHome() -> Element {
    rsx!(
        Page { title: "Student", class: "flex flex-col items-center gap-4",
            h2 { class: "text-xl", "Student home" }
            p { "Search for mentors and follow up on your sessions." }
        }
    )
}

#[component]
pub fn MentorHome() -> Element {
    rsx!(
        Page { title: "Mentor", class: "flex flex-col items-center gap-4",
            h2 { class: "text-xl", "Mentor home" }
            p { "Review your mentees and upcoming sessions." }
        }
    )
}

#[component]
pub fn UniversityHome() -> Element {
    rsx!(
        Page { title: "University", class: "flex flex-col items-center gap-4",
            h2 { class: "text-xl", "University home" }
            p { "Track mentoring activity across your students." }
        }
    )
}
