//! Route layouts wrapping each protected section in an access guard.

use dioxus::prelude::*;

use crate::{
    client::{components::Protected, router::Route},
    model::session::Role,
};

/// Default landing section, open to every authenticated role
#[component]
pub fn MemberArea() -> Element {
    rsx!(
        Protected { allowed: Role::ALL.to_vec(),
            Outlet::<Route> {}
        }
    )
}

#[component]
pub fn StudentArea() -> Element {
    rsx!(
        Protected { allowed: vec![Role::Student],
            Outlet::<Route> {}
        }
    )
}

#[component]
pub fn MentorArea() -> Element {
    rsx!(
        Protected { allowed: vec![Role::Mentor],
            Outlet::<Route> {}
        }
    )
}

#[component]
pub fn UniversityArea() -> Element {
    rsx!(
        Protected { allowed: vec![Role::University],
            Outlet::<Route> {}
        }
    )
}
