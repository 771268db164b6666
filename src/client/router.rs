use dioxus::prelude::*;

use crate::{
    client::{
        components::{MemberArea, MentorArea, Navbar, StudentArea, UniversityArea},
        routes::{Dashboard, Home, Login, MentorHome, NotFound, StudentHome, UniversityHome},
    },
    model::session::Role,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

        #[route("/")]
        Home {},

        #[route("/login")]
        Login {},

        #[layout(MemberArea)]
            #[route("/dashboard")]
            Dashboard {},
        #[end_layout]

        #[layout(StudentArea)]
            #[route("/student")]
            StudentHome {},
        #[end_layout]

        #[layout(MentorArea)]
            #[route("/mentor")]
            MentorHome {},
        #[end_layout]

        #[layout(UniversityArea)]
            #[route("/university")]
            UniversityHome {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Role-specific home a user lands on after logging in
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Student => Self::StudentHome {},
            Role::Mentor => Self::MentorHome {},
            Role::University => Self::UniversityHome {},
        }
    }
}
