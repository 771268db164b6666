//! Data transfer objects shared between the client core and the MentorLink API.

pub mod api;
pub mod session;
