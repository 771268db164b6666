//! Shared test setup for the MentorLink client.
//!
//! Tests create a [`TestSetup`] owning a mockito server, register the endpoints they
//! need through the fixture helpers, and point an `ApiConfig` at
//! [`TestSetup::api_url`].

pub mod constant;
pub mod fixtures;
pub mod setup;

pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{constant::*, TestSetup};
}
