//! Mock HTTP endpoint fixtures.
//!
//! - `auth` - the login endpoint, succeeding or rejecting
//! - `api` - arbitrary JSON or raw-body endpoints for pipeline tests

pub mod api;
pub mod auth;

use crate::TestSetup;

impl TestSetup {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { setup: self }
    }

    pub fn api<'a>(&'a mut self) -> ApiFixtures<'a> {
        ApiFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a mut TestSetup,
}

pub struct ApiFixtures<'a> {
    setup: &'a mut TestSetup,
}
