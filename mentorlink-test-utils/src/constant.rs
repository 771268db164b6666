//! Placeholder account values shared across tests. None of these are real credentials.

/// Path prefix the mock server serves the API under
pub static TEST_API_PREFIX: &str = "/api";

/// Login endpoint as seen by the mock server
pub static TEST_LOGIN_ENDPOINT: &str = "/api/auth/login";

pub static TEST_USER_ID: &str = "u1";

pub static TEST_EMAIL: &str = "a@b.com";

pub static TEST_PASSWORD: &str = "x";
