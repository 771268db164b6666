use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{constant::TEST_LOGIN_ENDPOINT, fixtures::AuthFixtures};

impl<'a> AuthFixtures<'a> {
    /// Create a login endpoint expecting the given credentials exactly once.
    ///
    /// # Arguments
    /// - `email`, `password`, `role` - Credentials the request body must carry
    /// - `response` - JSON body returned with a 200 status
    ///
    /// # Returns
    /// - `Mock` - The endpoint, for verifying it was called
    pub async fn create_login_endpoint(
        &mut self,
        email: &str,
        password: &str,
        role: &str,
        response: Value,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", TEST_LOGIN_ENDPOINT)
            .match_body(Matcher::Json(serde_json::json!({
                "email": email,
                "password": password,
                "role": role,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .expect(1)
            .create_async()
            .await
    }

    /// Create a login endpoint rejecting every request with `status` and `body`.
    pub async fn create_login_failure(&mut self, status: usize, body: &str) -> Mock {
        self.setup
            .server
            .mock("POST", TEST_LOGIN_ENDPOINT)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create_async()
            .await
    }
}
