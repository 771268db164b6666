use mockito::Mock;
use serde_json::Value;

use crate::{constant::TEST_API_PREFIX, fixtures::ApiFixtures};

impl<'a> ApiFixtures<'a> {
    /// Create an endpoint under the API prefix answering with a JSON body.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match, e.g. `"GET"`
    /// - `path` - Path relative to the API prefix, e.g. `"/mentors"`
    /// - `status` - Status code to return
    /// - `body` - JSON body to return
    pub async fn create_json_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: Value,
    ) -> Mock {
        self.setup
            .server
            .mock(method, format!("{}{}", TEST_API_PREFIX, path).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    /// Create an endpoint under the API prefix answering with an arbitrary body.
    pub async fn create_raw_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: &str,
    ) -> Mock {
        self.setup
            .server
            .mock(method, format!("{}{}", TEST_API_PREFIX, path).as_str())
            .with_status(status)
            .with_body(body)
            .create_async()
            .await
    }
}
