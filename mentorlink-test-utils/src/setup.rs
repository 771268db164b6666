use mockito::{Mock, Server, ServerGuard};

use crate::constant::TEST_API_PREFIX;

pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Self {
        let server = Server::new_async().await;

        Self {
            server,
            mocks: Vec::new(),
        }
    }

    /// Base address of the mocked API, to be used as the client's base URL
    pub fn api_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_API_PREFIX)
    }

    /// Assert all mock endpoints kept by this setup were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
