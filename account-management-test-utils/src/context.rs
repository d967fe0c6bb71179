//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! A single mockito server plays both the facade API and the identity provider, so the
//! portal's clients are pointed at paths on the same base URL.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment for one test.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_invite_endpoint(200, 1)
///     .build()
///     .await?;
///
/// let client = FacadeClient::new(&test.facade_url(), TEST_FACADE_API_KEY, TEST_FACADE_TIMEOUT)?;
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Session backed by an in-memory store
    pub session: Session,

    /// Mock HTTP server for the facade and identity provider
    pub server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        Ok(TestContext {
            session,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL for the facade client.
    pub fn facade_url(&self) -> String {
        self.server.url()
    }

    pub fn oidc_auth_url(&self) -> String {
        format!("{}/oauth/authorize", self.server.url())
    }

    pub fn oidc_token_url(&self) -> String {
        format!("{}/oauth/token", self.server.url())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
