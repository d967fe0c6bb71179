//! Identity provider mock endpoints.

use mockito::Mock;

use crate::TestContext;

impl TestContext {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> AuthFixtures<'a> {
    /// Create a token endpoint at `/oauth/token` that issues `access_token` for any code.
    pub fn create_token_endpoint(&mut self, access_token: &str) -> Mock {
        let body = serde_json::json!({
            "access_token": access_token,
            "token_type": "bearer",
            "expires_in": 3600
        });

        self.setup
            .server
            .mock("POST", "/oauth/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(1)
            .create()
    }
}
