//! Placeholder configuration shared by tests. None of these are real credentials.

use std::time::Duration;

/// API key the portal's facade client sends in the `X-Api-Key` header.
pub static TEST_FACADE_API_KEY: &str = "facade_api_key";

pub const TEST_FACADE_TIMEOUT: Duration = Duration::from_secs(5);

pub static TEST_OIDC_CLIENT_ID: &str = "oidc_client_id";

pub static TEST_OIDC_CLIENT_SECRET: &str = "oidc_client_secret";

pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/auth/callback";

/// Organisation every factory user account belongs to.
pub static TEST_ORGANISATION_ID: &str = "3b9b7a51-0c9e-4d4e-8f55-2f8a0d6c1e01";
