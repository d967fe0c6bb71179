//! Shared setup for the controller integration tests.

use account_management::{
    model::user::UserData,
    server::{
        model::{
            action::ActionResult,
            app::{AppState, FeatureFlags},
            session::user::SessionUserData,
        },
        service::{auth::OidcClient, facade::FacadeClient},
    },
    view::Page,
};
use account_management_test_utils::prelude::*;
use axum::{http::header::LOCATION, response::Response};

/// Extension trait for TestContext to create the portal's AppState against the mock server
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let facade =
            FacadeClient::new(&self.facade_url(), TEST_FACADE_API_KEY, TEST_FACADE_TIMEOUT)
                .expect("Failed to build facade client");
        let oidc = OidcClient::new(
            TEST_OIDC_CLIENT_ID,
            TEST_OIDC_CLIENT_SECRET,
            &self.oidc_auth_url(),
            &self.oidc_token_url(),
            TEST_CALLBACK_URL,
        )
        .expect("Failed to build OIDC client");

        AppState {
            facade,
            oidc,
            features: FeatureFlags::default(),
        }
    }
}

/// Stores `account` in the test session as the signed-in user.
pub async fn sign_in(test: &TestContext, account: serde_json::Value) -> UserData {
    let user: UserData = serde_json::from_value(account).expect("Invalid user account fixture");

    SessionUserData::insert(&test.session, &user)
        .await
        .expect("Failed to store user in session");

    user
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// The page an action rendered, panicking on a redirect.
pub fn page(result: ActionResult) -> Page {
    match result {
        ActionResult::View(page) => page,
        ActionResult::Redirect(path) => panic!("Expected a page, got a redirect to {}", path),
    }
}
