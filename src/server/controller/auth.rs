use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    server::{
        controller::util::csrf::validate_csrf,
        error::Error,
        model::{
            action::ActionResult,
            app::AppState,
            page,
            session::{auth::SessionAuthCsrf, user::SessionUserData},
        },
    },
    view::pages::auth::SignedOutViewModel,
};

#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Login route to start sign-in with the identity provider
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects the user to the identity provider's authorization
///   endpoint with a fresh CSRF state
/// - 500 (Internal Server Error): The CSRF state could not be stored in session
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let login = state.oidc.login_url();

    SessionAuthCsrf::insert(&session, &login.state).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback route the identity provider redirects to after sign-in
///
/// Exchanges the authorization code for an access token and loads the user's account
/// from the facade, which becomes the session's user data.
///
/// # Responses
/// - 303 (See Other): Signed in, redirect to the landing page
/// - 400 (Bad Request): CSRF state missing from session or not matching
/// - 500 (Internal Server Error): Token exchange, facade or session failure
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<ActionResult, Error> {
    validate_csrf(&session, &params.0.state).await?;

    let access_token = state.oidc.exchange_code(&params.0.code).await?;
    let user = state.facade.get_user_account(&access_token).await?;

    // New session id on privilege change.
    session.cycle_id().await?;
    SessionUserData::insert(&session, &user).await?;

    tracing::debug!("User {} signed in", user.id);

    Ok(ActionResult::redirect(page::MANAGE_ACCOUNT))
}

/// Signs the user out by deleting their session
///
/// # Responses
/// - 303 (See Other): Redirect to the signed out page
/// - 500 (Internal Server Error): There was an issue deleting the session
pub async fn logout(session: Session) -> Result<ActionResult, Error> {
    if SessionUserData::get(&session).await?.is_some() {
        session.flush().await?;
    }

    Ok(ActionResult::redirect(page::SIGNED_OUT))
}

pub async fn signed_out() -> ActionResult {
    ActionResult::view(SignedOutViewModel {
        sign_in_link: page::AUTH_LOGIN.to_string(),
    })
}
