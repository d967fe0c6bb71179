//! Sign-in session data.
//!
//! The CSRF state generated when the user is sent to the identity provider is stored here
//! and consumed when the provider redirects back to the callback route.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

/// Session key for the CSRF state token.
pub const SESSION_AUTH_CSRF_KEY: &str = "portal:auth:csrf";

/// Session wrapper for the CSRF state token.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Inserts the CSRF state token into the session, replacing any previous token.
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Removes and returns the CSRF state token so it can only be used once.
    ///
    /// # Returns
    /// - `Ok(String)` - CSRF token found and removed
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No CSRF token in session
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session
            .remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY)
            .await?
        {
            Some(SessionAuthCsrf(csrf)) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}
