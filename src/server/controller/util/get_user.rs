use tower_sessions::Session;

use crate::{
    model::{organisation::Organisation, user::UserData},
    server::{
        error::{access::AccessError, auth::AuthError, Error},
        model::session::user::SessionUserData,
    },
};

/// Retrieves the signed-in user's data from session
///
/// # Returns
/// - `Ok(UserData)`: User data stored at sign-in, refreshed after any change made here
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: Nobody is signed in
/// - `Err(Error)`: Session store failures
pub async fn get_user_from_session(session: &Session) -> Result<UserData, Error> {
    let Some(user) = SessionUserData::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    Ok(user)
}

/// The organisation the user acts for, or a 404 error when they have none.
pub fn current_organisation(user: &UserData) -> Result<&Organisation, Error> {
    user.current_organisation()
        .ok_or_else(|| AccessError::OrganisationNotFound(user.id).into())
}

/// Fails with a 403 error unless `allowed`.
pub fn ensure_allowed(allowed: bool, user: &UserData, action: &'static str) -> Result<(), Error> {
    if allowed {
        Ok(())
    } else {
        Err(AccessError::Forbidden {
            user_id: user.id,
            action,
        }
        .into())
    }
}
