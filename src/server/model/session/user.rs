use tower_sessions::Session;

use crate::{model::user::UserData, server::error::Error};

/// Session key for the signed-in user's data.
pub const SESSION_USER_DATA_KEY: &str = "portal:user:data";

/// Session wrapper for the signed-in user's [`UserData`].
///
/// Stored once at sign-in and refreshed whenever the user's own details or their
/// organisation's details are changed through the portal.
pub struct SessionUserData;

impl SessionUserData {
    pub async fn insert(session: &Session, user: &UserData) -> Result<(), Error> {
        session.insert(SESSION_USER_DATA_KEY, user).await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<UserData>, Error> {
        Ok(session.get(SESSION_USER_DATA_KEY).await?)
    }
}
