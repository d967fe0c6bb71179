use reqwest::Method;
use uuid::Uuid;

use crate::{
    model::{
        api::{UserDetailsUpdateRequest, UserDetailsUpdateResponse},
        user::UserData,
    },
    server::{error::facade::FacadeError, service::facade::FacadeClient},
};

impl FacadeClient {
    /// Fetches the account of the user the access token was issued to.
    ///
    /// Called once during sign-in; the result becomes the session's user data.
    pub async fn get_user_account(&self, access_token: &str) -> Result<UserData, FacadeError> {
        let path = "/api/user-accounts";
        let request = self.request(Method::GET, path, None).bearer_auth(access_token);

        self.send_json(request, path).await
    }

    /// Submits a change to the user's own details.
    ///
    /// The facade decides whether the change applies immediately or goes to the regulator
    /// for approval and says which in the response.
    pub async fn update_user_details(
        &self,
        user_id: Uuid,
        details: &UserDetailsUpdateRequest,
    ) -> Result<UserDetailsUpdateResponse, FacadeError> {
        let path = "/api/users/user-details";
        let request = self.request(Method::PUT, path, Some(user_id)).json(details);

        self.send_json(request, path).await
    }
}
