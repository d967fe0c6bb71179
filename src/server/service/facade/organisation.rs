use reqwest::Method;
use uuid::Uuid;

use crate::{
    model::api::OrganisationUpdateRequest,
    server::{error::facade::FacadeError, service::facade::FacadeClient},
};

impl FacadeClient {
    /// Replaces the nation and registered address of an organisation.
    pub async fn update_organisation_details(
        &self,
        user_id: Uuid,
        organisation_id: Uuid,
        update: &OrganisationUpdateRequest,
    ) -> Result<(), FacadeError> {
        let path = format!("/api/organisations/{}", organisation_id);
        let request = self.request(Method::PUT, &path, Some(user_id)).json(update);

        self.send_empty(request, &path).await
    }
}
