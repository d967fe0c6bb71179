use reqwest::Method;
use uuid::Uuid;

use crate::{
    model::{
        api::{DelegatedPersonNominationRequest, InviteUserRequest, UpdatePermissionRequest},
        permission::PermissionType,
        team::{ConnectionPermission, ConnectionPerson, TeamMember},
    },
    server::{
        error::facade::FacadeError,
        service::facade::{organisation_query, FacadeClient},
    },
};

impl FacadeClient {
    /// Lists the people connected to an organisation, as seen by a user with
    /// `service_role_id`.
    pub async fn get_users_for_organisation(
        &self,
        user_id: Uuid,
        organisation_id: Uuid,
        service_role_id: i32,
    ) -> Result<Vec<TeamMember>, FacadeError> {
        let path = "/api/organisations/users";
        let request = self
            .request(Method::GET, path, Some(user_id))
            .query(&organisation_query(organisation_id, service_role_id));

        self.send_json(request, path).await
    }

    /// Sends an invitation email to a new team member.
    ///
    /// The facade answers 409 when the email address already belongs to someone in the
    /// organisation; see [`FacadeError::is_conflict`].
    pub async fn send_user_invite(
        &self,
        user_id: Uuid,
        invite: &InviteUserRequest,
    ) -> Result<(), FacadeError> {
        let path = "/api/accounts-management/invite-user";
        let request = self.request(Method::POST, path, Some(user_id)).json(invite);

        self.send_empty(request, path).await
    }

    pub async fn remove_connected_person(
        &self,
        user_id: Uuid,
        person_id: Uuid,
        organisation_id: Uuid,
        service_role_id: i32,
    ) -> Result<(), FacadeError> {
        let path = format!("/api/connections/person/{}", person_id);
        let request = self
            .request(Method::DELETE, &path, Some(user_id))
            .query(&organisation_query(organisation_id, service_role_id));

        self.send_empty(request, &path).await
    }

    pub async fn get_permission_type_from_connection(
        &self,
        user_id: Uuid,
        connection_id: Uuid,
        organisation_id: Uuid,
        service_role_id: i32,
    ) -> Result<ConnectionPermission, FacadeError> {
        let path = format!("/api/connections/{}/roles", connection_id);
        let request = self
            .request(Method::GET, &path, Some(user_id))
            .query(&organisation_query(organisation_id, service_role_id));

        self.send_json(request, &path).await
    }

    pub async fn get_person_details_from_connection(
        &self,
        user_id: Uuid,
        connection_id: Uuid,
        organisation_id: Uuid,
        service_role_id: i32,
    ) -> Result<ConnectionPerson, FacadeError> {
        let path = format!("/api/connections/{}/person", connection_id);
        let request = self
            .request(Method::GET, &path, Some(user_id))
            .query(&organisation_query(organisation_id, service_role_id));

        self.send_json(request, &path).await
    }

    pub async fn update_permission_type(
        &self,
        user_id: Uuid,
        connection_id: Uuid,
        organisation_id: Uuid,
        service_role_id: i32,
        permission_type: PermissionType,
    ) -> Result<(), FacadeError> {
        let path = format!("/api/connections/{}/roles", connection_id);
        let request = self
            .request(Method::PUT, &path, Some(user_id))
            .query(&organisation_query(organisation_id, service_role_id))
            .json(&UpdatePermissionRequest { permission_type });

        self.send_empty(request, &path).await
    }

    pub async fn nominate_to_delegated_person(
        &self,
        user_id: Uuid,
        connection_id: Uuid,
        organisation_id: Uuid,
        service_role_id: i32,
        nomination: &DelegatedPersonNominationRequest,
    ) -> Result<(), FacadeError> {
        let path = format!(
            "/api/connections/{}/delegated-person-nomination",
            connection_id
        );
        let request = self
            .request(Method::PUT, &path, Some(user_id))
            .query(&organisation_query(organisation_id, service_role_id))
            .json(nomination);

        self.send_empty(request, &path).await
    }
}
