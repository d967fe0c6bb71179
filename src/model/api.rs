//! Request and response bodies exchanged with the facade API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{
    address::Address,
    permission::{PermissionType, RelationshipWithOrganisation},
};

/// Invitation of a new team member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteUserRequest {
    pub email: String,
    pub role_key: String,
    pub organisation_id: Uuid,
    pub invited_by: Uuid,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePermissionRequest {
    pub permission_type: PermissionType,
}

/// Nomination of a connected person as the organisation's delegated person.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegatedPersonNominationRequest {
    pub relationship_type: RelationshipWithOrganisation,
    pub consultancy_name: Option<String>,
    pub other_relationship_description: Option<String>,
    pub job_title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsUpdateRequest {
    pub first_name: String,
    pub last_name: String,
    pub job_title: Option<String>,
    pub telephone: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsUpdateResponse {
    /// The change was sent to the regulator for approval instead of being applied.
    #[serde(default)]
    pub requires_approval: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationUpdateRequest {
    pub nation_id: i32,
    pub address: Address,
}
