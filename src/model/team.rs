use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{permission::PermissionType, user::EnrolmentStatus};

/// A team member listed on the landing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub person_id: Uuid,
    pub connection_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub permission_type: PermissionType,
    pub enrolment_status: EnrolmentStatus,
}

impl TeamMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Name of the person behind a connection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionPerson {
    pub first_name: String,
    pub last_name: String,
}

/// Permission currently held through a connection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionPermission {
    pub permission_type: PermissionType,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

/// Role offered when inviting a new team member.
///
/// New team members always join as basic users; the role only decides whether they can
/// manage the team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InviteRole {
    Admin,
    Employee,
}

impl InviteRole {
    pub const ALL: [InviteRole; 2] = [InviteRole::Admin, InviteRole::Employee];

    /// Role key the facade expects in the invitation.
    pub fn key(self) -> &'static str {
        match self {
            InviteRole::Admin => "Basic.Admin",
            InviteRole::Employee => "Basic.Employee",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InviteRole::Admin => "Admin user",
            InviteRole::Employee => "Basic user",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            InviteRole::Admin => "Can submit data and invite or remove other team members",
            InviteRole::Employee => "Can submit data only",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }
}
