use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{organisation::Organisation, permission::PermissionType};

/// The signed-in user's account as held in session after sign-in.
///
/// Every controller action branches on this: which sections the landing page shows, who
/// may invite or remove team members, which permissions they may grant and whether a
/// change to their own details needs regulator approval.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    pub role_in_organisation: RoleInOrganisation,
    pub service_role: ServiceRole,
    pub service_role_id: i32,
    pub enrolment_status: EnrolmentStatus,
    #[serde(default)]
    pub organisations: Vec<Organisation>,
}

impl UserData {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The organisation the user is acting for.
    ///
    /// Users belong to a single organisation in this portal, so this is the first one.
    pub fn current_organisation(&self) -> Option<&Organisation> {
        self.organisations.first()
    }

    pub fn is_approved_or_delegated(&self) -> bool {
        matches!(
            self.service_role,
            ServiceRole::Approved | ServiceRole::Delegated
        )
    }

    pub fn is_basic_admin(&self) -> bool {
        self.service_role == ServiceRole::Basic
            && self.role_in_organisation == RoleInOrganisation::Admin
    }

    /// Whether the user may invite, remove and change the permissions of team members.
    pub fn can_manage_team(&self) -> bool {
        self.is_approved_or_delegated() || self.is_basic_admin()
    }

    /// Whether the user may change the nation and address of their organisation.
    pub fn can_change_company_details(&self) -> bool {
        self.is_approved_or_delegated()
            && self
                .current_organisation()
                .is_some_and(|organisation| !organisation.is_companies_house_company)
    }

    /// Permissions this user may grant to another team member, in display order.
    pub fn grantable_permissions(&self) -> Vec<PermissionType> {
        match self.service_role {
            ServiceRole::Approved => vec![
                PermissionType::Admin,
                PermissionType::Basic,
                PermissionType::Delegated,
            ],
            ServiceRole::Delegated => vec![PermissionType::Admin, PermissionType::Basic],
            ServiceRole::Basic if self.is_basic_admin() => {
                vec![PermissionType::Admin, PermissionType::Basic]
            }
            ServiceRole::Basic => Vec::new(),
        }
    }

    /// Whether this user may change the permission of, or remove, a team member who
    /// currently holds `current`.
    ///
    /// Approved persons are never managed here and only an approved person may manage a
    /// delegated person.
    pub fn can_manage_member(&self, current: PermissionType) -> bool {
        match current {
            PermissionType::Approved => false,
            PermissionType::Delegated => self.service_role == ServiceRole::Approved,
            PermissionType::Admin | PermissionType::Basic => self.can_manage_team(),
        }
    }

    /// Permission type matching the user's own service role and organisation role.
    pub fn permission_type(&self) -> PermissionType {
        match self.service_role {
            ServiceRole::Approved => PermissionType::Approved,
            ServiceRole::Delegated => PermissionType::Delegated,
            ServiceRole::Basic if self.is_basic_admin() => PermissionType::Admin,
            ServiceRole::Basic => PermissionType::Basic,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleInOrganisation {
    Admin,
    Employee,
}

/// Service role the user holds for the service this portal manages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceRole {
    Approved,
    Delegated,
    Basic,
}

impl ServiceRole {
    /// Numeric identifier the facade uses for the role.
    pub fn id(self) -> i32 {
        match self {
            ServiceRole::Approved => 1,
            ServiceRole::Delegated => 2,
            ServiceRole::Basic => 3,
        }
    }
}

impl fmt::Display for ServiceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceRole::Approved => "Approved person",
            ServiceRole::Delegated => "Delegated person",
            ServiceRole::Basic => "Basic user",
        };

        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrolmentStatus {
    Enrolled,
    Pending,
    Approved,
    Rejected,
    Invited,
    Nominated,
}
