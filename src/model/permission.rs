use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Permission level a connected person holds against an organisation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionType {
    Basic,
    Admin,
    Delegated,
    Approved,
}

impl PermissionType {
    /// Form value used by the permission radio buttons.
    pub fn key(self) -> &'static str {
        match self {
            PermissionType::Basic => "Basic",
            PermissionType::Admin => "Admin",
            PermissionType::Delegated => "Delegated",
            PermissionType::Approved => "Approved",
        }
    }

    /// Short description shown under each permission option.
    pub fn description(self) -> &'static str {
        match self {
            PermissionType::Basic => "Can submit data but cannot manage team members",
            PermissionType::Admin => "Can submit data and manage team members",
            PermissionType::Delegated => {
                "Can submit data, manage team members and be nominated as a delegated person"
            }
            PermissionType::Approved => "Legally responsible for the organisation's data",
        }
    }
}

impl fmt::Display for PermissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PermissionType::Basic => "Basic user",
            PermissionType::Admin => "Admin user",
            PermissionType::Delegated => "Delegated person",
            PermissionType::Approved => "Approved person",
        };

        f.write_str(name)
    }
}

impl FromStr for PermissionType {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Basic" => Ok(PermissionType::Basic),
            "Admin" => Ok(PermissionType::Admin),
            "Delegated" => Ok(PermissionType::Delegated),
            "Approved" => Ok(PermissionType::Approved),
            _ => Err(()),
        }
    }
}

/// How a nominated delegated person relates to the organisation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipWithOrganisation {
    Employee,
    Consultant,
    ConsultancyEmployee,
    Other,
}

impl RelationshipWithOrganisation {
    pub const ALL: [RelationshipWithOrganisation; 4] = [
        RelationshipWithOrganisation::Employee,
        RelationshipWithOrganisation::Consultant,
        RelationshipWithOrganisation::ConsultancyEmployee,
        RelationshipWithOrganisation::Other,
    ];

    pub fn key(self) -> &'static str {
        match self {
            RelationshipWithOrganisation::Employee => "Employee",
            RelationshipWithOrganisation::Consultant => "Consultant",
            RelationshipWithOrganisation::ConsultancyEmployee => "ConsultancyEmployee",
            RelationshipWithOrganisation::Other => "Other",
        }
    }

    /// Consultants are asked for the consultancy's name instead of a job title.
    pub fn is_consultancy(self) -> bool {
        matches!(
            self,
            RelationshipWithOrganisation::Consultant
                | RelationshipWithOrganisation::ConsultancyEmployee
        )
    }
}

impl fmt::Display for RelationshipWithOrganisation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelationshipWithOrganisation::Employee => "Employee",
            RelationshipWithOrganisation::Consultant => "Consultant",
            RelationshipWithOrganisation::ConsultancyEmployee => "Employee of a consultancy",
            RelationshipWithOrganisation::Other => "Other",
        };

        f.write_str(name)
    }
}

impl FromStr for RelationshipWithOrganisation {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|relationship| relationship.key() == value)
            .ok_or(())
    }
}
