//! Wizard state kept in session between requests.
//!
//! [`JourneySession`] is read at the start of an action, mutated, and saved before the
//! action returns. Concurrent requests from the same user (two tabs) overwrite each other;
//! the last save wins.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        address::{Address, Nation},
        permission::{PermissionType, RelationshipWithOrganisation},
    },
    server::error::Error,
};

/// Session key for the wizard state.
pub const SESSION_JOURNEY_KEY: &str = "portal:journey";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JourneySession {
    #[serde(default)]
    pub user_details: UserDetailsSession,
    #[serde(default)]
    pub account_management: AccountManagementSession,
    #[serde(default)]
    pub permission_management: PermissionManagementSession,
}

impl JourneySession {
    /// Loads the wizard state, starting an empty one if none is stored.
    pub async fn get(session: &Session) -> Result<Self, Error> {
        Ok(session
            .get::<JourneySession>(SESSION_JOURNEY_KEY)
            .await?
            .unwrap_or_default())
    }

    pub async fn save(&self, session: &Session) -> Result<(), Error> {
        session.insert(SESSION_JOURNEY_KEY, self).await?;

        Ok(())
    }
}

/// Answers and journey for the invite, remove and company details wizards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountManagementSession {
    #[serde(default)]
    pub journey: Vec<String>,

    pub invitee_email_address: Option<String>,
    pub role_key: Option<String>,
    /// Shown once on the landing page after an invitation was sent.
    pub added_user_email: Option<String>,

    pub remove_user: Option<RemoveUserSession>,
    /// Shown once on the landing page after a team member was removed.
    pub removed_user_name: Option<String>,

    pub uk_nation: Option<Nation>,
    pub postcode: Option<String>,
    #[serde(default)]
    pub address_list: Vec<Address>,
    pub business_address: Option<Address>,
    #[serde(default)]
    pub is_manual_address: bool,
    #[serde(default)]
    pub address_lookup_failed: bool,
}

impl AccountManagementSession {
    pub fn clear_invite(&mut self) {
        self.invitee_email_address = None;
        self.role_key = None;
    }

    pub fn clear_company_details(&mut self) {
        self.uk_nation = None;
        self.postcode = None;
        self.address_list.clear();
        self.business_address = None;
        self.is_manual_address = false;
        self.address_lookup_failed = false;
    }
}

/// Team member picked for removal from the landing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoveUserSession {
    pub first_name: String,
    pub last_name: String,
    pub person_id: Uuid,
}

impl RemoveUserSession {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// In-progress change of the signed-in user's own details.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDetailsSession {
    #[serde(default)]
    pub journey: Vec<String>,
    pub edit: Option<EditUserDetails>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditUserDetails {
    pub first_name: String,
    pub last_name: String,
    pub job_title: Option<String>,
    pub telephone: String,
}

/// Permission changes in progress, one item per team member connection.
///
/// Each item carries its own journey so the user can have the change pages for two team
/// members open without one resetting the other.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionManagementSession {
    #[serde(default)]
    pub items: Vec<PermissionManagementItem>,
}

impl PermissionManagementSession {
    pub fn item(&self, id: Uuid) -> Option<&PermissionManagementItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: Uuid) -> Option<&mut PermissionManagementItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// The item for `id`, starting an empty one if there is none yet.
    pub fn item_or_start(&mut self, id: Uuid) -> &mut PermissionManagementItem {
        let index = match self.items.iter().position(|item| item.id == id) {
            Some(index) => index,
            None => {
                self.items.push(PermissionManagementItem::new(id));
                self.items.len() - 1
            }
        };

        &mut self.items[index]
    }

    pub fn remove_item(&mut self, id: Uuid) {
        self.items.retain(|item| item.id != id);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PermissionManagementItem {
    /// Connection id of the team member whose permission is being changed.
    pub id: Uuid,
    #[serde(default)]
    pub journey: Vec<String>,
    /// Name of the team member, fetched once when the change starts.
    pub person_name: Option<String>,
    /// Permission the team member held when the change started.
    pub current_permission: Option<PermissionType>,
    pub permission_type: Option<PermissionType>,
    pub relationship_with_organisation: Option<RelationshipWithOrganisation>,
    pub additional_relationship_information: Option<String>,
    pub job_title: Option<String>,
    pub name_of_consultancy: Option<String>,
}

impl PermissionManagementItem {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            journey: Vec::new(),
            person_name: None,
            current_permission: None,
            permission_type: None,
            relationship_with_organisation: None,
            additional_relationship_information: None,
            job_title: None,
            name_of_consultancy: None,
        }
    }
}
