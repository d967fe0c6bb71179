//! Page paths served by the portal.
//!
//! Journeys store these strings, so a path must be identical everywhere it is used. Pages
//! scoped to a team member connection take the connection id as a path segment and are
//! built with the functions below.

use uuid::Uuid;

pub const ROOT: &str = "/";
pub const MANAGE_ACCOUNT: &str = "/manage-account";

pub const TEAM_MEMBER_EMAIL: &str = "/team-member-email";
pub const TEAM_MEMBER_PERMISSIONS: &str = "/team-member-permissions";
pub const TEAM_MEMBERS_CHECK_INVITATION_DETAILS: &str = "/team-members-check-invitation-details";
pub const REMOVE_TEAM_MEMBER: &str = "/remove-team-member";
pub const REMOVE_TEAM_MEMBER_CONFIRMATION: &str = "/remove-team-member-confirmation";

pub const CHANGE_ACCOUNT_PERMISSIONS: &str = "/change-account-permissions/{id}";
pub const RELATIONSHIP_WITH_ORGANISATION: &str = "/relationship-with-organisation/{id}";
pub const JOB_TITLE: &str = "/job-title/{id}";
pub const NAME_OF_CONSULTANCY: &str = "/name-of-consultancy/{id}";
pub const CHECK_DETAILS_SEND_INVITE: &str = "/check-details-send-invite/{id}";

pub const WHAT_ARE_YOUR_DETAILS: &str = "/what-are-your-details";
pub const CHECK_YOUR_DETAILS: &str = "/check-your-details";
pub const DECLARATION: &str = "/declaration";
pub const DETAILS_CHANGE_REQUESTED: &str = "/details-change-requested";

pub const UK_NATION: &str = "/uk-nation";
pub const BUSINESS_ADDRESS_POSTCODE: &str = "/business-address-postcode";
pub const SELECT_BUSINESS_ADDRESS: &str = "/select-business-address";
pub const BUSINESS_ADDRESS: &str = "/business-address";
pub const CHECK_COMPANY_DETAILS: &str = "/check-company-details";
pub const COMPANY_DETAILS_UPDATED: &str = "/company-details-updated";

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_CALLBACK: &str = "/auth/callback";
pub const AUTH_LOGOUT: &str = "/auth/logout";
pub const SIGNED_OUT: &str = "/signed-out";
pub const ERROR: &str = "/error";

/// Substitutes the connection id into one of the `{id}` route templates above.
pub fn with_id(template: &str, id: Uuid) -> String {
    template.replace("{id}", &id.to_string())
}

pub fn error(status_code: u16) -> String {
    format!("{}?statusCode={}", ERROR, status_code)
}
