//! HTTP routing.
//!
//! Wizard pages register a GET that renders and a POST that submits on the same path, so
//! forms post back to the page they were rendered on.

use axum::{routing::get, Router};

use crate::server::{
    controller::{account, auth, company_details, error, permission, team, user_details},
    model::{app::AppState, page},
};

/// Builds the application's router with every page of the portal.
///
/// Unknown paths render the 404 error page. Session handling is added by the caller as a
/// layer so tests can swap in an in-memory store.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(page::ROOT, get(account::root))
        .route(page::MANAGE_ACCOUNT, get(account::manage_account))
        // Invite and remove team members
        .route(
            page::TEAM_MEMBER_EMAIL,
            get(team::team_member_email).post(team::submit_team_member_email),
        )
        .route(
            page::TEAM_MEMBER_PERMISSIONS,
            get(team::team_member_permissions).post(team::submit_team_member_permissions),
        )
        .route(
            page::TEAM_MEMBERS_CHECK_INVITATION_DETAILS,
            get(team::check_invitation_details).post(team::submit_check_invitation_details),
        )
        .route(page::REMOVE_TEAM_MEMBER, get(team::remove_team_member))
        .route(
            page::REMOVE_TEAM_MEMBER_CONFIRMATION,
            get(team::remove_team_member_confirmation)
                .post(team::submit_remove_team_member_confirmation),
        )
        // Change permissions
        .route(
            page::CHANGE_ACCOUNT_PERMISSIONS,
            get(permission::change_account_permissions)
                .post(permission::submit_change_account_permissions),
        )
        .route(
            page::RELATIONSHIP_WITH_ORGANISATION,
            get(permission::relationship_with_organisation)
                .post(permission::submit_relationship_with_organisation),
        )
        .route(
            page::JOB_TITLE,
            get(permission::job_title).post(permission::submit_job_title),
        )
        .route(
            page::NAME_OF_CONSULTANCY,
            get(permission::name_of_consultancy).post(permission::submit_name_of_consultancy),
        )
        .route(
            page::CHECK_DETAILS_SEND_INVITE,
            get(permission::check_details_send_invite)
                .post(permission::submit_check_details_send_invite),
        )
        // User details
        .route(
            page::WHAT_ARE_YOUR_DETAILS,
            get(user_details::what_are_your_details)
                .post(user_details::submit_what_are_your_details),
        )
        .route(
            page::CHECK_YOUR_DETAILS,
            get(user_details::check_your_details).post(user_details::submit_check_your_details),
        )
        .route(
            page::DECLARATION,
            get(user_details::declaration).post(user_details::submit_declaration),
        )
        .route(
            page::DETAILS_CHANGE_REQUESTED,
            get(user_details::details_change_requested),
        )
        // Company details
        .route(
            page::UK_NATION,
            get(company_details::uk_nation).post(company_details::submit_uk_nation),
        )
        .route(
            page::BUSINESS_ADDRESS_POSTCODE,
            get(company_details::business_address_postcode)
                .post(company_details::submit_business_address_postcode),
        )
        .route(
            page::SELECT_BUSINESS_ADDRESS,
            get(company_details::select_business_address)
                .post(company_details::submit_select_business_address),
        )
        .route(
            page::BUSINESS_ADDRESS,
            get(company_details::business_address).post(company_details::submit_business_address),
        )
        .route(
            page::CHECK_COMPANY_DETAILS,
            get(company_details::check_company_details)
                .post(company_details::submit_check_company_details),
        )
        .route(
            page::COMPANY_DETAILS_UPDATED,
            get(company_details::company_details_updated),
        )
        // Sign-in
        .route(page::AUTH_LOGIN, get(auth::login))
        .route(page::AUTH_CALLBACK, get(auth::callback))
        .route(page::AUTH_LOGOUT, get(auth::logout))
        .route(page::SIGNED_OUT, get(auth::signed_out))
        .route(page::ERROR, get(error::error))
        .fallback(error::not_found)
}
