//! Inviting and removing team members.

use axum::{
    extract::{Query, State},
    Form,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{api::InviteUserRequest, team::InviteRole, user::UserData},
    server::{
        controller::util::{
            get_user::{current_organisation, ensure_allowed, get_user_from_session},
            journey::{enter_journey, redirect_if_off_journey},
        },
        error::{access::AccessError, Error},
        model::{
            action::ActionResult,
            app::AppState,
            journey::Journey,
            page,
            session::journey::{JourneySession, RemoveUserSession},
            validation::{is_valid_email, ModelState},
        },
    },
    view::pages::team::{
        RemoveTeamMemberViewModel, TeamMemberCheckDetailsViewModel, TeamMemberEmailViewModel,
        TeamMemberPermissionsViewModel,
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct TeamMemberEmailForm {
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamMemberPermissionsForm {
    pub role_key: Option<String>,
}

/// Only the person id is read from the removal link. The member's name and permission are
/// looked up in the organisation's team list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveTeamMemberQuery {
    pub person_id: Uuid,
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoveTeamMemberForm {
    pub remove: Option<String>,
}

async fn team_manager(session: &Session) -> Result<UserData, Error> {
    let user = get_user_from_session(session).await?;
    ensure_allowed(user.can_manage_team(), &user, "manage team members")?;

    Ok(user)
}

pub async fn team_member_email(session: Session) -> Result<ActionResult, Error> {
    team_manager(&session).await?;

    let mut journey = JourneySession::get(&session).await?;
    let account = &mut journey.account_management;
    enter_journey(&mut account.journey, page::TEAM_MEMBER_EMAIL);

    let model = TeamMemberEmailViewModel {
        back_link: account.journey.back_link(page::TEAM_MEMBER_EMAIL),
        email: account.invitee_email_address.clone().unwrap_or_default(),
        errors: ModelState::new(),
    };
    journey.save(&session).await?;

    Ok(ActionResult::view(model))
}

pub async fn submit_team_member_email(
    session: Session,
    Form(form): Form<TeamMemberEmailForm>,
) -> Result<ActionResult, Error> {
    team_manager(&session).await?;

    let mut journey = JourneySession::get(&session).await?;
    let account = &mut journey.account_management;
    enter_journey(&mut account.journey, page::TEAM_MEMBER_EMAIL);

    let mut errors = ModelState::new();
    let email = form.email.as_deref().map(str::trim).unwrap_or_default();
    if email.is_empty() {
        errors.add("email", "Enter the team member's email address");
    } else if !is_valid_email(email) {
        errors.add(
            "email",
            "Enter an email address in the correct format, like name@example.com",
        );
    }

    if !errors.is_valid() {
        return Ok(ActionResult::view(TeamMemberEmailViewModel {
            back_link: account.journey.back_link(page::TEAM_MEMBER_EMAIL),
            email: email.to_string(),
            errors,
        }));
    }

    account.invitee_email_address = Some(email.to_string());
    account
        .journey
        .add_to_journey(page::TEAM_MEMBER_EMAIL, page::TEAM_MEMBER_PERMISSIONS);
    journey.save(&session).await?;

    Ok(ActionResult::redirect(page::TEAM_MEMBER_PERMISSIONS))
}

pub async fn team_member_permissions(session: Session) -> Result<ActionResult, Error> {
    team_manager(&session).await?;

    let journey = JourneySession::get(&session).await?;
    let account = &journey.account_management;
    if let Some(redirect) = redirect_if_off_journey(&account.journey, page::TEAM_MEMBER_PERMISSIONS)
    {
        return Ok(redirect);
    }
    let Some(email) = account.invitee_email_address.clone() else {
        return Ok(ActionResult::redirect(page::TEAM_MEMBER_EMAIL));
    };

    Ok(ActionResult::view(TeamMemberPermissionsViewModel {
        back_link: account.journey.back_link(page::TEAM_MEMBER_PERMISSIONS),
        email,
        role_key: account.role_key.clone(),
        errors: ModelState::new(),
    }))
}

pub async fn submit_team_member_permissions(
    session: Session,
    Form(form): Form<TeamMemberPermissionsForm>,
) -> Result<ActionResult, Error> {
    team_manager(&session).await?;

    let mut journey = JourneySession::get(&session).await?;
    let account = &mut journey.account_management;
    if let Some(redirect) = redirect_if_off_journey(&account.journey, page::TEAM_MEMBER_PERMISSIONS)
    {
        return Ok(redirect);
    }
    let Some(email) = account.invitee_email_address.clone() else {
        return Ok(ActionResult::redirect(page::TEAM_MEMBER_EMAIL));
    };

    let Some(role) = form.role_key.as_deref().and_then(InviteRole::from_key) else {
        let mut errors = ModelState::new();
        errors.add("role_key", "Select what permissions the team member should have");

        return Ok(ActionResult::view(TeamMemberPermissionsViewModel {
            back_link: account.journey.back_link(page::TEAM_MEMBER_PERMISSIONS),
            email,
            role_key: None,
            errors,
        }));
    };

    account.role_key = Some(role.key().to_string());
    account.journey.add_to_journey(
        page::TEAM_MEMBER_PERMISSIONS,
        page::TEAM_MEMBERS_CHECK_INVITATION_DETAILS,
    );
    journey.save(&session).await?;

    Ok(ActionResult::redirect(
        page::TEAM_MEMBERS_CHECK_INVITATION_DETAILS,
    ))
}

pub async fn check_invitation_details(session: Session) -> Result<ActionResult, Error> {
    team_manager(&session).await?;

    let journey = JourneySession::get(&session).await?;
    let account = &journey.account_management;
    if let Some(redirect) =
        redirect_if_off_journey(&account.journey, page::TEAM_MEMBERS_CHECK_INVITATION_DETAILS)
    {
        return Ok(redirect);
    }
    let (Some(email), Some(role)) = (
        account.invitee_email_address.clone(),
        account.role_key.as_deref().and_then(InviteRole::from_key),
    ) else {
        return Ok(ActionResult::redirect(page::TEAM_MEMBER_EMAIL));
    };

    Ok(ActionResult::view(TeamMemberCheckDetailsViewModel {
        back_link: account
            .journey
            .back_link(page::TEAM_MEMBERS_CHECK_INVITATION_DETAILS),
        email,
        role_label: role.label().to_string(),
        invite_failed: false,
    }))
}

/// Sends the invitation.
///
/// An address the facade already knows is shown back on the check page rather than
/// treated as a failure of the service.
pub async fn submit_check_invitation_details(
    State(state): State<AppState>,
    session: Session,
) -> Result<ActionResult, Error> {
    let user = team_manager(&session).await?;
    let organisation = current_organisation(&user)?;

    let mut journey = JourneySession::get(&session).await?;
    let account = &mut journey.account_management;
    if let Some(redirect) =
        redirect_if_off_journey(&account.journey, page::TEAM_MEMBERS_CHECK_INVITATION_DETAILS)
    {
        return Ok(redirect);
    }
    let (Some(email), Some(role)) = (
        account.invitee_email_address.clone(),
        account.role_key.as_deref().and_then(InviteRole::from_key),
    ) else {
        return Ok(ActionResult::redirect(page::TEAM_MEMBER_EMAIL));
    };

    let invite = InviteUserRequest {
        email: email.clone(),
        role_key: role.key().to_string(),
        organisation_id: organisation.id,
        invited_by: user.id,
    };

    match state.facade.send_user_invite(user.id, &invite).await {
        Ok(()) => {
            account.added_user_email = Some(email);
            account.clear_invite();
            account.journey.reset_to(page::MANAGE_ACCOUNT);
            journey.save(&session).await?;

            Ok(ActionResult::redirect(page::MANAGE_ACCOUNT))
        }
        Err(err) if err.is_conflict() => {
            tracing::debug!(
                "Invitation for organisation {} rejected as already sent: {}",
                organisation.id,
                err
            );

            Ok(ActionResult::view(TeamMemberCheckDetailsViewModel {
                back_link: account
                    .journey
                    .back_link(page::TEAM_MEMBERS_CHECK_INVITATION_DETAILS),
                email,
                role_label: role.label().to_string(),
                invite_failed: true,
            }))
        }
        Err(err) => Err(err.into()),
    }
}

/// Entry point of the removal wizard, linked from each row of the team list.
///
/// # Responses
/// - 303 (See Other): Member stored in session, redirect to the confirmation page
/// - 303 to `/error?statusCode=403`: The user tried to remove themselves or a member
///   they may not manage
/// - 303 to `/error?statusCode=404`: The person is not in the organisation's team
pub async fn remove_team_member(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RemoveTeamMemberQuery>,
) -> Result<ActionResult, Error> {
    let user = team_manager(&session).await?;
    let organisation = current_organisation(&user)?;
    ensure_allowed(query.person_id != user.id, &user, "remove themselves")?;

    let member = state
        .facade
        .get_users_for_organisation(user.id, organisation.id, user.service_role_id)
        .await?
        .into_iter()
        .find(|member| member.person_id == query.person_id)
        .ok_or(AccessError::TeamMemberNotFound(query.person_id))?;
    ensure_allowed(
        user.can_manage_member(member.permission_type),
        &user,
        "remove this team member",
    )?;

    let mut journey = JourneySession::get(&session).await?;
    let account = &mut journey.account_management;
    account.remove_user = Some(RemoveUserSession {
        first_name: member.first_name,
        last_name: member.last_name,
        person_id: member.person_id,
    });
    account.journey.add_to_journey(
        page::MANAGE_ACCOUNT,
        page::REMOVE_TEAM_MEMBER_CONFIRMATION,
    );
    journey.save(&session).await?;

    Ok(ActionResult::redirect(page::REMOVE_TEAM_MEMBER_CONFIRMATION))
}

pub async fn remove_team_member_confirmation(session: Session) -> Result<ActionResult, Error> {
    team_manager(&session).await?;

    let journey = JourneySession::get(&session).await?;
    let account = &journey.account_management;
    if let Some(redirect) =
        redirect_if_off_journey(&account.journey, page::REMOVE_TEAM_MEMBER_CONFIRMATION)
    {
        return Ok(redirect);
    }
    let Some(remove_user) = &account.remove_user else {
        return Ok(ActionResult::redirect(page::MANAGE_ACCOUNT));
    };

    Ok(ActionResult::view(RemoveTeamMemberViewModel {
        back_link: account
            .journey
            .back_link(page::REMOVE_TEAM_MEMBER_CONFIRMATION),
        name: remove_user.full_name(),
        errors: ModelState::new(),
    }))
}

pub async fn submit_remove_team_member_confirmation(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveTeamMemberForm>,
) -> Result<ActionResult, Error> {
    let user = team_manager(&session).await?;
    let organisation = current_organisation(&user)?;

    let mut journey = JourneySession::get(&session).await?;
    let account = &mut journey.account_management;
    if let Some(redirect) =
        redirect_if_off_journey(&account.journey, page::REMOVE_TEAM_MEMBER_CONFIRMATION)
    {
        return Ok(redirect);
    }
    let Some(remove_user) = account.remove_user.clone() else {
        return Ok(ActionResult::redirect(page::MANAGE_ACCOUNT));
    };

    match form.remove.as_deref() {
        Some("yes") => {
            state
                .facade
                .remove_connected_person(
                    user.id,
                    remove_user.person_id,
                    organisation.id,
                    user.service_role_id,
                )
                .await?;

            tracing::info!(
                "User {} removed person {} from organisation {}",
                user.id,
                remove_user.person_id,
                organisation.id
            );

            account.removed_user_name = Some(remove_user.full_name());
        }
        Some("no") => {}
        _ => {
            let mut errors = ModelState::new();
            errors.add(
                "remove",
                format!("Select yes if you want to remove {}", remove_user.full_name()),
            );

            return Ok(ActionResult::view(RemoveTeamMemberViewModel {
                back_link: account
                    .journey
                    .back_link(page::REMOVE_TEAM_MEMBER_CONFIRMATION),
                name: remove_user.full_name(),
                errors,
            }));
        }
    }

    account.remove_user = None;
    account.journey.reset_to(page::MANAGE_ACCOUNT);
    journey.save(&session).await?;

    Ok(ActionResult::redirect(page::MANAGE_ACCOUNT))
}
