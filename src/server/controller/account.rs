use axum::extract::State;
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{team::TeamMember, user::UserData},
    server::{
        controller::util::get_user::{current_organisation, get_user_from_session},
        error::Error,
        model::{
            action::ActionResult, app::AppState, journey::Journey, page,
            session::journey::JourneySession,
        },
    },
    view::pages::manage_account::{ManageAccountViewModel, TeamMemberRow},
};

/// The site root has no page of its own.
pub async fn root() -> ActionResult {
    ActionResult::redirect(page::MANAGE_ACCOUNT)
}

/// Landing page: the user's details, their organisation and, for team managers, the team.
///
/// Visiting it restarts the account management journey and shows any one-shot banner left
/// by a finished invite or removal exactly once.
pub async fn manage_account(
    State(state): State<AppState>,
    session: Session,
) -> Result<ActionResult, Error> {
    let user = get_user_from_session(&session).await?;
    let organisation = current_organisation(&user)?;

    let mut journey = JourneySession::get(&session).await?;
    let account = &mut journey.account_management;
    account.journey.reset_to(page::MANAGE_ACCOUNT);
    let added_user_email = account.added_user_email.take();
    let removed_user_name = account.removed_user_name.take();
    journey.save(&session).await?;

    let show_team_management = user.can_manage_team();
    let mut team_members = Vec::new();
    let mut team_members_unavailable = false;

    if show_team_management {
        match state
            .facade
            .get_users_for_organisation(user.id, organisation.id, user.service_role_id)
            .await
        {
            Ok(members) => {
                team_members = members
                    .into_iter()
                    .filter(|member| member.person_id != user.id)
                    .map(|member| team_member_row(&user, member))
                    .collect();
            }
            Err(err) => {
                tracing::warn!(
                    "Failed to load team members for organisation {}: {}",
                    organisation.id,
                    err
                );

                team_members_unavailable = true;
            }
        }
    }

    Ok(ActionResult::view(ManageAccountViewModel {
        user_name: user.full_name(),
        email: user.email.clone(),
        job_title: user.job_title.clone(),
        telephone: user.telephone.clone(),
        service_role: user.service_role.to_string(),
        organisation_name: organisation.name.clone(),
        organisation_number: organisation.organisation_number.clone(),
        nation: organisation.nation().map(|nation| nation.to_string()),
        organisation_address: organisation.address.lines(),
        show_team_management,
        show_company_details_change: state.features.allow_company_details_changes
            && user.can_change_company_details(),
        team_members,
        team_members_unavailable,
        added_user_email,
        removed_user_name,
    }))
}

fn team_member_row(user: &UserData, member: TeamMember) -> TeamMemberRow {
    let can_manage = user.can_manage_member(member.permission_type);

    TeamMemberRow {
        name: member.full_name(),
        email: member.email.clone(),
        permission: member.permission_type.to_string(),
        change_link: can_manage
            .then(|| page::with_id(page::CHANGE_ACCOUNT_PERMISSIONS, member.connection_id)),
        remove_link: can_manage.then(|| remove_link(&member)),
    }
}

/// Link to the removal wizard. The wizard acts on `personId` alone and reloads the name
/// from the team list.
fn remove_link(member: &TeamMember) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("firstName", &member.first_name)
        .append_pair("lastName", &member.last_name)
        .append_pair("personId", &member.person_id.to_string())
        .finish();

    format!("{}?{}", page::REMOVE_TEAM_MEMBER, query)
}
