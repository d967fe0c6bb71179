//! Changing a team member's permissions, including the nomination of a delegated person.
//!
//! Every page is scoped to the connection id in the path and keeps its answers in the
//! [`PermissionManagementItem`] for that connection.

use axum::{
    extract::{Path, State},
    Form,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::DelegatedPersonNominationRequest,
        permission::{PermissionType, RelationshipWithOrganisation},
        user::UserData,
    },
    server::{
        controller::util::{
            get_user::{current_organisation, ensure_allowed, get_user_from_session},
            journey::redirect_if_off_journey,
        },
        error::Error,
        model::{
            action::ActionResult,
            app::AppState,
            journey::Journey,
            page,
            session::journey::{JourneySession, PermissionManagementItem},
            validation::{
                ModelState, ADDITIONAL_INFORMATION_MAX_LENGTH, CONSULTANCY_NAME_MAX_LENGTH,
                JOB_TITLE_MAX_LENGTH,
            },
        },
    },
    view::pages::permission::{
        ChangeAccountPermissionsViewModel, CheckDetailsSendInviteViewModel, JobTitleViewModel,
        NameOfConsultancyViewModel, RelationshipWithOrganisationViewModel,
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct ChangeAccountPermissionsForm {
    pub permission_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RelationshipWithOrganisationForm {
    pub relationship_with_organisation: Option<String>,
    pub additional_relationship_information: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JobTitleForm {
    pub job_title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NameOfConsultancyForm {
    pub name_of_consultancy: Option<String>,
}

/// The item for `id`, provided `path` was reached through its journey.
fn item_on_journey<'a>(
    journey: &'a mut JourneySession,
    id: Uuid,
    path: &str,
) -> Result<&'a mut PermissionManagementItem, ActionResult> {
    let Some(item) = journey.permission_management.item_mut(id) else {
        return Err(ActionResult::redirect(page::MANAGE_ACCOUNT));
    };

    match redirect_if_off_journey(&item.journey, path) {
        Some(redirect) => Err(redirect),
        None => Ok(item),
    }
}

/// The signed-in user, refused with 403 unless they may still nominate a delegated person.
async fn nominator(session: &Session) -> Result<UserData, Error> {
    let user = get_user_from_session(session).await?;
    ensure_allowed(
        user.grantable_permissions().contains(&PermissionType::Delegated),
        &user,
        "nominate a delegated person",
    )?;

    Ok(user)
}

fn person_name(item: &PermissionManagementItem) -> String {
    item.person_name.clone().unwrap_or_default()
}

/// Starts or resumes a permission change for the connection.
///
/// The connection's current permission and name are fetched from the facade on every
/// visit. Connections the user may not manage are refused with 403.
pub async fn change_account_permissions(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<ActionResult, Error> {
    let user = get_user_from_session(&session).await?;
    let organisation = current_organisation(&user)?;
    let options = user.grantable_permissions();
    ensure_allowed(!options.is_empty(), &user, "change permissions")?;

    let current = state
        .facade
        .get_permission_type_from_connection(
            user.id,
            id,
            organisation.id,
            user.service_role_id,
        )
        .await?;
    ensure_allowed(
        user.can_manage_member(current.permission_type) && current.user_id != Some(user.id),
        &user,
        "change the permissions of this team member",
    )?;

    let person = state
        .facade
        .get_person_details_from_connection(user.id, id, organisation.id, user.service_role_id)
        .await?;

    let path = page::with_id(page::CHANGE_ACCOUNT_PERMISSIONS, id);
    let mut journey = JourneySession::get(&session).await?;
    let item = journey.permission_management.item_or_start(id);

    item.journey.reset_to(page::MANAGE_ACCOUNT);
    item.journey.add_to_journey(page::MANAGE_ACCOUNT, &path);
    item.person_name = Some(format!("{} {}", person.first_name, person.last_name));
    item.current_permission = Some(current.permission_type);

    let model = ChangeAccountPermissionsViewModel {
        back_link: item.journey.back_link(&path),
        id,
        person_name: person_name(item),
        options,
        selected: item.permission_type.or(Some(current.permission_type)),
        errors: ModelState::new(),
    };
    journey.save(&session).await?;

    Ok(ActionResult::view(model))
}

/// Applies an Admin or Basic permission straight away; Delegated starts the nomination.
pub async fn submit_change_account_permissions(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Form(form): Form<ChangeAccountPermissionsForm>,
) -> Result<ActionResult, Error> {
    let user = get_user_from_session(&session).await?;
    let organisation = current_organisation(&user)?;
    let options = user.grantable_permissions();
    ensure_allowed(!options.is_empty(), &user, "change permissions")?;

    let path = page::with_id(page::CHANGE_ACCOUNT_PERMISSIONS, id);
    let mut journey = JourneySession::get(&session).await?;
    let item = match item_on_journey(&mut journey, id, &path) {
        Ok(item) => item,
        Err(redirect) => return Ok(redirect),
    };

    let selected = form
        .permission_type
        .as_deref()
        .and_then(|value| value.parse::<PermissionType>().ok())
        .filter(|permission| options.contains(permission));

    let Some(selected) = selected else {
        let mut errors = ModelState::new();
        errors.add("permission_type", "Select the permissions for this team member");

        return Ok(ActionResult::view(ChangeAccountPermissionsViewModel {
            back_link: item.journey.back_link(&path),
            id,
            person_name: person_name(item),
            options,
            selected: None,
            errors,
        }));
    };

    if item.current_permission == Some(selected) {
        journey.permission_management.remove_item(id);
        journey.save(&session).await?;

        return Ok(ActionResult::redirect(page::MANAGE_ACCOUNT));
    }

    if selected == PermissionType::Delegated {
        let next = page::with_id(page::RELATIONSHIP_WITH_ORGANISATION, id);
        item.permission_type = Some(selected);
        item.journey.add_to_journey(&path, &next);
        journey.save(&session).await?;

        return Ok(ActionResult::redirect(next));
    }

    state
        .facade
        .update_permission_type(
            user.id,
            id,
            organisation.id,
            user.service_role_id,
            selected,
        )
        .await?;

    tracing::info!(
        "User {} changed connection {} to {:?}",
        user.id,
        id,
        selected
    );

    journey.permission_management.remove_item(id);
    journey.save(&session).await?;

    Ok(ActionResult::redirect(page::MANAGE_ACCOUNT))
}

pub async fn relationship_with_organisation(
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<ActionResult, Error> {
    nominator(&session).await?;

    let path = page::with_id(page::RELATIONSHIP_WITH_ORGANISATION, id);
    let mut journey = JourneySession::get(&session).await?;
    let item = match item_on_journey(&mut journey, id, &path) {
        Ok(item) => item,
        Err(redirect) => return Ok(redirect),
    };

    Ok(ActionResult::view(RelationshipWithOrganisationViewModel {
        back_link: item.journey.back_link(&path),
        person_name: person_name(item),
        selected: item.relationship_with_organisation,
        additional_information: item
            .additional_relationship_information
            .clone()
            .unwrap_or_default(),
        errors: ModelState::new(),
    }))
}

/// Consultants are asked for their consultancy, everyone else for their job title.
pub async fn submit_relationship_with_organisation(
    session: Session,
    Path(id): Path<Uuid>,
    Form(form): Form<RelationshipWithOrganisationForm>,
) -> Result<ActionResult, Error> {
    nominator(&session).await?;

    let path = page::with_id(page::RELATIONSHIP_WITH_ORGANISATION, id);
    let mut journey = JourneySession::get(&session).await?;
    let item = match item_on_journey(&mut journey, id, &path) {
        Ok(item) => item,
        Err(redirect) => return Ok(redirect),
    };

    let mut errors = ModelState::new();
    let relationship = form
        .relationship_with_organisation
        .as_deref()
        .and_then(|value| value.parse::<RelationshipWithOrganisation>().ok());

    let additional_information = match relationship {
        None => {
            errors.add(
                "relationship_with_organisation",
                "Select their relationship with the organisation",
            );
            None
        }
        Some(RelationshipWithOrganisation::Other) => Some(errors.require(
            "additional_relationship_information",
            form.additional_relationship_information.as_deref(),
            "a description of their relationship",
            ADDITIONAL_INFORMATION_MAX_LENGTH,
        )),
        Some(_) => None,
    };

    let Some(relationship) = relationship.filter(|_| errors.is_valid()) else {
        return Ok(ActionResult::view(RelationshipWithOrganisationViewModel {
            back_link: item.journey.back_link(&path),
            person_name: person_name(item),
            selected: relationship,
            additional_information: form
                .additional_relationship_information
                .unwrap_or_default(),
            errors,
        }));
    };

    item.relationship_with_organisation = Some(relationship);
    item.additional_relationship_information = additional_information;

    let next = if relationship.is_consultancy() {
        item.job_title = None;
        page::with_id(page::NAME_OF_CONSULTANCY, id)
    } else {
        item.name_of_consultancy = None;
        page::with_id(page::JOB_TITLE, id)
    };
    item.journey.add_to_journey(&path, &next);
    journey.save(&session).await?;

    Ok(ActionResult::redirect(next))
}

pub async fn job_title(session: Session, Path(id): Path<Uuid>) -> Result<ActionResult, Error> {
    nominator(&session).await?;

    let path = page::with_id(page::JOB_TITLE, id);
    let mut journey = JourneySession::get(&session).await?;
    let item = match item_on_journey(&mut journey, id, &path) {
        Ok(item) => item,
        Err(redirect) => return Ok(redirect),
    };

    Ok(ActionResult::view(JobTitleViewModel {
        back_link: item.journey.back_link(&path),
        person_name: person_name(item),
        job_title: item.job_title.clone().unwrap_or_default(),
        errors: ModelState::new(),
    }))
}

pub async fn submit_job_title(
    session: Session,
    Path(id): Path<Uuid>,
    Form(form): Form<JobTitleForm>,
) -> Result<ActionResult, Error> {
    nominator(&session).await?;

    let path = page::with_id(page::JOB_TITLE, id);
    let mut journey = JourneySession::get(&session).await?;
    let item = match item_on_journey(&mut journey, id, &path) {
        Ok(item) => item,
        Err(redirect) => return Ok(redirect),
    };

    let mut errors = ModelState::new();
    let job_title = errors.require(
        "job_title",
        form.job_title.as_deref(),
        "their job title",
        JOB_TITLE_MAX_LENGTH,
    );

    if !errors.is_valid() {
        return Ok(ActionResult::view(JobTitleViewModel {
            back_link: item.journey.back_link(&path),
            person_name: person_name(item),
            job_title,
            errors,
        }));
    }

    let next = page::with_id(page::CHECK_DETAILS_SEND_INVITE, id);
    item.job_title = Some(job_title);
    item.journey.add_to_journey(&path, &next);
    journey.save(&session).await?;

    Ok(ActionResult::redirect(next))
}

pub async fn name_of_consultancy(
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<ActionResult, Error> {
    nominator(&session).await?;

    let path = page::with_id(page::NAME_OF_CONSULTANCY, id);
    let mut journey = JourneySession::get(&session).await?;
    let item = match item_on_journey(&mut journey, id, &path) {
        Ok(item) => item,
        Err(redirect) => return Ok(redirect),
    };

    Ok(ActionResult::view(NameOfConsultancyViewModel {
        back_link: item.journey.back_link(&path),
        person_name: person_name(item),
        name_of_consultancy: item.name_of_consultancy.clone().unwrap_or_default(),
        errors: ModelState::new(),
    }))
}

pub async fn submit_name_of_consultancy(
    session: Session,
    Path(id): Path<Uuid>,
    Form(form): Form<NameOfConsultancyForm>,
) -> Result<ActionResult, Error> {
    nominator(&session).await?;

    let path = page::with_id(page::NAME_OF_CONSULTANCY, id);
    let mut journey = JourneySession::get(&session).await?;
    let item = match item_on_journey(&mut journey, id, &path) {
        Ok(item) => item,
        Err(redirect) => return Ok(redirect),
    };

    let mut errors = ModelState::new();
    let name_of_consultancy = errors.require(
        "name_of_consultancy",
        form.name_of_consultancy.as_deref(),
        "the name of the consultancy",
        CONSULTANCY_NAME_MAX_LENGTH,
    );

    if !errors.is_valid() {
        return Ok(ActionResult::view(NameOfConsultancyViewModel {
            back_link: item.journey.back_link(&path),
            person_name: person_name(item),
            name_of_consultancy,
            errors,
        }));
    }

    let next = page::with_id(page::CHECK_DETAILS_SEND_INVITE, id);
    item.name_of_consultancy = Some(name_of_consultancy);
    item.journey.add_to_journey(&path, &next);
    journey.save(&session).await?;

    Ok(ActionResult::redirect(next))
}

pub async fn check_details_send_invite(
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<ActionResult, Error> {
    nominator(&session).await?;

    let path = page::with_id(page::CHECK_DETAILS_SEND_INVITE, id);
    let mut journey = JourneySession::get(&session).await?;
    let item = match item_on_journey(&mut journey, id, &path) {
        Ok(item) => item,
        Err(redirect) => return Ok(redirect),
    };
    let Some(relationship) = item.relationship_with_organisation else {
        return Ok(ActionResult::redirect(page::with_id(
            page::RELATIONSHIP_WITH_ORGANISATION,
            id,
        )));
    };

    Ok(ActionResult::view(CheckDetailsSendInviteViewModel {
        back_link: item.journey.back_link(&path),
        id,
        person_name: person_name(item),
        relationship,
        additional_information: item.additional_relationship_information.clone(),
        job_title: item.job_title.clone(),
        name_of_consultancy: item.name_of_consultancy.clone(),
    }))
}

/// Sends the delegated person nomination and finishes the change.
pub async fn submit_check_details_send_invite(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<ActionResult, Error> {
    let user = nominator(&session).await?;
    let organisation = current_organisation(&user)?;

    let path = page::with_id(page::CHECK_DETAILS_SEND_INVITE, id);
    let mut journey = JourneySession::get(&session).await?;
    let item = match item_on_journey(&mut journey, id, &path) {
        Ok(item) => item,
        Err(redirect) => return Ok(redirect),
    };
    let Some(relationship) = item.relationship_with_organisation else {
        return Ok(ActionResult::redirect(page::with_id(
            page::RELATIONSHIP_WITH_ORGANISATION,
            id,
        )));
    };

    let nomination = DelegatedPersonNominationRequest {
        relationship_type: relationship,
        consultancy_name: item.name_of_consultancy.clone(),
        other_relationship_description: item.additional_relationship_information.clone(),
        job_title: item.job_title.clone(),
    };

    state
        .facade
        .nominate_to_delegated_person(
            user.id,
            id,
            organisation.id,
            user.service_role_id,
            &nomination,
        )
        .await?;

    tracing::info!(
        "User {} nominated connection {} as delegated person",
        user.id,
        id
    );

    journey.permission_management.remove_item(id);
    journey.save(&session).await?;

    Ok(ActionResult::redirect(page::MANAGE_ACCOUNT))
}
