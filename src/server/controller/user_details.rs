//! Changes to the signed-in user's own details.
//!
//! Approved and delegated persons are legally named on the organisation's account, so a
//! change to their name or job title goes to the regulator after a declaration. Telephone
//! changes, and any change by other users, apply immediately.

use axum::{extract::State, Form};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::UserDetailsUpdateRequest, user::UserData},
    server::{
        controller::util::{
            get_user::get_user_from_session,
            journey::{enter_journey, redirect_if_off_journey},
        },
        error::Error,
        model::{
            action::ActionResult,
            app::AppState,
            journey::Journey,
            page,
            session::{
                journey::{EditUserDetails, JourneySession},
                user::SessionUserData,
            },
            validation::{
                is_valid_telephone, ModelState, JOB_TITLE_MAX_LENGTH, NAME_MAX_LENGTH,
                TELEPHONE_MAX_LENGTH,
            },
        },
    },
    view::pages::user_details::{
        CheckYourDetailsViewModel, DeclarationViewModel, DetailsChangeRequestedViewModel,
        WhatAreYourDetailsViewModel,
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct WhatAreYourDetailsForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub job_title: Option<String>,
    pub telephone: Option<String>,
}

fn current_details(user: &UserData) -> EditUserDetails {
    EditUserDetails {
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        job_title: user.job_title.clone(),
        telephone: user.telephone.clone().unwrap_or_default(),
    }
}

/// Whether the regulator must approve the change before it applies.
pub fn requires_approval(user: &UserData, updated: &EditUserDetails) -> bool {
    user.is_approved_or_delegated()
        && (updated.first_name != user.first_name
            || updated.last_name != user.last_name
            || updated.job_title != user.job_title)
}

fn apply_details(user: &mut UserData, details: &EditUserDetails) {
    user.first_name = details.first_name.clone();
    user.last_name = details.last_name.clone();
    user.job_title = details.job_title.clone();
    user.telephone = Some(details.telephone.clone());
}

fn update_request(details: &EditUserDetails) -> UserDetailsUpdateRequest {
    UserDetailsUpdateRequest {
        first_name: details.first_name.clone(),
        last_name: details.last_name.clone(),
        job_title: details.job_title.clone(),
        telephone: details.telephone.clone(),
    }
}

pub async fn what_are_your_details(session: Session) -> Result<ActionResult, Error> {
    let user = get_user_from_session(&session).await?;

    let mut journey = JourneySession::get(&session).await?;
    let details = &mut journey.user_details;
    enter_journey(&mut details.journey, page::WHAT_ARE_YOUR_DETAILS);

    let model = WhatAreYourDetailsViewModel {
        back_link: details.journey.back_link(page::WHAT_ARE_YOUR_DETAILS),
        details: details
            .edit
            .clone()
            .unwrap_or_else(|| current_details(&user)),
        errors: ModelState::new(),
    };
    journey.save(&session).await?;

    Ok(ActionResult::view(model))
}

pub async fn submit_what_are_your_details(
    session: Session,
    Form(form): Form<WhatAreYourDetailsForm>,
) -> Result<ActionResult, Error> {
    get_user_from_session(&session).await?;

    let mut journey = JourneySession::get(&session).await?;
    let details = &mut journey.user_details;
    enter_journey(&mut details.journey, page::WHAT_ARE_YOUR_DETAILS);

    let mut errors = ModelState::new();
    let updated = EditUserDetails {
        first_name: errors.require(
            "first_name",
            form.first_name.as_deref(),
            "your first name",
            NAME_MAX_LENGTH,
        ),
        last_name: errors.require(
            "last_name",
            form.last_name.as_deref(),
            "your last name",
            NAME_MAX_LENGTH,
        ),
        job_title: errors.optional(
            "job_title",
            form.job_title.as_deref(),
            "your job title",
            JOB_TITLE_MAX_LENGTH,
        ),
        telephone: errors.require(
            "telephone",
            form.telephone.as_deref(),
            "your telephone number",
            TELEPHONE_MAX_LENGTH,
        ),
    };
    if !updated.telephone.is_empty() && !is_valid_telephone(&updated.telephone) {
        errors.add(
            "telephone",
            "Enter a telephone number, like 01632 960 001 or +44 808 157 0192",
        );
    }

    if !errors.is_valid() {
        return Ok(ActionResult::view(WhatAreYourDetailsViewModel {
            back_link: details.journey.back_link(page::WHAT_ARE_YOUR_DETAILS),
            details: updated,
            errors,
        }));
    }

    details.edit = Some(updated);
    details
        .journey
        .add_to_journey(page::WHAT_ARE_YOUR_DETAILS, page::CHECK_YOUR_DETAILS);
    journey.save(&session).await?;

    Ok(ActionResult::redirect(page::CHECK_YOUR_DETAILS))
}

pub async fn check_your_details(session: Session) -> Result<ActionResult, Error> {
    let user = get_user_from_session(&session).await?;

    let journey = JourneySession::get(&session).await?;
    let details = &journey.user_details;
    if let Some(redirect) = redirect_if_off_journey(&details.journey, page::CHECK_YOUR_DETAILS) {
        return Ok(redirect);
    }
    let Some(updated) = details.edit.clone() else {
        return Ok(ActionResult::redirect(page::WHAT_ARE_YOUR_DETAILS));
    };

    Ok(ActionResult::view(CheckYourDetailsViewModel {
        back_link: details.journey.back_link(page::CHECK_YOUR_DETAILS),
        original: current_details(&user),
        requires_approval: requires_approval(&user, &updated),
        updated,
    }))
}

/// Applies the change, or sends the user on to the declaration when it needs approval.
pub async fn submit_check_your_details(
    State(state): State<AppState>,
    session: Session,
) -> Result<ActionResult, Error> {
    let mut user = get_user_from_session(&session).await?;

    let mut journey = JourneySession::get(&session).await?;
    let details = &mut journey.user_details;
    if let Some(redirect) = redirect_if_off_journey(&details.journey, page::CHECK_YOUR_DETAILS) {
        return Ok(redirect);
    }
    let Some(updated) = details.edit.clone() else {
        return Ok(ActionResult::redirect(page::WHAT_ARE_YOUR_DETAILS));
    };

    if updated == current_details(&user) {
        details.edit = None;
        details.journey.reset_to(page::MANAGE_ACCOUNT);
        journey.save(&session).await?;

        return Ok(ActionResult::redirect(page::MANAGE_ACCOUNT));
    }

    if requires_approval(&user, &updated) {
        details
            .journey
            .add_to_journey(page::CHECK_YOUR_DETAILS, page::DECLARATION);
        journey.save(&session).await?;

        return Ok(ActionResult::redirect(page::DECLARATION));
    }

    let response = state
        .facade
        .update_user_details(user.id, &update_request(&updated))
        .await?;

    if response.requires_approval {
        tracing::debug!(
            "Details change for user {} was sent for approval by the facade",
            user.id
        );

        details
            .journey
            .add_to_journey(page::CHECK_YOUR_DETAILS, page::DETAILS_CHANGE_REQUESTED);
        journey.save(&session).await?;

        return Ok(ActionResult::redirect(page::DETAILS_CHANGE_REQUESTED));
    }

    apply_details(&mut user, &updated);
    SessionUserData::insert(&session, &user).await?;

    details.edit = None;
    details.journey.reset_to(page::MANAGE_ACCOUNT);
    journey.save(&session).await?;

    Ok(ActionResult::redirect(page::MANAGE_ACCOUNT))
}

pub async fn declaration(session: Session) -> Result<ActionResult, Error> {
    get_user_from_session(&session).await?;

    let journey = JourneySession::get(&session).await?;
    let details = &journey.user_details;
    if let Some(redirect) = redirect_if_off_journey(&details.journey, page::DECLARATION) {
        return Ok(redirect);
    }
    if details.edit.is_none() {
        return Ok(ActionResult::redirect(page::WHAT_ARE_YOUR_DETAILS));
    }

    Ok(ActionResult::view(DeclarationViewModel {
        back_link: details.journey.back_link(page::DECLARATION),
    }))
}

/// Submits the change for the regulator's approval.
pub async fn submit_declaration(
    State(state): State<AppState>,
    session: Session,
) -> Result<ActionResult, Error> {
    let mut user = get_user_from_session(&session).await?;

    let mut journey = JourneySession::get(&session).await?;
    let details = &mut journey.user_details;
    if let Some(redirect) = redirect_if_off_journey(&details.journey, page::DECLARATION) {
        return Ok(redirect);
    }
    let Some(updated) = details.edit.clone() else {
        return Ok(ActionResult::redirect(page::WHAT_ARE_YOUR_DETAILS));
    };

    let response = state
        .facade
        .update_user_details(user.id, &update_request(&updated))
        .await?;

    if !response.requires_approval {
        apply_details(&mut user, &updated);
        SessionUserData::insert(&session, &user).await?;
    }

    details
        .journey
        .add_to_journey(page::DECLARATION, page::DETAILS_CHANGE_REQUESTED);
    journey.save(&session).await?;

    Ok(ActionResult::redirect(page::DETAILS_CHANGE_REQUESTED))
}

/// Confirmation of a change sent for approval. Shown once; the journey ends here.
pub async fn details_change_requested(session: Session) -> Result<ActionResult, Error> {
    let user = get_user_from_session(&session).await?;

    let mut journey = JourneySession::get(&session).await?;
    let details = &mut journey.user_details;
    if let Some(redirect) =
        redirect_if_off_journey(&details.journey, page::DETAILS_CHANGE_REQUESTED)
    {
        return Ok(redirect);
    }

    details.edit = None;
    details.journey.reset_to(page::MANAGE_ACCOUNT);
    journey.save(&session).await?;

    Ok(ActionResult::view(DetailsChangeRequestedViewModel {
        user_name: user.full_name(),
    }))
}
