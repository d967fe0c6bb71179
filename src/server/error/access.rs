use axum::response::{IntoResponse, Redirect, Response};
use dioxus_logger::tracing;
use thiserror::Error;
use uuid::Uuid;

use crate::server::model::page;

/// The user reached a page they may not use, or the data the page needs is gone.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("User {user_id} is not allowed to {action}")]
    Forbidden { user_id: Uuid, action: &'static str },
    #[error("User {0} is not connected to any organisation")]
    OrganisationNotFound(Uuid),
    #[error("Person {0} is not a member of the organisation's team")]
    TeamMemberNotFound(Uuid),
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::Forbidden { .. } => 403,
            Self::OrganisationNotFound(_) | Self::TeamMemberNotFound(_) => 404,
        };

        Redirect::to(&page::error(status)).into_response()
    }
}
