use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Failure calling the facade API.
#[derive(Error, Debug)]
pub enum FacadeError {
    #[error("Facade request to {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Facade returned status {status} for {path}")]
    UnexpectedStatus { status: u16, path: String },
    #[error("Failed to build facade client: {0}")]
    Client(#[from] reqwest::Error),
}

impl FacadeError {
    /// The facade rejected the request because the resource already exists, e.g. the
    /// invited email address already belongs to a team member.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status: 409, .. })
    }
}

impl IntoResponse for FacadeError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
