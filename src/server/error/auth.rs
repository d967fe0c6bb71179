use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    server::{error::InternalServerError, model::page},
    view::{pages::error::ErrorViewModel, Page},
};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User data is not present in session")]
    UserNotInSession,
    #[error("Failed to sign in user due to CSRF state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to sign in user due to CSRF state missing from session")]
    CsrfMissingValue,
    #[error("Failed to exchange authorization code with the identity provider: {0}")]
    TokenExchange(String),
    #[error("Invalid identity provider URL: {0}")]
    InvalidUrl(#[from] oauth2::url::ParseError),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Redirect::temporary(page::AUTH_LOGIN).into_response()
            }
            Self::CsrfValidationFailed | Self::CsrfMissingValue => {
                tracing::debug!("{}", self);

                let mut response =
                    Page::from(ErrorViewModel::new(StatusCode::BAD_REQUEST.as_u16()))
                        .into_response();
                *response.status_mut() = StatusCode::BAD_REQUEST;

                response
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
