//! Error types for the account management server.
//!
//! Each domain (configuration, sign-in, access to pages, facade calls) has its own error
//! enum. They are aggregated into [`Error`], which controllers return with `?`. Every error
//! implements `IntoResponse`: users are sent to the sign-in route or to the error page with
//! the matching HTTP status code, never shown raw error text.

pub mod access;
pub mod auth;
pub mod config;
pub mod facade;

use axum::response::{IntoResponse, Redirect, Response};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::{
    error::{access::AccessError, auth::AuthError, config::ConfigError, facade::FacadeError},
    model::page,
};

/// Main error type for the account management server.
///
/// Uses `thiserror`'s `#[from]` so the domain errors and the session/Redis library errors
/// convert with the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Sign-in error (user not in session, CSRF, token exchange).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// The user may not see the requested page or the data behind it is missing.
    #[error(transparent)]
    AccessError(#[from] AccessError),
    /// Facade API call failed.
    #[error(transparent)]
    FacadeError(#[from] FacadeError),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Failure binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors pick their own response; anything else is logged and the user is sent to
/// the generic error page.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::AccessError(err) => err.into_response(),
            Self::FacadeError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper for converting any displayable error into a redirect to the 500 error page.
///
/// The error is logged in full; the user only sees the generic error page so no
/// implementation details leak into the browser.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        Redirect::to(&page::error(500)).into_response()
    }
}
