use axum::extract::Query;
use serde::Deserialize;

use crate::{server::model::action::ActionResult, view::pages::error::ErrorViewModel};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorQuery {
    pub status_code: Option<u16>,
}

/// Error page every failed action redirects to, served with the status it describes.
pub async fn error(Query(query): Query<ErrorQuery>) -> ActionResult {
    ActionResult::view(ErrorViewModel::new(query.status_code.unwrap_or(500)))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ActionResult {
    ActionResult::view(ErrorViewModel::new(404))
}
