use axum::response::{IntoResponse, Redirect, Response};

use crate::view::Page;

/// Outcome of a controller action: render a page or send the browser elsewhere.
///
/// Keeping this as data rather than an opaque `Response` lets tests assert on the view
/// model or redirect target directly.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionResult {
    View(Page),
    /// 303 See Other to the given path, so a refreshed POST is never re-submitted.
    Redirect(String),
}

impl ActionResult {
    pub fn view(page: impl Into<Page>) -> Self {
        Self::View(page.into())
    }

    pub fn redirect(path: impl Into<String>) -> Self {
        Self::Redirect(path.into())
    }

    pub fn redirect_location(&self) -> Option<&str> {
        match self {
            Self::Redirect(path) => Some(path),
            Self::View(_) => None,
        }
    }

    pub fn page(&self) -> Option<&Page> {
        match self {
            Self::View(page) => Some(page),
            Self::Redirect(_) => None,
        }
    }
}

impl IntoResponse for ActionResult {
    fn into_response(self) -> Response {
        match self {
            Self::View(page) => page.into_response(),
            Self::Redirect(path) => Redirect::to(&path).into_response(),
        }
    }
}
