//! Controller actions for every page of the portal.
//!
//! Each action is an axum handler returning `Result<ActionResult, Error>`: it reads the
//! signed-in user and the journey from session, calls the facade where the page needs
//! it, and either renders a view model or redirects. Wizard pages come in pairs, a GET
//! that renders and a `submit_*` POST that validates and moves the journey on.

pub mod account;
pub mod auth;
pub mod company_details;
pub mod error;
pub mod permission;
pub mod team;
pub mod user_details;
pub mod util;
