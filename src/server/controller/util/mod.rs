//! Helpers shared by the controllers: CSRF validation for sign-in, reading the signed-in
//! user from session and the journey guards used by every wizard page.

pub mod csrf;
pub mod get_user;
pub mod journey;
