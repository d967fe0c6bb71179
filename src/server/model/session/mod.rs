//! Session data models.
//!
//! Type-safe wrappers around the values this portal keeps in the tower-sessions session:
//! the sign-in CSRF state, the signed-in user's data and the wizard journeys. Each wrapper
//! owns its session key so no controller touches raw keys.

pub mod auth;
pub mod journey;
pub mod user;
