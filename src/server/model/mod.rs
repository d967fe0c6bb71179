//! Server-side models: application state, page paths, journeys, session wrappers and the
//! result type returned by controller actions.

pub mod action;
pub mod app;
pub mod journey;
pub mod page;
pub mod session;
pub mod validation;
