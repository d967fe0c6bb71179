//! Server application core modules.
//!
//! Everything that runs on the server: configuration, HTTP routing, the controller actions
//! behind each page, session-backed journeys, errors and the clients for the identity
//! provider and the facade API.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
