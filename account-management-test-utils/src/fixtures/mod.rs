//! Fixtures for tests.
//!
//! - `auth` - identity provider endpoints
//! - `facade` - facade API endpoints
//! - `factory` - JSON bodies in the facade's wire format

pub mod auth;
pub mod facade;
pub mod factory;
