//! One module per area of the portal, each holding the view models and page components
//! for its pages.

pub mod auth;
pub mod company_details;
pub mod error;
pub mod manage_account;
pub mod permission;
pub mod team;
pub mod user_details;
