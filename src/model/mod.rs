//! Data models shared between the facade client, the session and the views.
//!
//! These types mirror the JSON contract of the facade API (camelCase on the wire) and are
//! also stored in the session, so every type here is `Serialize + Deserialize`.

pub mod address;
pub mod api;
pub mod organisation;
pub mod permission;
pub mod team;
pub mod user;
