//! Account management portal.
//!
//! Organisation users sign in through OpenID Connect and then manage their own profile
//! details, their organisation's company details and their team's permissions through a
//! set of server-rendered, session-backed wizard pages. Organisation, user and address data
//! come from an external facade API.

pub mod model;
pub mod server;
pub mod view;
