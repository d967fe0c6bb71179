//! Clients for the external collaborators: the OpenID Connect identity provider and the
//! facade API that owns organisation, user and address data.

pub mod auth;
pub mod facade;
