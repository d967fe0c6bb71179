//! Test utilities for the account management portal.
//!
//! Tests describe the facade and identity provider endpoints they need with
//! [`TestBuilder`], then run against the resulting [`TestContext`]: a mockito server
//! standing in for both external services and an in-memory session.
//!
//! Fixture data is plain JSON in the facade's wire format so this crate does not depend on
//! the portal crate.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{
            TEST_CALLBACK_URL, TEST_FACADE_API_KEY, TEST_FACADE_TIMEOUT, TEST_OIDC_CLIENT_ID,
            TEST_OIDC_CLIENT_SECRET, TEST_ORGANISATION_ID,
        },
        fixtures::factory,
        TestBuilder, TestContext, TestError,
    };
}
