use std::{str::FromStr, time::Duration};

use crate::server::error::config::ConfigError;

pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_FACADE_TIMEOUT_SECS: u64 = 30;

/// Settings read from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub valkey_url: String,
    pub listen_address: String,

    pub facade_api_url: String,
    pub facade_api_key: String,
    pub facade_timeout: Duration,

    pub oidc_client_id: String,
    pub oidc_client_secret: String,
    pub oidc_auth_url: String,
    pub oidc_token_url: String,
    pub oidc_callback_url: String,

    pub allow_company_details_changes: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source, so tests need not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        Ok(Self {
            valkey_url: required("VALKEY_URL")?,
            listen_address: lookup("LISTEN_ADDRESS")
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDRESS.to_string()),

            facade_api_url: required("FACADE_API_URL")?,
            facade_api_key: required("FACADE_API_KEY")?,
            facade_timeout: Duration::from_secs(parse_or(
                &lookup,
                "FACADE_TIMEOUT_SECS",
                DEFAULT_FACADE_TIMEOUT_SECS,
            )?),

            oidc_client_id: required("OIDC_CLIENT_ID")?,
            oidc_client_secret: required("OIDC_CLIENT_SECRET")?,
            oidc_auth_url: required("OIDC_AUTH_URL")?,
            oidc_token_url: required("OIDC_TOKEN_URL")?,
            oidc_callback_url: required("OIDC_CALLBACK_URL")?,

            allow_company_details_changes: parse_or(
                &lookup,
                "ALLOW_COMPANY_DETAILS_CHANGES",
                true,
            )?,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|err: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: err.to_string(),
            }),
        None => Ok(default),
    }
}
