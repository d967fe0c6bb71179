use crate::server::service::{auth::OidcClient, facade::FacadeClient};

/// Shared state handed to every controller action.
#[derive(Clone)]
pub struct AppState {
    pub facade: FacadeClient,
    pub oidc: OidcClient,
    pub features: FeatureFlags,
}

/// Switches for functionality that can be turned off per environment.
#[derive(Clone, Copy, Debug)]
pub struct FeatureFlags {
    pub allow_company_details_changes: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            allow_company_details_changes: true,
        }
    }
}
