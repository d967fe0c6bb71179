use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::{
    fred::prelude::{ClientLike, Config as RedisConfig, Pool},
    RedisStore,
};

use crate::server::{
    config::Config,
    error::Error,
    model::app::{AppState, FeatureFlags},
    service::{auth::OidcClient, facade::FacadeClient},
};

/// Build the facade API client with the configured key and timeout
pub fn build_facade_client(config: &Config) -> Result<FacadeClient, Error> {
    let facade = FacadeClient::new(
        &config.facade_api_url,
        &config.facade_api_key,
        config.facade_timeout,
    )?;

    Ok(facade)
}

/// Build the OpenID Connect client for the identity provider
pub fn build_oidc_client(config: &Config) -> Result<OidcClient, Error> {
    OidcClient::new(
        &config.oidc_client_id,
        &config.oidc_client_secret,
        &config.oidc_auth_url,
        &config.oidc_token_url,
        &config.oidc_callback_url,
    )
}

pub fn build_app_state(config: &Config) -> Result<AppState, Error> {
    Ok(AppState {
        facade: build_facade_client(config)?,
        oidc: build_oidc_client(config)?,
        features: FeatureFlags {
            allow_company_details_changes: config.allow_company_details_changes,
        },
    })
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<Pool>>, Error> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};

    let redis_config = RedisConfig::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Debug builds serve plain HTTP, so the cookie cannot be marked secure.
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}
