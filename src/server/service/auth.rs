//! OpenID Connect sign-in.
//!
//! Wraps an `oauth2` authorization code client configured with the identity provider's
//! endpoints. The controller stores the CSRF state from [`OidcClient::login_url`] in
//! session and hands the returned code to [`OidcClient::exchange_code`] on callback.

use oauth2::{
    basic::BasicClient, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    EndpointNotSet, EndpointSet, RedirectUrl, Scope, TokenResponse, TokenUrl,
};

use crate::server::error::{auth::AuthError, facade::FacadeError, Error};

type ConfiguredClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// URL to send the user to and the CSRF state that must come back with them.
#[derive(Debug, Clone)]
pub struct LoginData {
    pub login_url: String,
    pub state: String,
}

#[derive(Clone)]
pub struct OidcClient {
    client: ConfiguredClient,
    http: reqwest::Client,
}

impl OidcClient {
    /// Builds a client for the identity provider.
    ///
    /// # Arguments
    /// - `client_id` / `client_secret` - Credentials registered with the identity provider
    /// - `auth_url` - Authorization endpoint the user is redirected to
    /// - `token_url` - Token endpoint the authorization code is exchanged at
    /// - `callback_url` - This portal's callback route as registered with the provider
    ///
    /// # Returns
    /// - `Ok(OidcClient)` - Client ready to build login URLs and exchange codes
    /// - `Err(Error::AuthError(AuthError::InvalidUrl))` - One of the URLs failed to parse
    /// - `Err(Error::FacadeError(FacadeError::Client))` - The HTTP client failed to build
    pub fn new(
        client_id: &str,
        client_secret: &str,
        auth_url: &str,
        token_url: &str,
        callback_url: &str,
    ) -> Result<Self, Error> {
        let client = BasicClient::new(ClientId::new(client_id.to_string()))
            .set_client_secret(ClientSecret::new(client_secret.to_string()))
            .set_auth_uri(AuthUrl::new(auth_url.to_string()).map_err(AuthError::from)?)
            .set_token_uri(TokenUrl::new(token_url.to_string()).map_err(AuthError::from)?)
            .set_redirect_uri(RedirectUrl::new(callback_url.to_string()).map_err(AuthError::from)?);

        // Following redirects from the token endpoint would open the client to SSRF.
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(FacadeError::from)?;

        Ok(Self { client, http })
    }

    pub fn login_url(&self) -> LoginData {
        let (url, state) = self
            .client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("offline_access".to_string()))
            .url();

        LoginData {
            login_url: url.to_string(),
            state: state.secret().to_string(),
        }
    }

    /// Exchanges the authorization code for an access token.
    pub async fn exchange_code(&self, code: &str) -> Result<String, Error> {
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|err| AuthError::TokenExchange(err.to_string()))?;

        Ok(token.access_token().secret().to_string())
    }
}
