//! Client for the facade API.
//!
//! The facade owns every piece of organisation, user and address data the portal shows.
//! Operations are grouped by the resource they touch (`user`, `team`, `organisation`,
//! `address`), each adding methods to [`FacadeClient`].

pub mod address;
pub mod organisation;
pub mod team;
pub mod user;

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::server::error::facade::FacadeError;

/// Header carrying the service API key on every facade request.
pub const API_KEY_HEADER: &str = "X-Api-Key";
/// Header identifying the signed-in user a request is made on behalf of.
pub const USER_ID_HEADER: &str = "X-User-Id";

#[derive(Clone)]
pub struct FacadeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FacadeClient {
    /// Creates a facade client.
    ///
    /// # Arguments
    /// - `base_url` - Root URL of the facade API, without a trailing path
    /// - `api_key` - Service API key sent as `X-Api-Key`
    /// - `timeout` - Per-request timeout; calls are not retried
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, FacadeError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn request(&self, method: Method, path: &str, user_id: Option<Uuid>) -> RequestBuilder {
        let request = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(API_KEY_HEADER, &self.api_key);

        match user_id {
            Some(user_id) => request.header(USER_ID_HEADER, user_id.to_string()),
            None => request,
        }
    }

    /// Sends the request and deserializes a JSON response body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> Result<T, FacadeError> {
        let response = self.send(request, path).await?;

        response.json::<T>().await.map_err(|source| FacadeError::Request {
            path: path.to_string(),
            source,
        })
    }

    /// Sends the request, discarding any response body.
    async fn send_empty(&self, request: RequestBuilder, path: &str) -> Result<(), FacadeError> {
        self.send(request, path).await?;

        Ok(())
    }

    async fn send(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> Result<reqwest::Response, FacadeError> {
        let response = request.send().await.map_err(|source| FacadeError::Request {
            path: path.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FacadeError::UnexpectedStatus {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        Ok(response)
    }
}

/// Query string shared by the connection endpoints.
fn organisation_query(organisation_id: Uuid, service_role_id: i32) -> [(&'static str, String); 2] {
    [
        ("organisationId", organisation_id.to_string()),
        ("serviceRoleId", service_role_id.to_string()),
    ]
}
