//! The authenticated API client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde_json::Value;

use trimdesk_session::SessionStore;

use crate::config::{ApiConfig, Audience};
use crate::envelope::normalize_list;
use crate::error::{ClientError, server_message};

/// Sink for forced client-side navigation.
///
/// The client only ever forces one navigation: to the login route, when
/// the API reports the credential expired. The routing shell implements
/// this.
pub trait Navigator: Send + Sync {
    fn redirect_to_login(&self);
}

/// Authenticated HTTP client for the booking API.
///
/// Cheap to clone; all clones share the HTTP connection pool, the
/// session store and the navigator.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ApiConfig>,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
            session,
            navigator,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Issue a request against an audience's base URL.
    ///
    /// Attaches the bearer credential when one exists, always exchanges
    /// JSON, and handles the one cross-cutting failure: a 401 resets the
    /// session, forces navigation to login, and surfaces
    /// `ClientError::Unauthorized`, so the in-flight request never
    /// resolves as a success. Every other response comes back raw for
    /// the caller to interpret.
    pub async fn request(
        &self,
        method: Method,
        audience: Audience,
        endpoint: &str,
        body: Option<&Value>,
        timeout: Option<Duration>,
    ) -> Result<Response, ClientError> {
        let url = format!("{}{}", self.config.base_url(audience), endpoint);
        let credential = self.session.credential().await;

        tracing::debug!(
            %url,
            method = %method,
            has_token = credential.is_some(),
            "issuing API request"
        );

        let mut request = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "*/*");

        if let Some(credential) = &credential {
            request = request.bearer_auth(credential.as_str());
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;

        tracing::debug!(status = %response.status(), %url, "API response");

        if response.status() == StatusCode::UNAUTHORIZED {
            // Expired or invalid credential: a session-wide reset, not a
            // local failure.
            if let Err(err) = self.session.logout().await {
                tracing::warn!("failed to clear persisted session after 401: {err}");
            }
            self.navigator.redirect_to_login();
            return Err(ClientError::Unauthorized);
        }

        Ok(response)
    }

    pub async fn get(&self, audience: Audience, endpoint: &str) -> Result<Response, ClientError> {
        self.request(Method::GET, audience, endpoint, None, None)
            .await
    }

    pub async fn post(
        &self,
        audience: Audience,
        endpoint: &str,
        body: &Value,
    ) -> Result<Response, ClientError> {
        self.request(Method::POST, audience, endpoint, Some(body), None)
            .await
    }

    pub async fn patch(
        &self,
        audience: Audience,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Response, ClientError> {
        self.request(Method::PATCH, audience, endpoint, body, None)
            .await
    }

    /// GET a list endpoint and normalize its envelope.
    pub async fn get_list<T: serde::de::DeserializeOwned>(
        &self,
        audience: Audience,
        endpoint: &str,
        plural_key: &str,
        timeout: Option<Duration>,
    ) -> Result<Vec<T>, ClientError> {
        let response = self
            .request(Method::GET, audience, endpoint, None, timeout)
            .await?;
        let response = Self::require_success(response, "failed to fetch list").await?;
        let body: Value = response
            .json()
            .await
            .map_err(|err| ClientError::Parse(err.to_string()))?;
        normalize_list(body, plural_key)
    }

    /// Turn a non-success response into `ClientError::Api`, extracting
    /// the server's message when the body carries one.
    pub async fn require_success(
        response: Response,
        fallback: &str,
    ) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        Err(ClientError::Api {
            status: status.as_u16(),
            message: server_message(&body, fallback),
        })
    }
}
