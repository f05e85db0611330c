//! Sign-in and registration.

use serde_json::{Value, json};

use trimdesk_auth::{Credential, Identity};
use trimdesk_client::{ApiClient, Audience, ClientError, endpoints};

use crate::error::FlowError;

/// Login and registration against the auth endpoints.
///
/// A successful authentication persists the credential+identity pair
/// through the session store before returning, so the caller observes
/// the new session as a unit.
#[derive(Clone)]
pub struct AuthFlow {
    api: ApiClient,
}

impl AuthFlow {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn login(&self, phone: &str, password: &str) -> Result<Identity, FlowError> {
        if phone.trim().is_empty() || password.is_empty() {
            return Err(FlowError::Invalid(
                "Phone number and password are required.".to_string(),
            ));
        }

        let body = json!({ "phone": phone, "password": password });
        self.authenticate(endpoints::LOGIN, &body, "Sign-in failed. Please try again.")
            .await
    }

    pub async fn register(
        &self,
        name: &str,
        phone: &str,
        password: &str,
    ) -> Result<Identity, FlowError> {
        if name.trim().is_empty() || phone.trim().is_empty() || password.is_empty() {
            return Err(FlowError::Invalid(
                "Name, phone number and password are required.".to_string(),
            ));
        }

        let body = json!({ "name": name, "phone": phone, "password": password });
        self.authenticate(
            endpoints::REGISTER,
            &body,
            "Registration failed. Please try again.",
        )
        .await
    }

    pub async fn logout(&self) -> Result<(), FlowError> {
        self.api.session().logout().await?;
        Ok(())
    }

    async fn authenticate(
        &self,
        endpoint: &str,
        body: &Value,
        fallback: &str,
    ) -> Result<Identity, FlowError> {
        let response = self.api.post(Audience::Auth, endpoint, body).await?;
        let response = ApiClient::require_success(response, fallback).await?;
        let body: Value = response
            .json()
            .await
            .map_err(|err| ClientError::Parse(err.to_string()))?;

        let (credential, identity) = parse_auth_body(body)?;
        self.api
            .session()
            .login(credential, identity.clone())
            .await?;
        Ok(identity)
    }
}

/// Extract `token` + `user` from an auth response, tolerating a `data`
/// envelope around the payload.
fn parse_auth_body(body: Value) -> Result<(Credential, Identity), FlowError> {
    let payload = match body.get("data") {
        Some(inner) if inner.is_object() => inner,
        _ => &body,
    };

    let token = payload
        .get("token")
        .and_then(|v| v.as_str())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ClientError::Parse("auth response carries no token".to_string()))?;

    let identity: Identity = payload
        .get("user")
        .cloned()
        .map(serde_json::from_value)
        .transpose()
        .map_err(|err| ClientError::Parse(err.to_string()))?
        .ok_or_else(|| ClientError::Parse("auth response carries no user".to_string()))?;

    Ok((Credential::new(token), identity))
}
