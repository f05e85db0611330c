//! Transport error model.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The API rejected the credential. The session has already been
    /// reset and navigation forced to the login route by the time a
    /// caller sees this.
    #[error("unauthorized: session has been reset")]
    Unauthorized,

    /// No response at all (DNS, refused connection, timeout). The
    /// session is left untouched.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// Whether this failure reset the session (expired authorization).
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
    }
}

/// Pull a human-readable message out of a server error body.
///
/// Probes `message`, then `error`; the fallback covers bodies that are
/// empty, non-JSON, or shaped differently.
pub fn server_message(body: &serde_json::Value, fallback: &str) -> String {
    for key in ["message", "error"] {
        if let Some(text) = body.get(key).and_then(|v| v.as_str()) {
            if !text.is_empty() {
                return text.to_string();
            }
        }
    }
    fallback.to_string()
}
