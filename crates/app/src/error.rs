//! Flow-level error model.

use thiserror::Error;

use trimdesk_client::ClientError;
use trimdesk_session::StoreError;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("session storage: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Invalid(String),
}

impl FlowError {
    /// Message suitable for inline display next to a form or banner.
    ///
    /// Server-provided messages pass through; transport problems get a
    /// human-readable line the operator can act on.
    pub fn user_message(&self) -> String {
        match self {
            FlowError::Client(ClientError::Unauthorized) => {
                "Your session has expired. Please sign in again.".to_string()
            }
            FlowError::Client(ClientError::Network(_)) => {
                "Network error. Please check your connection and try again.".to_string()
            }
            FlowError::Client(ClientError::Api { message, .. }) => message.clone(),
            FlowError::Client(ClientError::Parse(_)) => {
                "The server sent an unexpected response.".to_string()
            }
            FlowError::Store(_) => "Could not access saved session data.".to_string(),
            FlowError::Invalid(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_messages_pass_through() {
        let err = FlowError::Client(ClientError::Api {
            status: 409,
            message: "slot already taken".to_string(),
        });
        assert_eq!(err.user_message(), "slot already taken");
    }

    #[test]
    fn network_failures_get_a_retry_hint() {
        let err = FlowError::Client(ClientError::Network("connection refused".to_string()));
        assert!(err.user_message().contains("try again"));
    }
}
