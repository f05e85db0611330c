//! Identity associated with a credential.

use serde::{Deserialize, Serialize};

use trimdesk_core::UserId;

use crate::Role;

/// The user behind a session.
///
/// Deserialized from the auth API's `user` object. A missing `role`
/// field defaults to `Role::Client` so a bare identity never carries
/// elevated privileges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Role,
}

impl Identity {
    pub fn new(id: UserId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
        }
    }
}
