//! Session model: credential plus identity, observed as a unit.

use serde::{Deserialize, Serialize};

use crate::{Identity, Role};

/// Opaque bearer token proving the session to the remote API.
///
/// The client never inspects the token's contents; it only forwards it.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens must not leak through debug logging.
impl core::fmt::Debug for Credential {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// A signed-in session: the credential and its identity, inseparable.
///
/// # Invariants
/// - There is no way to hold a credential without an identity or vice
///   versa; the pair is constructed, persisted and cleared as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub credential: Credential,
    pub identity: Identity,
}

impl Session {
    pub fn new(credential: Credential, identity: Identity) -> Self {
        Self {
            credential,
            identity,
        }
    }

    pub fn role(&self) -> Role {
        self.identity.role
    }
}

/// Observable session lifecycle.
///
/// `Loading` exists only between process start and the completion of
/// session restoration; the gate must never treat it as anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// Role of the current session, or `None` when nobody is signed in
    /// (including while restoration is still pending).
    pub fn role(&self) -> Option<Role> {
        match self {
            SessionState::Authenticated(session) => Some(session.role()),
            _ => None,
        }
    }

    pub fn credential(&self) -> Option<&Credential> {
        match self {
            SessionState::Authenticated(session) => Some(&session.credential),
            _ => None,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated(session) => Some(&session.identity),
            _ => None,
        }
    }
}
