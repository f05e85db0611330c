//! `trimdesk-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it models
//! who is signed in (`SessionState`), how much privilege they carry
//! (`Role`), and whether a route may render for them (`gate::decide`).

pub mod gate;
pub mod identity;
pub mod role;
pub mod session;

pub use gate::{GateDecision, RouteRequirement, decide};
pub use identity::Identity;
pub use role::Role;
pub use session::{Credential, Session, SessionState};
