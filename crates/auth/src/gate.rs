//! Route access gate.
//!
//! One pure decision function evaluated on every navigation. The routing
//! shell supplies the current session state and the route's requirement
//! and acts on the returned decision; the gate itself performs no
//! navigation and touches no shared state.

use serde::{Deserialize, Serialize};

use crate::{Role, SessionState};

/// Access requirement a route declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteRequirement {
    Public,
    RequiresAuth,
    RequiresAdmin,
    RequiresSuperadmin,
}

impl RouteRequirement {
    /// The least role that satisfies this requirement, if any.
    ///
    /// Encoding requirements as a minimum role makes "superadmin passes
    /// admin routes" structural instead of depending on check order.
    pub fn minimum_role(self) -> Option<Role> {
        match self {
            RouteRequirement::Public => None,
            RouteRequirement::RequiresAuth => Some(Role::Client),
            RouteRequirement::RequiresAdmin => Some(Role::Admin),
            RouteRequirement::RequiresSuperadmin => Some(Role::Superadmin),
        }
    }
}

/// Outcome of a gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The route may render.
    Render,
    /// Session restoration has not finished; show a placeholder, never
    /// redirect.
    Loading,
    /// No session where one is required.
    RedirectLogin,
    /// A session exists but its role is insufficient.
    RedirectHome,
}

/// Decide whether a route may render for the current session.
///
/// - No IO
/// - No panics
/// - Deterministic for a given (state, requirement) pair
pub fn decide(state: &SessionState, requirement: RouteRequirement) -> GateDecision {
    if state.is_loading() {
        return GateDecision::Loading;
    }

    let Some(minimum) = requirement.minimum_role() else {
        return GateDecision::Render;
    };

    match state.role() {
        None => GateDecision::RedirectLogin,
        Some(role) if role.satisfies(minimum) => GateDecision::Render,
        Some(_) => GateDecision::RedirectHome,
    }
}
