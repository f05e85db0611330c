//! Navigation shell around the auth gate.

use std::sync::Mutex;

use trimdesk_auth::{GateDecision, decide};
use trimdesk_client::Navigator;
use trimdesk_session::SessionStore;

use crate::routes::Route;

/// What a navigation attempt resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The requested route renders.
    Render(Route),
    /// Session restoration is still pending; show a placeholder and
    /// keep the previous location.
    Loading,
    /// The gate sent the visitor elsewhere.
    Redirected { from: Route, to: Route },
}

/// Tracks the current location and applies gate decisions.
pub struct Router {
    session: SessionStore,
    location: Mutex<Route>,
}

impl Router {
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            location: Mutex::new(Route::Home),
        }
    }

    /// Navigate to a path, consulting the gate.
    pub async fn navigate(&self, path: &str) -> Resolution {
        let route = Route::parse(path);
        let state = self.session.state().await;

        match decide(&state, route.requirement()) {
            GateDecision::Render => {
                self.set_location(route);
                Resolution::Render(route)
            }
            GateDecision::Loading => Resolution::Loading,
            GateDecision::RedirectLogin => {
                self.set_location(Route::Login);
                Resolution::Redirected {
                    from: route,
                    to: Route::Login,
                }
            }
            GateDecision::RedirectHome => {
                self.set_location(Route::Home);
                Resolution::Redirected {
                    from: route,
                    to: Route::Home,
                }
            }
        }
    }

    pub fn location(&self) -> Route {
        *self.location.lock().unwrap()
    }

    fn set_location(&self, route: Route) {
        *self.location.lock().unwrap() = route;
    }
}

impl Navigator for Router {
    /// Forced navigation after a credential expiry. The session is
    /// already cleared when this fires.
    fn redirect_to_login(&self) {
        tracing::info!("session expired; redirecting to login");
        self.set_location(Route::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use trimdesk_auth::{Credential, Identity, Role};
    use trimdesk_core::UserId;
    use trimdesk_session::{MemoryBackend, SessionStore};

    async fn store_with(role: Option<Role>) -> SessionStore {
        let store = SessionStore::new(Arc::new(MemoryBackend::new()));
        store.restore().await;
        if let Some(role) = role {
            store
                .login(
                    Credential::new("tok"),
                    Identity::new(UserId::new(1), "t", role),
                )
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn anonymous_booking_attempt_lands_on_login() {
        let router = Router::new(store_with(None).await);
        let resolution = router.navigate("/booking").await;
        assert_eq!(
            resolution,
            Resolution::Redirected {
                from: Route::Booking,
                to: Route::Login
            }
        );
        assert_eq!(router.location(), Route::Login);
    }

    #[tokio::test]
    async fn client_admin_attempt_lands_on_home() {
        let router = Router::new(store_with(Some(Role::Client)).await);
        let resolution = router.navigate("/admin").await;
        assert_eq!(
            resolution,
            Resolution::Redirected {
                from: Route::Admin,
                to: Route::Home
            }
        );
    }

    #[tokio::test]
    async fn superadmin_renders_admin_route() {
        let router = Router::new(store_with(Some(Role::Superadmin)).await);
        assert_eq!(
            router.navigate("/admin").await,
            Resolution::Render(Route::Admin)
        );
        assert_eq!(router.location(), Route::Admin);
    }

    #[tokio::test]
    async fn pending_restore_keeps_the_previous_location() {
        let store = SessionStore::new(Arc::new(MemoryBackend::new()));
        // No restore(): the state is still Loading.
        let router = Router::new(store);
        assert_eq!(router.navigate("/booking").await, Resolution::Loading);
        assert_eq!(router.location(), Route::Home);
    }

    #[tokio::test]
    async fn unknown_path_renders_not_found_for_everyone() {
        let router = Router::new(store_with(None).await);
        assert_eq!(
            router.navigate("/whatever").await,
            Resolution::Render(Route::NotFound)
        );
    }
}
