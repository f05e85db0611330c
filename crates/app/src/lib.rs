//! `trimdesk-app`
//!
//! **Responsibility:** composition of the booking client.
//!
//! Wires the session store, API client and domain crates into the route
//! surface and the user-facing flows (sign-in, booking submission, the
//! admin review board, the analytics snapshot). Rendering is out of
//! scope; every flow returns data and decisions for a UI shell to act
//! on.

pub mod error;
pub mod flows;
pub mod router;
pub mod routes;

pub use error::FlowError;
pub use router::{Resolution, Router};
pub use routes::Route;

use std::sync::Arc;

use trimdesk_client::{ApiClient, ApiConfig};
use trimdesk_session::SessionStore;

/// Everything a UI shell needs, built from one config and one session.
#[derive(Clone)]
pub struct App {
    pub session: SessionStore,
    pub router: Arc<Router>,
    pub api: ApiClient,
}

impl App {
    /// Assemble the client around an existing session store.
    pub fn new(config: ApiConfig, session: SessionStore) -> Self {
        let router = Arc::new(Router::new(session.clone()));
        let api = ApiClient::new(config, session.clone(), router.clone());
        Self {
            session,
            router,
            api,
        }
    }

    /// Assemble with durable platform storage and environment config.
    pub fn from_env() -> Result<Self, trimdesk_session::StoreError> {
        Ok(Self::new(ApiConfig::from_env(), SessionStore::file_backed()?))
    }

    pub fn auth(&self) -> flows::auth::AuthFlow {
        flows::auth::AuthFlow::new(self.api.clone())
    }

    pub fn booking(&self) -> flows::booking::BookingFlow {
        flows::booking::BookingFlow::new(self.api.clone())
    }

    pub fn admin_board(&self) -> flows::admin::AdminBoard {
        flows::admin::AdminBoard::new(self.api.clone())
    }

    pub fn analytics(&self) -> flows::analytics::AnalyticsFlow {
        flows::analytics::AnalyticsFlow::new(self.api.clone())
    }
}
