//! API base-URL configuration.
//!
//! The backend exposes its resource groups on potentially different
//! hosts, so each audience gets its own configurable base URL.

/// Logical target API group for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    /// Miscellaneous `/api`-prefixed resources.
    General,
    /// `/auth/*` endpoints.
    Auth,
    /// `/barber-services`.
    Services,
    /// `/users/barbers`.
    Barbers,
    /// `/bookings*` endpoints.
    Bookings,
}

/// Resolved base URLs, one per audience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub general: String,
    pub auth: String,
    pub services: String,
    pub barbers: String,
    pub bookings: String,
}

impl ApiConfig {
    /// Read the configuration from the environment.
    ///
    /// Every audience falls back to a local development host; the
    /// fallback is logged so a misconfigured deployment is visible.
    pub fn from_env() -> Self {
        Self {
            general: var_or("BOOKING_API_BASE_URL", "http://localhost:3000/api"),
            auth: var_or("BOOKING_AUTH_BASE_URL", "http://localhost:3000"),
            services: var_or("BOOKING_SERVICES_BASE_URL", "http://localhost:3000"),
            barbers: var_or("BOOKING_BARBERS_BASE_URL", "http://localhost:3000"),
            bookings: var_or("BOOKING_BOOKINGS_BASE_URL", "http://localhost:3000"),
        }
    }

    /// Point every audience at one host (tests, single-host deployments).
    pub fn single_host(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            general: base.clone(),
            auth: base.clone(),
            services: base.clone(),
            barbers: base.clone(),
            bookings: base,
        }
    }

    pub fn base_url(&self, audience: Audience) -> &str {
        match audience {
            Audience::General => &self.general,
            Audience::Auth => &self.auth,
            Audience::Services => &self.services,
            Audience::Barbers => &self.barbers,
            Audience::Bookings => &self.bookings,
        }
    }
}

fn var_or(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            tracing::warn!("{name} not set; using {default}");
            default.to_string()
        }
    }
}
