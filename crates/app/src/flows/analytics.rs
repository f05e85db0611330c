//! Analytics snapshot (admin/superadmin role).

use std::time::Duration;

use chrono::Local;

use trimdesk_bookings::Booking;
use trimdesk_catalog::Service;
use trimdesk_client::{ApiClient, Audience, ClientError, endpoints};
use trimdesk_reporting::{MonthlyStats, monthly_stats};

use crate::error::FlowError;

/// Analytics fetches are time-boxed so a slow backend degrades the
/// dashboard instead of hanging it.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct AnalyticsSnapshot {
    pub bookings: Vec<Booking>,
    pub services: Vec<Service>,
    pub stats: MonthlyStats,
}

#[derive(Clone)]
pub struct AnalyticsFlow {
    api: ApiClient,
}

impl AnalyticsFlow {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch bookings and services and compute the monthly aggregates.
    ///
    /// Each list degrades independently to empty on failure — the
    /// dashboard renders zeros rather than an error page. An expired
    /// credential still propagates (the session is already gone).
    pub async fn load(&self) -> Result<AnalyticsSnapshot, FlowError> {
        let (bookings, services) = tokio::join!(
            self.api.get_list::<Booking>(
                Audience::Bookings,
                endpoints::BOOKINGS,
                "bookings",
                Some(FETCH_TIMEOUT),
            ),
            self.api.get_list::<Service>(
                Audience::Bookings,
                endpoints::SERVICES,
                "services",
                Some(FETCH_TIMEOUT),
            ),
        );

        let bookings = fallback_empty(bookings, "bookings")?;
        let services = fallback_empty(services, "services")?;

        let stats = monthly_stats(&bookings, &services, Local::now().date_naive());
        Ok(AnalyticsSnapshot {
            bookings,
            services,
            stats,
        })
    }
}

fn fallback_empty<T>(result: Result<Vec<T>, ClientError>, what: &str) -> Result<Vec<T>, FlowError> {
    match result {
        Ok(list) => Ok(list),
        Err(err) if err.is_auth_expired() => Err(err.into()),
        Err(err) => {
            tracing::warn!("analytics {what} fetch failed, showing empty data: {err}");
            Ok(Vec::new())
        }
    }
}
