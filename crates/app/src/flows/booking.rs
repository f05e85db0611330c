//! The booking page flow (client role).

use chrono::Local;

use trimdesk_bookings::{Booking, Bookings, NewBooking};
use trimdesk_catalog::{Barber, Service, fetch_catalog};
use trimdesk_client::ApiClient;

use crate::error::FlowError;

/// Everything the booking page shows.
#[derive(Debug, Clone)]
pub struct BookingPageData {
    pub barbers: Vec<Barber>,
    pub services: Vec<Service>,
    pub my_bookings: Vec<Booking>,
}

#[derive(Clone)]
pub struct BookingFlow {
    api: ApiClient,
    bookings: Bookings,
}

impl BookingFlow {
    pub fn new(api: ApiClient) -> Self {
        let bookings = Bookings::new(api.clone());
        Self { api, bookings }
    }

    /// Load the page: catalog and the visitor's own bookings, fetched
    /// concurrently.
    ///
    /// The personal list failing is not fatal; the form still works, so
    /// the page loads with an empty list and the failure is only
    /// logged.
    pub async fn load(&self) -> Result<BookingPageData, FlowError> {
        let (catalog, mine) = tokio::join!(fetch_catalog(&self.api), self.bookings.my());
        let (barbers, services) = catalog?;

        let my_bookings = match mine {
            Ok(list) => list,
            Err(err) if err.is_auth_expired() => return Err(err.into()),
            Err(err) => {
                tracing::warn!("could not load own bookings: {err}");
                Vec::new()
            }
        };

        Ok(BookingPageData {
            barbers,
            services,
            my_bookings,
        })
    }

    /// Submit a booking and return the refreshed personal list.
    pub async fn submit(&self, new: &NewBooking) -> Result<Vec<Booking>, FlowError> {
        if new.time.trim().is_empty() {
            return Err(FlowError::Invalid("Please pick a time.".to_string()));
        }
        if new.date < Local::now().date_naive() {
            return Err(FlowError::Invalid(
                "The booking date cannot be in the past.".to_string(),
            ));
        }

        self.bookings.create(new).await?;

        match self.bookings.my().await {
            Ok(list) => Ok(list),
            Err(err) => {
                tracing::warn!("refresh after booking submission failed: {err}");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::sync::Arc;
    use trimdesk_client::ApiConfig;
    use trimdesk_core::{BarberId, ServiceId, UserId};
    use trimdesk_session::{MemoryBackend, SessionStore};

    use crate::App;

    // Validation fires before any request, so a dead address suffices.
    fn flow() -> BookingFlow {
        let session = SessionStore::new(Arc::new(MemoryBackend::new()));
        App::new(ApiConfig::single_host("http://127.0.0.1:1"), session).booking()
    }

    fn new_booking(date: chrono::NaiveDate, time: &str) -> NewBooking {
        NewBooking {
            client_id: UserId::new(1),
            barber_id: BarberId::new(2),
            service_id: ServiceId::new(3),
            date,
            time: time.to_string(),
        }
    }

    #[tokio::test]
    async fn past_dates_are_rejected_before_any_request() {
        let yesterday = Local::now().date_naive() - Duration::days(1);
        let result = flow().submit(&new_booking(yesterday, "10:00")).await;
        assert!(matches!(result, Err(FlowError::Invalid(_))));
    }

    #[tokio::test]
    async fn blank_time_is_rejected_before_any_request() {
        let today = Local::now().date_naive();
        let result = flow().submit(&new_booking(today, "   ")).await;
        assert!(matches!(result, Err(FlowError::Invalid(_))));
    }
}
