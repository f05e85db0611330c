//! Booking operations against the API.
//!
//! Role enforcement happens at the route level before any of the admin
//! operations here can be reached; the operations themselves do not
//! re-check. Callers refresh their collection view after a successful
//! mutation; failures carry the server's message and are never retried
//! automatically.

use serde_json::json;

use trimdesk_client::{ApiClient, Audience, ClientError, endpoints};
use trimdesk_core::BookingId;

use crate::filter::StatusFilter;
use crate::model::{Booking, NewBooking};
use crate::status::BookingStatus;

/// Plural envelope key used by every booking list endpoint.
const PLURAL_KEY: &str = "bookings";

#[derive(Clone)]
pub struct Bookings {
    api: ApiClient,
}

impl Bookings {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Admin listing for a filter (pending via its dedicated query,
    /// everything else narrowed client-side).
    pub async fn list(&self, filter: StatusFilter) -> Result<Vec<Booking>, ClientError> {
        let bookings = self
            .api
            .get_list(Audience::Bookings, filter.endpoint(), PLURAL_KEY, None)
            .await?;
        Ok(filter.apply(bookings))
    }

    /// The signed-in client's own bookings.
    pub async fn my(&self) -> Result<Vec<Booking>, ClientError> {
        self.api
            .get_list(Audience::Bookings, endpoints::BOOKINGS_MY, PLURAL_KEY, None)
            .await
    }

    /// Submit a new booking. The server assigns `pending`; the payload
    /// cannot say otherwise.
    pub async fn create(&self, new: &NewBooking) -> Result<(), ClientError> {
        let body = serde_json::to_value(new).map_err(|err| ClientError::Parse(err.to_string()))?;
        let response = self
            .api
            .post(Audience::Bookings, endpoints::BOOKINGS, &body)
            .await?;
        ApiClient::require_success(response, "booking could not be created").await?;
        Ok(())
    }

    pub async fn approve(&self, id: BookingId) -> Result<(), ClientError> {
        tracing::debug!(%id, "approving booking");
        let response = self
            .api
            .patch(Audience::Bookings, &endpoints::booking_approve(id), None)
            .await?;
        ApiClient::require_success(response, "booking could not be approved").await?;
        Ok(())
    }

    pub async fn reject(&self, id: BookingId) -> Result<(), ClientError> {
        tracing::debug!(%id, "rejecting booking");
        let response = self
            .api
            .patch(Audience::Bookings, &endpoints::booking_reject(id), None)
            .await?;
        ApiClient::require_success(response, "booking could not be rejected").await?;
        Ok(())
    }

    /// Overwrite a booking's status.
    ///
    /// Unconstrained on purpose: the API allows any of the three states
    /// over any current state, including reopening a decided booking.
    pub async fn set_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<(), ClientError> {
        tracing::debug!(%id, %status, "overwriting booking status");
        let body = json!({ "status": status });
        let response = self
            .api
            .patch(Audience::Bookings, &endpoints::booking_status(id), Some(&body))
            .await?;
        ApiClient::require_success(response, "booking status could not be updated").await?;
        Ok(())
    }
}
