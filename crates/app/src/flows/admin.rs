//! Admin review board (admin/superadmin role).
//!
//! The route gate has already established the role by the time this
//! board is reachable; none of the operations re-check it.

use tokio::sync::Mutex;

use trimdesk_bookings::{Booking, Bookings, BookingStatus, StatusFilter};
use trimdesk_client::ApiClient;
use trimdesk_core::BookingId;

use crate::error::FlowError;

#[derive(Default)]
struct BoardState {
    filter: StatusFilter,
    list: Vec<Booking>,
    error: Option<String>,
    /// Bumped whenever the view changes (filter switch, navigation
    /// away). A fetch started under an older epoch must not write its
    /// response into the newer view.
    epoch: u64,
}

/// View model behind the admin booking table.
pub struct AdminBoard {
    bookings: Bookings,
    state: Mutex<BoardState>,
}

impl AdminBoard {
    pub fn new(api: ApiClient) -> Self {
        Self {
            bookings: Bookings::new(api),
            state: Mutex::new(BoardState::default()),
        }
    }

    pub async fn filter(&self) -> StatusFilter {
        self.state.lock().await.filter
    }

    pub async fn current(&self) -> Vec<Booking> {
        self.state.lock().await.list.clone()
    }

    pub async fn error(&self) -> Option<String> {
        self.state.lock().await.error.clone()
    }

    /// Switch the view filter. The caller refreshes afterwards; any
    /// fetch still in flight for the old filter will be dropped.
    pub async fn set_filter(&self, filter: StatusFilter) {
        let mut state = self.state.lock().await;
        if state.filter != filter {
            state.filter = filter;
            state.epoch += 1;
        }
    }

    /// Invalidate the view on navigation away. Responses landing later
    /// must not mutate what another page shows.
    pub async fn invalidate(&self) {
        self.state.lock().await.epoch += 1;
    }

    /// Fetch the list for the current filter.
    ///
    /// Overlapping refreshes are tolerated; a response from a
    /// superseded view (older epoch) is discarded and the board keeps
    /// whatever the current view last showed.
    pub async fn refresh(&self) -> Result<Vec<Booking>, FlowError> {
        let (filter, epoch) = {
            let state = self.state.lock().await;
            (state.filter, state.epoch)
        };

        let result = self.bookings.list(filter).await;

        let mut state = self.state.lock().await;
        if state.epoch != epoch {
            tracing::debug!("dropping stale booking list response");
            return Ok(state.list.clone());
        }

        match result {
            Ok(list) => {
                state.list = list.clone();
                state.error = None;
                Ok(list)
            }
            Err(err) => {
                let err = FlowError::from(err);
                state.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Approve a pending booking and refresh the view.
    pub async fn approve(&self, id: BookingId) -> Result<(), FlowError> {
        self.bookings.approve(id).await?;
        self.refresh().await?;
        Ok(())
    }

    /// Reject a pending booking and refresh the view.
    pub async fn reject(&self, id: BookingId) -> Result<(), FlowError> {
        self.bookings.reject(id).await?;
        self.refresh().await?;
        Ok(())
    }

    /// Overwrite a booking's status (any state to any state) and
    /// refresh the view.
    pub async fn set_status(&self, id: BookingId, status: BookingStatus) -> Result<(), FlowError> {
        self.bookings.set_status(id, status).await?;
        self.refresh().await?;
        Ok(())
    }
}
