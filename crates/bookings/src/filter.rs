//! Admin listing filter.

use trimdesk_client::endpoints;

use crate::model::Booking;
use crate::status::BookingStatus;

/// View filter for the admin booking list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    /// Endpoint to fetch for this filter.
    ///
    /// Pending has a dedicated server-side query; the other filters
    /// fetch the full collection and narrow it client-side.
    pub fn endpoint(self) -> &'static str {
        match self {
            StatusFilter::Pending => endpoints::BOOKINGS_PENDING,
            _ => endpoints::BOOKINGS,
        }
    }

    /// The status this filter selects, if it selects one.
    pub fn status(self) -> Option<BookingStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Pending => Some(BookingStatus::Pending),
            StatusFilter::Approved => Some(BookingStatus::Approved),
            StatusFilter::Rejected => Some(BookingStatus::Rejected),
        }
    }

    /// Narrow a fetched collection to this filter.
    ///
    /// `All` passes everything through and `Pending` trusts the
    /// server-side query it was fetched with.
    pub fn apply(self, bookings: Vec<Booking>) -> Vec<Booking> {
        match self {
            StatusFilter::All | StatusFilter::Pending => bookings,
            StatusFilter::Approved | StatusFilter::Rejected => {
                let wanted = self.status();
                bookings
                    .into_iter()
                    .filter(|b| Some(b.status) == wanted)
                    .collect()
            }
        }
    }
}
