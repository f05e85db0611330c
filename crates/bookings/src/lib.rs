//! `trimdesk-bookings` — the booking model and its status workflow.
//!
//! A booking starts `pending`; an admin review moves it to `approved` or
//! `rejected`. The generic status-set operation may place a booking in
//! any of the three states, including back out of a terminal one — the
//! API permits it and this client preserves that.

pub mod filter;
pub mod model;
pub mod ops;
pub mod status;

pub use filter::StatusFilter;
pub use model::{Booking, NewBooking, ServiceRef};
pub use ops::Bookings;
pub use status::BookingStatus;
