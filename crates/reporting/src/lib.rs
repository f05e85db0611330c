//! `trimdesk-reporting` — booking statistics for the analytics views.
//!
//! Pure computation over a fetched bookings+services snapshot. Fetching
//! and rendering live elsewhere.

pub mod stats;

pub use stats::{MonthlyStats, monthly_stats};
