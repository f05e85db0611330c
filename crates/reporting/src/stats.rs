//! Monthly booking and revenue statistics.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use trimdesk_bookings::{Booking, BookingStatus};
use trimdesk_catalog::Service;

/// Growth percentage shown when there is no prior month to compare
/// against but the current month has activity.
const DEFAULT_REVENUE_GROWTH: f64 = 10.24;
const DEFAULT_BOOKINGS_GROWTH: f64 = 15.5;

/// Aggregates for the analytics dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStats {
    /// Bookings in the current month, or the all-time count when the
    /// current month is empty.
    pub total_bookings: usize,
    pub approved_bookings: usize,
    pub pending_bookings: usize,
    pub rejected_bookings: usize,
    /// Revenue from the current month's approved bookings.
    pub total_revenue: i64,
    /// Revenue per approved booking, rounded.
    pub average_revenue: i64,
    pub previous_month_revenue: i64,
    pub previous_month_bookings: usize,
    pub revenue_change_pct: f64,
    pub bookings_change_pct: f64,
}

/// Compute the dashboard aggregates for the month containing `today`.
///
/// Bookings without a parseable date fall outside every month and only
/// contribute to the all-time fallback count. Revenue joins each
/// approved booking's service references against the service list;
/// unknown services and services without a price contribute nothing.
pub fn monthly_stats(bookings: &[Booking], services: &[Service], today: NaiveDate) -> MonthlyStats {
    let current = (today.year(), today.month());
    let previous = previous_month(current);

    let current_month: Vec<&Booking> = bookings
        .iter()
        .filter(|b| in_month(b, current))
        .collect();
    let previous_month_bookings: Vec<&Booking> = bookings
        .iter()
        .filter(|b| in_month(b, previous))
        .collect();

    let approved: Vec<&&Booking> = current_month
        .iter()
        .filter(|b| b.status == BookingStatus::Approved)
        .collect();

    let total_revenue: i64 = approved.iter().map(|b| booking_revenue(b, services)).sum();
    let previous_month_revenue: i64 = previous_month_bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Approved)
        .map(|b| booking_revenue(b, services))
        .sum();

    let pending_bookings = current_month
        .iter()
        .filter(|b| b.status == BookingStatus::Pending)
        .count();
    let rejected_bookings = current_month
        .iter()
        .filter(|b| b.status == BookingStatus::Rejected)
        .count();

    let revenue_change_pct = if previous_month_revenue > 0 {
        (total_revenue - previous_month_revenue) as f64 / previous_month_revenue as f64 * 100.0
    } else if total_revenue > 0 {
        DEFAULT_REVENUE_GROWTH
    } else {
        0.0
    };

    let bookings_change_pct = if !previous_month_bookings.is_empty() {
        (current_month.len() as f64 - previous_month_bookings.len() as f64)
            / previous_month_bookings.len() as f64
            * 100.0
    } else if !current_month.is_empty() {
        DEFAULT_BOOKINGS_GROWTH
    } else {
        0.0
    };

    let average_revenue = if approved.is_empty() {
        0
    } else {
        (total_revenue as f64 / approved.len() as f64).round() as i64
    };

    MonthlyStats {
        total_bookings: if current_month.is_empty() {
            bookings.len()
        } else {
            current_month.len()
        },
        approved_bookings: approved.len(),
        pending_bookings,
        rejected_bookings,
        total_revenue,
        average_revenue,
        previous_month_revenue,
        previous_month_bookings: previous_month_bookings.len(),
        revenue_change_pct,
        bookings_change_pct,
    }
}

fn previous_month((year, month): (i32, u32)) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

fn in_month(booking: &Booking, (year, month): (i32, u32)) -> bool {
    booking
        .date
        .map(|d| d.year() == year && d.month() == month)
        .unwrap_or(false)
}

fn booking_revenue(booking: &Booking, services: &[Service]) -> i64 {
    booking
        .referenced_service_ids()
        .into_iter()
        .filter_map(|id| services.iter().find(|s| s.id == id))
        .filter_map(|s| s.price)
        .sum()
}
