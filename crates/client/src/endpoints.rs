//! Endpoint paths, kept in one table like the server's route map.

use trimdesk_core::BookingId;

pub const REGISTER: &str = "/auth/register";
pub const LOGIN: &str = "/auth/login";

pub const BARBERS: &str = "/users/barbers";
pub const SERVICES: &str = "/barber-services";

pub const BOOKINGS: &str = "/bookings";
pub const BOOKINGS_MY: &str = "/bookings/my";
pub const BOOKINGS_PENDING: &str = "/bookings/pending";

pub fn booking_approve(id: BookingId) -> String {
    format!("/bookings/{id}/approve")
}

pub fn booking_reject(id: BookingId) -> String {
    format!("/bookings/{id}/reject")
}

pub fn booking_status(id: BookingId) -> String {
    format!("/bookings/{id}/status")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_paths_embed_the_booking_id() {
        let id = BookingId::new(15);
        assert_eq!(booking_approve(id), "/bookings/15/approve");
        assert_eq!(booking_reject(id), "/bookings/15/reject");
        assert_eq!(booking_status(id), "/bookings/15/status");
    }
}
