//! Booking status lifecycle.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Review state of a booking.
///
/// `Pending` is the only state a booking can be created in. `approve`
/// and `reject` move it to the matching terminal state; only the
/// generic status overwrite can move it anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookingStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    /// State every new booking is created in.
    pub fn initial() -> Self {
        BookingStatus::Pending
    }

    /// Whether approve/reject defines no further transition out of this
    /// state.
    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Approved | BookingStatus::Rejected)
    }

    pub fn is_pending(self) -> bool {
        matches!(self, BookingStatus::Pending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
        }
    }

    /// Parse a wire status, case-insensitively.
    ///
    /// Anything unrecognized reads as `Pending`, the API's own default
    /// for bookings that carry no status yet.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "approved" => BookingStatus::Approved,
            "rejected" => BookingStatus::Rejected,
            _ => BookingStatus::Pending,
        }
    }
}

impl core::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BookingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(BookingStatus::parse(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_pending() {
        assert_eq!(BookingStatus::initial(), BookingStatus::Pending);
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }

    #[test]
    fn approved_and_rejected_are_terminal() {
        assert!(BookingStatus::Approved.is_terminal());
        assert!(BookingStatus::Rejected.is_terminal());
        assert!(!BookingStatus::Pending.is_terminal());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(BookingStatus::parse("APPROVED"), BookingStatus::Approved);
        assert_eq!(BookingStatus::parse(" Rejected "), BookingStatus::Rejected);
    }

    #[test]
    fn unknown_wire_status_reads_as_pending() {
        assert_eq!(BookingStatus::parse("on-hold"), BookingStatus::Pending);
    }

    #[test]
    fn wire_format_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Approved).unwrap(),
            "\"approved\""
        );
    }
}
