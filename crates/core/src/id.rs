//! Strongly-typed identifiers used across the client.
//!
//! The booking API hands out numeric ids, so these are `i64` newtypes
//! rather than UUIDs. Keeping them distinct types prevents a barber id
//! from being passed where a booking id is expected.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a user account (client, admin or superadmin).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

/// Identifier of a barber.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BarberId(i64);

/// Identifier of a bookable service.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(i64);

/// Identifier of a booking.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(i64);

macro_rules! impl_numeric_id {
    ($t:ty) => {
        impl $t {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = core::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

impl_numeric_id!(UserId);
impl_numeric_id!(BarberId);
impl_numeric_id!(ServiceId);
impl_numeric_id!(BookingId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_display_and_parse() {
        let id = BookingId::new(42);
        let parsed: BookingId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_non_numeric_input() {
        assert!("abc".parse::<UserId>().is_err());
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&ServiceId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: ServiceId = serde_json::from_str("7").unwrap();
        assert_eq!(back, ServiceId::new(7));
    }
}
