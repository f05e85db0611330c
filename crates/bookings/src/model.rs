//! Booking wire models.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use trimdesk_core::{BarberId, BookingId, ServiceId, UserId};

use crate::status::BookingStatus;

/// A booking as the API returns it.
///
/// The API denormalizes inconsistently across deployments, so most
/// fields are optional and display names may arrive flat
/// (`client_name`) instead of nested. Service references appear either
/// as `services: [{id}]` or as `service_ids: [..]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    #[serde(default)]
    pub client_id: Option<UserId>,
    #[serde(default)]
    pub barber_id: Option<BarberId>,
    #[serde(default)]
    pub service_id: Option<ServiceId>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub barber_name: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub services: Option<Vec<ServiceRef>>,
    #[serde(default)]
    pub service_ids: Option<Vec<ServiceId>>,
}

/// Embedded service reference inside a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRef {
    pub id: ServiceId,
}

impl Booking {
    /// All service ids this booking references, whichever wire shape
    /// carried them.
    pub fn referenced_service_ids(&self) -> Vec<ServiceId> {
        if let Some(services) = &self.services {
            return services.iter().map(|s| s.id).collect();
        }
        if let Some(ids) = &self.service_ids {
            return ids.clone();
        }
        Vec::new()
    }
}

/// Submission payload for a new booking.
///
/// Deliberately has no status field: a booking cannot be created in any
/// state but pending, no matter what the submitter sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBooking {
    pub client_id: UserId,
    pub barber_id: BarberId,
    pub service_id: ServiceId,
    pub date: NaiveDate,
    pub time: String,
}

/// Dates arrive as `YYYY-MM-DD`; anything unparseable reads as absent
/// rather than failing the whole list.
fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_booking_defaults_to_pending() {
        let booking: Booking = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.date, None);
    }

    #[test]
    fn unparseable_date_reads_as_absent() {
        let booking: Booking =
            serde_json::from_value(json!({"id": 1, "date": "tomorrow"})).unwrap();
        assert_eq!(booking.date, None);
    }

    #[test]
    fn valid_date_is_parsed() {
        let booking: Booking =
            serde_json::from_value(json!({"id": 1, "date": "2025-11-03"})).unwrap();
        assert_eq!(
            booking.date,
            Some(NaiveDate::from_ymd_opt(2025, 11, 3).unwrap())
        );
    }

    #[test]
    fn service_ids_come_from_either_wire_shape() {
        let nested: Booking = serde_json::from_value(
            json!({"id": 1, "services": [{"id": 4}, {"id": 5}]}),
        )
        .unwrap();
        assert_eq!(
            nested.referenced_service_ids(),
            vec![ServiceId::new(4), ServiceId::new(5)]
        );

        let flat: Booking =
            serde_json::from_value(json!({"id": 1, "service_ids": [9]})).unwrap();
        assert_eq!(flat.referenced_service_ids(), vec![ServiceId::new(9)]);
    }

    #[test]
    fn submission_payload_carries_no_status() {
        let new = NewBooking {
            client_id: UserId::new(1),
            barber_id: BarberId::new(2),
            service_id: ServiceId::new(3),
            date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            time: "14:30".to_string(),
        };
        let value = serde_json::to_value(&new).unwrap();
        assert!(value.get("status").is_none());
        assert_eq!(value.get("time"), Some(&json!("14:30")));
    }
}
