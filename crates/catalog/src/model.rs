//! Catalog wire models and fetches.

use serde::{Deserialize, Serialize};

use trimdesk_client::{ApiClient, Audience, ClientError, endpoints};
use trimdesk_core::{BarberId, ServiceId};

/// A barber offered for booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barber {
    pub id: BarberId,
    #[serde(default)]
    pub name: String,
}

/// A bookable service.
///
/// `price` is in the API's smallest currency unit; services without a
/// price simply contribute nothing to revenue figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Option<i64>,
}

pub async fn fetch_barbers(api: &ApiClient) -> Result<Vec<Barber>, ClientError> {
    api.get_list(Audience::Barbers, endpoints::BARBERS, "barbers", None)
        .await
}

pub async fn fetch_services(api: &ApiClient) -> Result<Vec<Service>, ClientError> {
    api.get_list(Audience::Services, endpoints::SERVICES, "services", None)
        .await
}

/// Fetch both catalog lists concurrently.
pub async fn fetch_catalog(api: &ApiClient) -> Result<(Vec<Barber>, Vec<Service>), ClientError> {
    let (barbers, services) = tokio::join!(fetch_barbers(api), fetch_services(api));
    Ok((barbers?, services?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_without_price_deserializes() {
        let service: Service = serde_json::from_str(r#"{"id": 2, "name": "Fade"}"#).unwrap();
        assert_eq!(service.price, None);
    }

    #[test]
    fn barber_name_defaults_to_empty() {
        let barber: Barber = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        assert!(barber.name.is_empty());
    }
}
