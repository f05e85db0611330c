//! List-response normalization.
//!
//! The API is inconsistent about list shapes: some endpoints return a
//! bare array, others wrap it in an envelope. Every list fetch goes
//! through this one function so the fallback order is fixed in a single
//! place.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Normalize a list body.
///
/// Fallback order:
/// 1. the body itself, when it is an array;
/// 2. `body.data`, when that is an array;
/// 3. `body[plural_key]` (e.g. `bookings`), when that is an array;
/// 4. an empty list.
pub fn normalize_list<T: DeserializeOwned>(
    body: Value,
    plural_key: &str,
) -> Result<Vec<T>, ClientError> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => match map.remove(plural_key) {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
        },
        _ => Vec::new(),
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|err| ClientError::Parse(err.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_is_used_directly() {
        let list: Vec<i64> = normalize_list(json!([1, 2, 3]), "bookings").unwrap();
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn data_envelope_is_unwrapped() {
        let list: Vec<i64> = normalize_list(json!({"data": [1, 2, 3]}), "bookings").unwrap();
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn plural_key_envelope_is_unwrapped() {
        let list: Vec<i64> =
            normalize_list(json!({"bookings": [4, 5]}), "bookings").unwrap();
        assert_eq!(list, vec![4, 5]);
    }

    #[test]
    fn data_takes_precedence_over_plural_key() {
        let list: Vec<i64> =
            normalize_list(json!({"data": [1], "bookings": [2]}), "bookings").unwrap();
        assert_eq!(list, vec![1]);
    }

    #[test]
    fn non_array_data_falls_through_to_plural_key() {
        let list: Vec<i64> =
            normalize_list(json!({"data": null, "bookings": [7]}), "bookings").unwrap();
        assert_eq!(list, vec![7]);
    }

    #[test]
    fn unrecognized_shapes_default_to_empty() {
        let list: Vec<i64> = normalize_list(json!({"total": 3}), "bookings").unwrap();
        assert!(list.is_empty());
        let list: Vec<i64> = normalize_list(json!("nope"), "bookings").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn undecodable_items_surface_as_parse_errors() {
        let result: Result<Vec<i64>, _> = normalize_list(json!(["x"]), "bookings");
        assert!(matches!(result, Err(ClientError::Parse(_))));
    }
}
