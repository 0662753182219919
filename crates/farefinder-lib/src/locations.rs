//! Wire types for the aggregator's location-lookup endpoint.

use serde::Deserialize;

/// Response payload of the location-search endpoint.
#[derive(Debug, Deserialize)]
pub struct LocationsPayload {
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// One location entry; only the code is of interest here.
#[derive(Debug, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub code: Option<String>,
}

/// Extract the first location code from a lookup payload.
///
/// Returns `None` when the result set is empty or the first entry
/// carries no code, which callers treat as "city not found".
pub fn first_city_code(payload: &LocationsPayload) -> Option<String> {
    payload
        .locations
        .first()
        .and_then(|location| location.code.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_code_from_populated_payload() {
        let payload: LocationsPayload = serde_json::from_str(
            r#"{"locations": [{"code": "PRG", "name": "Prague"}, {"code": "BRQ"}]}"#,
        )
        .unwrap();
        assert_eq!(first_city_code(&payload).as_deref(), Some("PRG"));
    }

    #[test]
    fn empty_payload_yields_none() {
        let payload: LocationsPayload = serde_json::from_str(r#"{"locations": []}"#).unwrap();
        assert!(first_city_code(&payload).is_none());
    }

    #[test]
    fn missing_code_field_yields_none() {
        let payload: LocationsPayload =
            serde_json::from_str(r#"{"locations": [{"name": "Nowhereville"}]}"#).unwrap();
        assert!(first_city_code(&payload).is_none());
    }
}
