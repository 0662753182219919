//! HTTP client for the fare aggregator's public REST API.

use std::env;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::airlines::{AirlineDirectory, AirlineEntry};
use crate::error::{Error, Result};
use crate::filter::SearchFilter;
use crate::flights::{parse_flights, FlightRecord, FlightsPayload};
use crate::locations::{first_city_code, LocationsPayload};

const DEFAULT_API_BASE: &str = "https://api.skypicker.com";

/// Environment override for the API base URL, used by tests to point
/// the client at a local mock server.
pub const API_BASE_ENV: &str = "FAREFINDER_API_BASE";

/// Client for the aggregator's location, airline, and flight endpoints.
///
/// Holds one connection pool for the whole run; every request is issued
/// sequentially and awaited before the next step starts.
#[derive(Debug, Clone)]
pub struct FlightApi {
    http: Client,
    base_url: String,
}

impl FlightApi {
    /// Build a client against the default API base.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    /// Build a client against an explicit API base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent())
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Build a client honoring the `FAREFINDER_API_BASE` override.
    pub fn from_env() -> Result<Self> {
        match env::var(API_BASE_ENV) {
            Ok(base) if !base.trim().is_empty() => Self::with_base_url(base.trim()),
            _ => Self::new(),
        }
    }

    /// Resolve a free-text city name to its location code.
    ///
    /// The lookup is constrained to active city-type results in the
    /// English locale and takes the first match. An empty result set or
    /// a match without a code is `Error::CityNotFound`.
    pub async fn resolve_city_code(&self, city: &str) -> Result<String> {
        let params: Vec<(String, String)> = [
            ("locale", "en-US"),
            ("location_types", "city"),
            ("limit", "1"),
            ("active_only", "true"),
            ("sort", "name"),
            ("term", city),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
        let payload: LocationsPayload = self.get_json("locations", &params).await?;
        first_city_code(&payload).ok_or_else(|| Error::CityNotFound {
            city: city.to_string(),
        })
    }

    /// Fetch the full airline directory. There is no server-side
    /// filtering; the whole list is loaded once per invocation.
    pub async fn airline_directory(&self) -> Result<AirlineDirectory> {
        let entries: Vec<AirlineEntry> = self.get_json("airlines", &[]).await?;
        let directory = AirlineDirectory::from_entries(entries);
        debug!(airlines = directory.len(), "loaded airline directory");
        Ok(directory)
    }

    /// Search for itineraries between two resolved city codes.
    ///
    /// An empty vector means "no flights found"; the caller decides how
    /// to report it.
    pub async fn search_flights(
        &self,
        origin_code: &str,
        destination_code: &str,
        filter: &SearchFilter,
    ) -> Result<Vec<FlightRecord>> {
        let params = filter.query_params(origin_code, destination_code);
        // A payload the decoder cannot make sense of degrades to an empty
        // result set instead of aborting the run.
        let payload: FlightsPayload = match self.get_json("flights", &params).await {
            Ok(payload) => payload,
            Err(Error::Json(err)) => {
                warn!(error = %err, "malformed flight-search payload");
                FlightsPayload::default()
            }
            Err(err) => return Err(err),
        };
        let records = parse_flights(payload);
        debug!(
            origin = origin_code,
            destination = destination_code,
            results = records.len(),
            "flight search complete"
        );
        Ok(records)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api { status, url });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn user_agent() -> String {
    format!("farefinder/{}", env!("CARGO_PKG_VERSION"))
}
