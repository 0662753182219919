//! Flight-search domain types and upstream payload mapping.

use chrono::{DateTime, Local, TimeZone};
use serde::Deserialize;
use tracing::warn;

/// One bookable itinerary as returned by the search endpoint.
#[derive(Debug, Clone)]
pub struct FlightRecord {
    pub price: f64,
    pub origin_city: String,
    pub origin_country: String,
    pub destination_city: String,
    pub destination_country: String,
    /// Upstream-provided duration label, shown verbatim.
    pub duration: String,
    pub return_duration: Option<String>,
    pub seats: u32,
    /// Flown segments in chronological order; never empty for a
    /// record produced by [`parse_flights`].
    pub legs: Vec<Leg>,
}

/// One flown segment within an itinerary.
#[derive(Debug, Clone)]
pub struct Leg {
    pub airline_id: String,
    pub flight_number: String,
    pub departure: DateTime<Local>,
    pub arrival: DateTime<Local>,
    pub origin_city: String,
    pub destination_city: String,
}

/// Response payload of the flight-search endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct FlightsPayload {
    #[serde(default)]
    pub data: Vec<FlightItem>,
}

/// One raw itinerary item.
#[derive(Debug, Deserialize)]
pub struct FlightItem {
    pub price: f64,
    #[serde(rename = "cityFrom")]
    pub city_from: String,
    #[serde(rename = "countryFrom")]
    pub country_from: CountryRef,
    #[serde(rename = "cityTo")]
    pub city_to: String,
    #[serde(rename = "countryTo")]
    pub country_to: CountryRef,
    pub fly_duration: String,
    #[serde(default)]
    pub return_duration: Option<String>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub route: Vec<RouteSegment>,
}

#[derive(Debug, Deserialize)]
pub struct CountryRef {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Availability {
    #[serde(default)]
    pub seats: Option<u32>,
}

/// One raw route segment with epoch-second timestamps.
#[derive(Debug, Deserialize)]
pub struct RouteSegment {
    pub airline: String,
    #[serde(rename = "dTime")]
    pub d_time: i64,
    #[serde(rename = "aTime")]
    pub a_time: i64,
    #[serde(rename = "cityFrom")]
    pub city_from: String,
    #[serde(rename = "cityTo")]
    pub city_to: String,
    pub flight_no: u32,
}

/// Convert a search payload into flight records.
///
/// A null or absent seat count becomes 0. Items without any route
/// segment, or with a timestamp outside the representable range, are
/// dropped rather than aborting the whole result set.
pub fn parse_flights(payload: FlightsPayload) -> Vec<FlightRecord> {
    payload
        .data
        .into_iter()
        .filter_map(|item| match record_from_item(item) {
            Ok(record) => Some(record),
            Err(reason) => {
                warn!(reason, "dropping malformed itinerary");
                None
            }
        })
        .collect()
}

fn record_from_item(item: FlightItem) -> Result<FlightRecord, &'static str> {
    if item.route.is_empty() {
        return Err("itinerary has no route segments");
    }
    let legs = item
        .route
        .into_iter()
        .map(leg_from_segment)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FlightRecord {
        price: item.price,
        origin_city: item.city_from,
        origin_country: item.country_from.name,
        destination_city: item.city_to,
        destination_country: item.country_to.name,
        duration: item.fly_duration,
        return_duration: item.return_duration,
        seats: item.availability.seats.unwrap_or(0),
        legs,
    })
}

fn leg_from_segment(segment: RouteSegment) -> Result<Leg, &'static str> {
    let departure = local_timestamp(segment.d_time).ok_or("departure timestamp out of range")?;
    let arrival = local_timestamp(segment.a_time).ok_or("arrival timestamp out of range")?;
    Ok(Leg {
        airline_id: segment.airline,
        flight_number: segment.flight_no.to_string(),
        departure,
        arrival,
        origin_city: segment.city_from,
        destination_city: segment.city_to,
    })
}

fn local_timestamp(epoch_seconds: i64) -> Option<DateTime<Local>> {
    Local.timestamp_opt(epoch_seconds, 0).single()
}
