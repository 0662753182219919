//! Upstream flight-search payload parsing.

use chrono::{Local, TimeZone};
use farefinder_lib::{parse_flights, FlightsPayload};

fn payload(json: &str) -> FlightsPayload {
    serde_json::from_str(json).expect("payload deserializes")
}

fn two_leg_itinerary() -> &'static str {
    r#"{
        "data": [{
            "price": 49.0,
            "cityFrom": "Prague",
            "countryFrom": {"name": "Czechia"},
            "cityTo": "London",
            "countryTo": {"name": "United Kingdom"},
            "fly_duration": "5h 30m",
            "availability": {"seats": 3},
            "route": [
                {
                    "airline": "FR",
                    "dTime": 1767225600,
                    "aTime": 1767232800,
                    "cityFrom": "Prague",
                    "cityTo": "Frankfurt",
                    "flight_no": 1021
                },
                {
                    "airline": "U2",
                    "dTime": 1767240000,
                    "aTime": 1767247200,
                    "cityFrom": "Frankfurt",
                    "cityTo": "London",
                    "flight_no": 8844
                }
            ]
        }]
    }"#
}

#[test]
fn maps_itinerary_fields_and_legs() {
    let records = parse_flights(payload(two_leg_itinerary()));
    assert_eq!(records.len(), 1);

    let flight = &records[0];
    assert_eq!(flight.origin_city, "Prague");
    assert_eq!(flight.origin_country, "Czechia");
    assert_eq!(flight.destination_city, "London");
    assert_eq!(flight.destination_country, "United Kingdom");
    assert_eq!(flight.price, 49.0);
    assert_eq!(flight.seats, 3);
    assert_eq!(flight.duration, "5h 30m");
    assert_eq!(flight.return_duration, None);

    assert_eq!(flight.legs.len(), 2);
    assert_eq!(flight.legs[0].airline_id, "FR");
    assert_eq!(flight.legs[0].flight_number, "1021");
    assert_eq!(flight.legs[1].origin_city, "Frankfurt");
    assert_eq!(
        flight.legs[0].departure,
        Local.timestamp_opt(1767225600, 0).unwrap()
    );
    assert!(flight.legs[0].arrival > flight.legs[0].departure);
}

#[test]
fn null_seats_map_to_zero() {
    let json = r#"{
        "data": [{
            "price": 20,
            "cityFrom": "Brno",
            "countryFrom": {"name": "Czechia"},
            "cityTo": "Vienna",
            "countryTo": {"name": "Austria"},
            "fly_duration": "1h 05m",
            "availability": {"seats": null},
            "route": [{
                "airline": "OS",
                "dTime": 1767225600,
                "aTime": 1767229500,
                "cityFrom": "Brno",
                "cityTo": "Vienna",
                "flight_no": 12
            }]
        }]
    }"#;
    let records = parse_flights(payload(json));
    assert_eq!(records[0].seats, 0);
}

#[test]
fn absent_availability_maps_to_zero_seats() {
    let json = r#"{
        "data": [{
            "price": 20,
            "cityFrom": "Brno",
            "countryFrom": {"name": "Czechia"},
            "cityTo": "Vienna",
            "countryTo": {"name": "Austria"},
            "fly_duration": "1h 05m",
            "route": [{
                "airline": "OS",
                "dTime": 1767225600,
                "aTime": 1767229500,
                "cityFrom": "Brno",
                "cityTo": "Vienna",
                "flight_no": 12
            }]
        }]
    }"#;
    let records = parse_flights(payload(json));
    assert_eq!(records[0].seats, 0);
}

#[test]
fn return_duration_is_carried_when_present() {
    let json = r#"{
        "data": [{
            "price": 99,
            "cityFrom": "Prague",
            "countryFrom": {"name": "Czechia"},
            "cityTo": "London",
            "countryTo": {"name": "United Kingdom"},
            "fly_duration": "2h 00m",
            "return_duration": "2h 10m",
            "availability": {"seats": 5},
            "route": [{
                "airline": "FR",
                "dTime": 1767225600,
                "aTime": 1767232800,
                "cityFrom": "Prague",
                "cityTo": "London",
                "flight_no": 1021
            }]
        }]
    }"#;
    let records = parse_flights(payload(json));
    assert_eq!(records[0].return_duration.as_deref(), Some("2h 10m"));
}

#[test]
fn empty_payload_yields_no_records() {
    assert!(parse_flights(payload(r#"{"data": []}"#)).is_empty());
    assert!(parse_flights(payload(r#"{}"#)).is_empty());
}

#[test]
fn itinerary_without_route_segments_is_dropped() {
    let json = r#"{
        "data": [{
            "price": 20,
            "cityFrom": "Brno",
            "countryFrom": {"name": "Czechia"},
            "cityTo": "Vienna",
            "countryTo": {"name": "Austria"},
            "fly_duration": "1h 05m",
            "availability": {"seats": 1},
            "route": []
        }]
    }"#;
    assert!(parse_flights(payload(json)).is_empty());
}
