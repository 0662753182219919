//! Farefinder library entry points.
//!
//! This crate exposes helpers to resolve free-text city names against the
//! fare aggregator's location endpoint, fetch the airline directory, run a
//! flight search, and render the results as an aligned terminal table.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod airlines;
pub mod api;
pub mod error;
pub mod filter;
pub mod flights;
pub mod locations;
pub mod render;

pub use airlines::AirlineDirectory;
pub use api::FlightApi;
pub use error::{Error, Result};
pub use filter::{
    parse_bool, parse_date, resolve_departure_range, resolve_return_range, DateRange,
    SearchFilter, DATE_FORMAT,
};
pub use flights::{parse_flights, FlightRecord, FlightsPayload, Leg};
pub use render::{render_flights, Palette, TableStyle};
