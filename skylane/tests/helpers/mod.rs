// Re-export helpers so tests can `use helpers::*;`
#![allow(dead_code)]

pub mod mock_connector;

pub use mock_connector::MockConnector;

use skylane::{AirportSuggestion, Decimal, FlightRecord};

/// Suggestion with code, city and country set.
pub fn place(code: &str, city: &str, country: &str) -> AirportSuggestion {
    AirportSuggestion {
        code: Some(code.to_string()),
        city: Some(city.to_string()),
        country: Some(country.to_string()),
        ..AirportSuggestion::default()
    }
}

/// Offer with a whole-unit price and raw `HH:MM` times.
pub fn offer(id: &str, price: i64, depart: &str, arrive: &str) -> FlightRecord {
    FlightRecord {
        offer_id: Some(id.to_string()),
        departure_time: Some(depart.to_string()),
        arrival_time: Some(arrive.to_string()),
        price: Decimal::new(price, 0),
        ..FlightRecord::default()
    }
}

/// Codes of a ranked airport list, for compact assertions.
pub fn codes(airports: &[skylane::AirportRecord]) -> Vec<&str> {
    airports.iter().map(|a| a.code.as_str()).collect()
}

/// Offer ids of a flight list, for compact assertions.
pub fn ids(flights: &[FlightRecord]) -> Vec<&str> {
    flights
        .iter()
        .map(|f| f.offer_id.as_deref().unwrap_or("?"))
        .collect()
}
