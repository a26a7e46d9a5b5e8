//! Flight list visibility predicates.

use crate::{FilterState, FlightRecord, HourBand};

/// Whether `flight` passes every active constraint in `state`.
///
/// The ceiling is inclusive. An active band requires a known hour inside
/// `[start, end)`; a flight whose hour is unknown is hidden by it. Inactive
/// bands impose nothing.
#[must_use]
pub fn is_visible(flight: &FlightRecord, state: &FilterState) -> bool {
    flight.price <= state.price_ceiling
        && band_admits(state.departure_band, flight.departure_hour)
        && band_admits(state.arrival_band, flight.arrival_hour)
}

fn band_admits(band: Option<HourBand>, hour: Option<u8>) -> bool {
    match (band, hour) {
        (None, _) => true,
        (Some(band), Some(hour)) => band.contains(hour),
        (Some(_), None) => false,
    }
}

/// Visibility flag for each flight, index-aligned with `flights`.
#[must_use]
pub fn visibility(flights: &[FlightRecord], state: &FilterState) -> Vec<bool> {
    flights.iter().map(|f| is_visible(f, state)).collect()
}

/// Number of flights visible under `state`.
#[must_use]
pub fn visible_count(flights: &[FlightRecord], state: &FilterState) -> usize {
    flights.iter().filter(|f| is_visible(f, state)).count()
}
