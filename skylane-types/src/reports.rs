//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::{AirportRecord, FlightRecord, LegRequest, PriceAnalysis, SkylaneError, Source};

/// Summary of an airport suggestion lookup.
///
/// `airports` is already merged and ranked. A source that failed or timed
/// out contributes nothing to `airports` and one entry to `warnings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AirportSearchReport {
    /// Merged, deduplicated, ranked suggestions.
    pub airports: Vec<AirportRecord>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<SkylaneError>,
}

impl AirportSearchReport {
    /// Whether there is nothing to show (the renderer's empty state).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

/// Flights found for a single leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegResults {
    /// The request this leg answered.
    pub request: LegRequest,
    /// Local flights first, then external flights, each in source order.
    pub flights: Vec<FlightRecord>,
}

impl LegResults {
    /// Flights supplied by `source`.
    pub fn from_source(&self, source: Source) -> impl Iterator<Item = &FlightRecord> {
        self.flights.iter().filter(move |f| f.source == source)
    }
}

/// Summary of a flight search across one or two legs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSearchReport {
    /// Outbound leg results.
    pub outbound: LegResults,
    /// Return leg results for round trips.
    pub inbound: Option<LegResults>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<SkylaneError>,
}

/// Fare distribution for the outbound leg of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceAnalysisReport {
    /// The leg the analysis describes.
    pub request: LegRequest,
    /// `None` when no provider produced an analysis.
    pub analysis: Option<PriceAnalysis>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<SkylaneError>,
}
