use async_trait::async_trait;

use crate::SkylaneError;
pub use skylane_types::ConnectorKey;
use skylane_types::{AirportQuery, AirportSuggestion, FlightRecord, LegRequest, PriceAnalysis};

/// Focused role trait for connectors that answer airport/city lookups.
#[async_trait]
pub trait AirportProvider: Send + Sync {
    /// Return suggestions for free-text input, in the source's own order.
    ///
    /// Suggestions are returned in the loose source shape; adaptation to
    /// [`skylane_types::AirportRecord`] happens in the orchestrator.
    async fn airports(&self, query: &AirportQuery) -> Result<Vec<AirportSuggestion>, SkylaneError>;
}

/// Focused role trait for connectors that return flight offers.
#[async_trait]
pub trait FlightProvider: Send + Sync {
    /// Return offers for a single leg.
    ///
    /// Implementations fill `departure_hour`/`arrival_hour` from their raw
    /// time fields (see [`crate::time::parse_hour`]) and leave them `None`
    /// when the raw value cannot be parsed. The orchestrator stamps `source`.
    async fn flights(&self, req: &LegRequest) -> Result<Vec<FlightRecord>, SkylaneError>;
}

/// Focused role trait for connectors that report historical fare metrics.
#[async_trait]
pub trait PriceAnalysisProvider: Send + Sync {
    /// Fare distribution for the route and departure date of `req`.
    async fn price_analysis(&self, req: &LegRequest) -> Result<PriceAnalysis, SkylaneError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait SkylaneConnector: Send + Sync {
    /// A stable identifier used in warnings and logs (e.g., "skylane-http-local").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise airport lookup capability by returning a usable trait object reference.
    fn as_airport_provider(&self) -> Option<&dyn AirportProvider> {
        None
    }

    /// Advertise flight search capability by returning a usable trait object reference.
    fn as_flight_provider(&self) -> Option<&dyn FlightProvider> {
        None
    }

    /// Advertise fare analysis capability.
    fn as_price_analysis_provider(&self) -> Option<&dyn PriceAnalysisProvider> {
        None
    }
}
