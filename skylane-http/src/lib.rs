//! skylane-http
//!
//! Connectors that implement `SkylaneConnector` over HTTP:
//!
//! - [`LocalConnector`] talks to the local flight backend
//!   (`/query/places/{q}`, `/api/flights`).
//! - [`ExternalConnector`] talks to the external flight-offer provider's
//!   gateway (`/amadeus/airports/{q}`, `/amadeus/search`,
//!   `/amadeus/price-analysis`).
//!
//! Both adapt their backend's JSON to skylane records. Transports live
//! behind the [`adapter::LocalApi`] and [`adapter::ExternalApi`] traits so
//! tests can inject fakes (`test-adapters` feature).

/// Transport traits and the production adapter backed by `reqwest`.
pub mod adapter;
mod builder;
mod config;
/// Backend JSON shapes.
pub mod wire;

use std::sync::Arc;

use adapter::{ExternalApi, LocalApi, RealAdapter};
use async_trait::async_trait;
use skylane_core::{
    AirportQuery, AirportSuggestion, FlightRecord, LegRequest, PriceAnalysis, SkylaneError,
    connector::{
        AirportProvider, ConnectorKey, FlightProvider, PriceAnalysisProvider, SkylaneConnector,
    },
};

pub use builder::HttpConnectorBuilder;
pub use config::HttpConfig;

fn looks_like_not_found(msg: &str) -> bool {
    let m = msg.to_ascii_lowercase();
    m.contains("not found") || m.contains("no data") || m.contains("no flights")
}

// Opaque failures are attributed to `connector`; "nothing here" messages
// become `NotFound`.
fn normalize_error(connector: &'static str, e: SkylaneError, what: &str) -> SkylaneError {
    match e {
        SkylaneError::Connector { msg, .. } if looks_like_not_found(&msg) => {
            SkylaneError::not_found(what.to_string())
        }
        SkylaneError::Connector { msg, .. } | SkylaneError::Other(msg) => {
            SkylaneError::connector(connector, msg)
        }
        other => other,
    }
}

/// Connector for the local flight backend.
pub struct LocalConnector {
    api: Arc<dyn LocalApi>,
}

impl LocalConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("skylane-http-local");

    /// Build with the `reqwest` transport.
    #[must_use]
    pub fn new_raw(cfg: HttpConfig) -> Self {
        Self {
            api: Arc::new(RealAdapter::new(cfg, Self::KEY.as_str())),
        }
    }

    /// For tests/injection.
    #[must_use]
    pub fn from_adapter(api: Arc<dyn LocalApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SkylaneConnector for LocalConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Local backend"
    }

    fn as_airport_provider(&self) -> Option<&dyn AirportProvider> {
        Some(self as &dyn AirportProvider)
    }

    fn as_flight_provider(&self) -> Option<&dyn FlightProvider> {
        Some(self as &dyn FlightProvider)
    }
}

#[async_trait]
impl AirportProvider for LocalConnector {
    async fn airports(&self, query: &AirportQuery) -> Result<Vec<AirportSuggestion>, SkylaneError> {
        let places = self.api.places(query.text()).await.map_err(|e| {
            normalize_error(self.name(), e, &format!("airports for '{}'", query.text()))
        })?;
        Ok(places.into_iter().map(AirportSuggestion::from).collect())
    }
}

#[async_trait]
impl FlightProvider for LocalConnector {
    async fn flights(&self, req: &LegRequest) -> Result<Vec<FlightRecord>, SkylaneError> {
        let resp = self.api.flights(req).await.map_err(|e| {
            normalize_error(
                self.name(),
                e,
                &format!("flights {}-{}", req.origin, req.destination),
            )
        })?;
        Ok(resp
            .flights
            .into_iter()
            .filter_map(|f| f.into_record(req))
            .collect())
    }
}

/// Connector for the external flight-offer provider.
pub struct ExternalConnector {
    api: Arc<dyn ExternalApi>,
}

impl ExternalConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("skylane-http-external");

    /// Build with the `reqwest` transport.
    #[must_use]
    pub fn new_raw(cfg: HttpConfig) -> Self {
        Self {
            api: Arc::new(RealAdapter::new(cfg, Self::KEY.as_str())),
        }
    }

    /// For tests/injection.
    #[must_use]
    pub fn from_adapter(api: Arc<dyn ExternalApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SkylaneConnector for ExternalConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Amadeus"
    }

    fn as_airport_provider(&self) -> Option<&dyn AirportProvider> {
        Some(self as &dyn AirportProvider)
    }

    fn as_flight_provider(&self) -> Option<&dyn FlightProvider> {
        Some(self as &dyn FlightProvider)
    }

    fn as_price_analysis_provider(&self) -> Option<&dyn PriceAnalysisProvider> {
        Some(self as &dyn PriceAnalysisProvider)
    }
}

#[async_trait]
impl AirportProvider for ExternalConnector {
    async fn airports(&self, query: &AirportQuery) -> Result<Vec<AirportSuggestion>, SkylaneError> {
        let locations = self.api.airports(query.text()).await.map_err(|e| {
            normalize_error(self.name(), e, &format!("airports for '{}'", query.text()))
        })?;
        Ok(locations.into_iter().map(AirportSuggestion::from).collect())
    }
}

#[async_trait]
impl FlightProvider for ExternalConnector {
    async fn flights(&self, req: &LegRequest) -> Result<Vec<FlightRecord>, SkylaneError> {
        let what = format!("flights {}-{}", req.origin, req.destination);
        let resp = self
            .api
            .search(req)
            .await
            .map_err(|e| normalize_error(self.name(), e, &what))?;
        if resp.error {
            let msg = resp
                .message
                .unwrap_or_else(|| "flight search failed".to_string());
            return Err(normalize_error(
                self.name(),
                SkylaneError::connector(self.name(), msg),
                &what,
            ));
        }
        Ok(resp
            .flights
            .into_iter()
            .filter_map(|f| f.into_record(req))
            .collect())
    }
}

#[async_trait]
impl PriceAnalysisProvider for ExternalConnector {
    async fn price_analysis(&self, req: &LegRequest) -> Result<PriceAnalysis, SkylaneError> {
        let what = format!("price analysis {}-{} on {}", req.origin, req.destination, req.date);
        let resp = self
            .api
            .price_analysis(req)
            .await
            .map_err(|e| normalize_error(self.name(), e, &what))?;
        if resp.error {
            let msg = resp
                .message
                .unwrap_or_else(|| "price analysis failed".to_string());
            return Err(normalize_error(
                self.name(),
                SkylaneError::connector(self.name(), msg),
                &what,
            ));
        }
        let analysis = resp.into_analysis();
        if analysis.metrics.is_empty() {
            return Err(SkylaneError::not_found(what));
        }
        Ok(analysis)
    }
}
