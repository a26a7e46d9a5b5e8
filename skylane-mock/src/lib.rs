use std::time::Duration;

use async_trait::async_trait;
use skylane_core::connector::{
    AirportProvider, FlightProvider, PriceAnalysisProvider, SkylaneConnector,
};
use skylane_core::{
    AirportQuery, AirportSuggestion, FlightRecord, LegRequest, PriceAnalysis, SkylaneError,
    Source,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Simulated latency for the `timeout` / `TIME` triggers.
pub const SLOW_RESPONSE: Duration = Duration::from_millis(200);

/// Mock connector for CI-safe tests. Provides deterministic data from static fixtures.
///
/// Only the external fixture set answers fare analyses. The airport query
/// `fail` and the origin code `FAIL` produce a connector error; `timeout` and `TIME` respond only after [`SLOW_RESPONSE`].
pub struct MockConnector {
    role: Source,
}

impl MockConnector {
    /// Fixture set of the site's own backend.
    #[must_use]
    pub const fn local() -> Self {
        Self { role: Source::Local }
    }

    /// Fixture set of the external provider (loose shapes, ISO times).
    #[must_use]
    pub const fn external() -> Self {
        Self {
            role: Source::External,
        }
    }

    async fn maybe_fail_or_timeout(
        &self,
        trigger: &str,
        capability: &'static str,
    ) -> Result<(), SkylaneError> {
        match trigger {
            "fail" | "FAIL" => Err(SkylaneError::connector(
                self.name(),
                format!("forced failure: {capability}"),
            )),
            "timeout" | "TIME" => {
                tokio::time::sleep(SLOW_RESPONSE).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SkylaneConnector for MockConnector {
    fn name(&self) -> &'static str {
        match self.role {
            Source::Local => "skylane-mock-local",
            Source::External => "skylane-mock-external",
        }
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_airport_provider(&self) -> Option<&dyn AirportProvider> {
        Some(self as &dyn AirportProvider)
    }

    fn as_flight_provider(&self) -> Option<&dyn FlightProvider> {
        Some(self as &dyn FlightProvider)
    }

    fn as_price_analysis_provider(&self) -> Option<&dyn PriceAnalysisProvider> {
        match self.role {
            Source::Local => None,
            Source::External => Some(self as &dyn PriceAnalysisProvider),
        }
    }
}

#[async_trait]
impl AirportProvider for MockConnector {
    async fn airports(&self, query: &AirportQuery) -> Result<Vec<AirportSuggestion>, SkylaneError> {
        self.maybe_fail_or_timeout(query.text(), "airports").await?;
        Ok(match self.role {
            Source::Local => fixtures::airports::local(query.text()),
            Source::External => fixtures::airports::external(query.text()),
        })
    }
}

#[async_trait]
impl FlightProvider for MockConnector {
    async fn flights(&self, req: &LegRequest) -> Result<Vec<FlightRecord>, SkylaneError> {
        self.maybe_fail_or_timeout(&req.origin, "flights").await?;
        Ok(match self.role {
            Source::Local => fixtures::flights::local(req),
            Source::External => fixtures::flights::external(req),
        })
    }
}

#[async_trait]
impl PriceAnalysisProvider for MockConnector {
    async fn price_analysis(&self, req: &LegRequest) -> Result<PriceAnalysis, SkylaneError> {
        self.maybe_fail_or_timeout(&req.origin, "price_analysis")
            .await?;
        Ok(fixtures::flights::price_analysis(req))
    }
}
