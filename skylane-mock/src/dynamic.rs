use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use skylane_core::connector::{
    AirportProvider, FlightProvider, PriceAnalysisProvider, SkylaneConnector,
};
use skylane_core::{
    AirportQuery, AirportSuggestion, FlightRecord, LegRequest, PriceAnalysis, SkylaneError,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Return the provided value after a delay.
    Delay(Duration, T),
    /// Fail immediately with the provided error.
    Fail(SkylaneError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

impl<T> MockBehavior<T> {
    async fn run(self) -> Result<T, SkylaneError> {
        match self {
            Self::Return(v) => Ok(v),
            Self::Delay(d, v) => {
                tokio::time::sleep(d).await;
                Ok(v)
            }
            Self::Fail(e) => Err(e),
            Self::Hang => std::future::pending().await,
        }
    }
}

#[derive(Default)]
struct InternalState {
    airport_rules: HashMap<String, MockBehavior<Vec<AirportSuggestion>>>,
    flight_rules: HashMap<(String, String), MockBehavior<Vec<FlightRecord>>>,
    analysis_rules: HashMap<(String, String), MockBehavior<PriceAnalysis>>,
}

#[derive(Default)]
struct Counters {
    airports: AtomicUsize,
    flights: AtomicUsize,
    analyses: AtomicUsize,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
    counters: Arc<Counters>,
}

impl DynamicMockController {
    /// Set the behavior for `airports` calls whose query matches `query`
    /// (case-insensitive, trimmed).
    pub async fn set_airports_behavior(
        &self,
        query: &str,
        behavior: MockBehavior<Vec<AirportSuggestion>>,
    ) {
        let mut guard = self.state.lock().await;
        guard
            .airport_rules
            .insert(query.trim().to_lowercase(), behavior);
    }

    /// Set the behavior for `flights` calls on the `origin` → `destination` route.
    pub async fn set_flights_behavior(
        &self,
        origin: &str,
        destination: &str,
        behavior: MockBehavior<Vec<FlightRecord>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.flight_rules.insert(
            (origin.to_uppercase(), destination.to_uppercase()),
            behavior,
        );
    }

    /// Set the behavior for `price_analysis` calls on a route.
    pub async fn set_price_analysis_behavior(
        &self,
        origin: &str,
        destination: &str,
        behavior: MockBehavior<PriceAnalysis>,
    ) {
        let mut guard = self.state.lock().await;
        guard.analysis_rules.insert(
            (origin.to_uppercase(), destination.to_uppercase()),
            behavior,
        );
    }

    /// Number of `airports` calls received so far.
    #[must_use]
    pub fn airport_calls(&self) -> usize {
        self.counters.airports.load(Ordering::SeqCst)
    }

    /// Number of `flights` calls received so far.
    #[must_use]
    pub fn flight_calls(&self) -> usize {
        self.counters.flights.load(Ordering::SeqCst)
    }

    /// Number of `price_analysis` calls received so far.
    #[must_use]
    pub fn analysis_calls(&self) -> usize {
        self.counters.analyses.load(Ordering::SeqCst)
    }

    /// Clear all configured behaviors.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.airport_rules.clear();
        guard.flight_rules.clear();
        guard.analysis_rules.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Inputs without a configured rule produce an empty list, or `NotFound`
/// for fare analyses.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
    counters: Arc<Counters>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn SkylaneConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let counters = Arc::new(Counters::default());
        let controller = DynamicMockController {
            state: Arc::clone(&state),
            counters: Arc::clone(&counters),
        };
        let me = Arc::new(Self {
            name,
            state,
            counters,
        });
        (me as Arc<dyn SkylaneConnector>, controller)
    }
}

#[async_trait]
impl SkylaneConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
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
impl AirportProvider for DynamicMockConnector {
    async fn airports(&self, query: &AirportQuery) -> Result<Vec<AirportSuggestion>, SkylaneError> {
        self.counters.airports.fetch_add(1, Ordering::SeqCst);
        // Acquire behavior snapshot without holding the lock across await points
        let behavior = {
            let guard = self.state.lock().await;
            guard
                .airport_rules
                .get(&query.text().to_lowercase())
                .cloned()
        };
        match behavior {
            Some(b) => b.run().await,
            None => Ok(vec![]),
        }
    }
}

#[async_trait]
impl FlightProvider for DynamicMockConnector {
    async fn flights(&self, req: &LegRequest) -> Result<Vec<FlightRecord>, SkylaneError> {
        self.counters.flights.fetch_add(1, Ordering::SeqCst);
        let behavior = {
            let guard = self.state.lock().await;
            guard
                .flight_rules
                .get(&(req.origin.clone(), req.destination.clone()))
                .cloned()
        };
        match behavior {
            Some(b) => b.run().await,
            None => Ok(vec![]),
        }
    }
}

#[async_trait]
impl PriceAnalysisProvider for DynamicMockConnector {
    async fn price_analysis(&self, req: &LegRequest) -> Result<PriceAnalysis, SkylaneError> {
        self.counters.analyses.fetch_add(1, Ordering::SeqCst);
        let behavior = {
            let guard = self.state.lock().await;
            guard
                .analysis_rules
                .get(&(req.origin.clone(), req.destination.clone()))
                .cloned()
        };
        match behavior {
            Some(b) => b.run().await,
            None => Err(SkylaneError::not_found(format!(
                "price analysis for {}-{}",
                req.origin, req.destination
            ))),
        }
    }
}
