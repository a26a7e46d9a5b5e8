#![allow(dead_code)]
#![allow(clippy::type_complexity)]
#![allow(clippy::missing_const_for_fn)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use skylane::{
    AirportQuery, AirportSuggestion, FlightRecord, LegRequest, SkylaneConnector, SkylaneError,
};
use skylane_core::connector::{AirportProvider, FlightProvider};
use tokio::time::{Duration, sleep};

type AirportsFn =
    Arc<dyn Fn(&AirportQuery) -> Result<Vec<AirportSuggestion>, SkylaneError> + Send + Sync>;
type FlightsFn = Arc<dyn Fn(&LegRequest) -> Result<Vec<FlightRecord>, SkylaneError> + Send + Sync>;

/// In-memory connector whose behavior is supplied per test via closures.
///
/// A capability is advertised only when its closure is set.
pub struct MockConnector {
    pub name: &'static str,
    pub delay: Duration,
    pub airports_fn: Option<AirportsFn>,
    pub flights_fn: Option<FlightsFn>,
    airport_calls: AtomicUsize,
    flight_calls: AtomicUsize,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::default()
    }

    pub fn airport_calls(&self) -> usize {
        self.airport_calls.load(Ordering::SeqCst)
    }

    pub fn flight_calls(&self) -> usize {
        self.flight_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl SkylaneConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_airport_provider(&self) -> Option<&dyn AirportProvider> {
        self.airports_fn
            .as_ref()
            .map(|_| self as &dyn AirportProvider)
    }

    fn as_flight_provider(&self) -> Option<&dyn FlightProvider> {
        self.flights_fn.as_ref().map(|_| self as &dyn FlightProvider)
    }
}

#[async_trait]
impl AirportProvider for MockConnector {
    async fn airports(&self, query: &AirportQuery) -> Result<Vec<AirportSuggestion>, SkylaneError> {
        self.airport_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        let f = self
            .airports_fn
            .as_ref()
            .ok_or_else(|| SkylaneError::unsupported("airports"))?;
        (f)(query)
    }
}

#[async_trait]
impl FlightProvider for MockConnector {
    async fn flights(&self, req: &LegRequest) -> Result<Vec<FlightRecord>, SkylaneError> {
        self.flight_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        let f = self
            .flights_fn
            .as_ref()
            .ok_or_else(|| SkylaneError::unsupported("flights"))?;
        (f)(req)
    }
}

#[derive(Default)]
pub struct MockConnectorBuilder {
    name: Option<&'static str>,
    delay: Duration,
    airports_fn: Option<AirportsFn>,
    flights_fn: Option<FlightsFn>,
}

impl MockConnectorBuilder {
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn delay(mut self, d: Duration) -> Self {
        self.delay = d;
        self
    }

    pub fn with_airports_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&AirportQuery) -> Result<Vec<AirportSuggestion>, SkylaneError>
            + Send
            + Sync
            + 'static,
    {
        self.airports_fn = Some(Arc::new(f));
        self
    }

    /// Always answer airport lookups with `suggestions`.
    pub fn returns_airports(self, suggestions: Vec<AirportSuggestion>) -> Self {
        self.with_airports_fn(move |_| Ok(suggestions.clone()))
    }

    pub fn with_flights_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&LegRequest) -> Result<Vec<FlightRecord>, SkylaneError> + Send + Sync + 'static,
    {
        self.flights_fn = Some(Arc::new(f));
        self
    }

    /// Always answer flight searches with `flights`.
    pub fn returns_flights(self, flights: Vec<FlightRecord>) -> Self {
        self.with_flights_fn(move |_| Ok(flights.clone()))
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name.unwrap_or("default_mock"),
            delay: self.delay,
            airports_fn: self.airports_fn,
            flights_fn: self.flights_fn,
            airport_calls: AtomicUsize::new(0),
            flight_calls: AtomicUsize::new(0),
        })
    }
}
