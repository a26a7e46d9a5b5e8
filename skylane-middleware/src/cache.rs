use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;
use skylane_core::connector::{AirportProvider, FlightProvider, PriceAnalysisProvider};
use skylane_core::{
    AirportQuery, AirportSuggestion, CacheConfig, Capability, FlightRecord, LegRequest,
    PriceAnalysis, SkylaneConnector, SkylaneError,
};

/// Declarative wrapper that applies caching when building a connector stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl skylane_core::Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn SkylaneConnector>) -> Arc<dyn SkylaneConnector> {
        let Self { cfg } = *self;
        Arc::new(CachingConnector::new(inner, &cfg))
    }

    fn name(&self) -> &'static str {
        "CachingMiddleware"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "ttl_ms": self.cfg.ttl_ms,
            "max_entries": self.cfg.max_entries,
            "cache_flights": self.cfg.cache_flights,
        })
    }
}

/// Connector wrapper that memoizes successful provider responses.
///
/// Airport suggestions are keyed by the lowercased, trimmed query text;
/// flight offers by the full leg request; fare analyses by route and date.
/// Failures are never cached.
/// A store is `None` when caching is disabled for its capability.
pub struct CachingConnector {
    inner: Arc<dyn SkylaneConnector>,
    airports: Option<Cache<String, Arc<Vec<AirportSuggestion>>>>,
    flights: Option<Cache<LegRequest, Arc<Vec<FlightRecord>>>>,
    analyses: Option<Cache<String, Arc<PriceAnalysis>>>,
}

impl CachingConnector {
    fn maybe_store<K, V>(cfg: &CacheConfig, cap: Capability) -> Option<Cache<K, V>>
    where
        K: std::hash::Hash + Eq + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        let ttl = cfg.ttl_for(cap)?;
        Some(
            Cache::builder()
                .max_capacity(cfg.capacity())
                .time_to_live(ttl)
                .build(),
        )
    }

    /// Wrap `inner` with stores configured by `cfg`.
    #[must_use]
    pub fn new(inner: Arc<dyn SkylaneConnector>, cfg: &CacheConfig) -> Self {
        Self {
            airports: Self::maybe_store(cfg, Capability::Airports),
            flights: Self::maybe_store(cfg, Capability::Flights),
            analyses: Self::maybe_store(cfg, Capability::PriceAnalysis),
            inner,
        }
    }

    fn airport_key(query: &AirportQuery) -> String {
        query.text().to_lowercase()
    }

    // Class, passengers and leg direction do not change the fare distribution.
    fn analysis_key(req: &LegRequest) -> String {
        format!("{}:{}:{}", req.origin, req.destination, req.date)
    }
}

#[async_trait]
impl SkylaneConnector for CachingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    fn as_airport_provider(&self) -> Option<&dyn AirportProvider> {
        self.inner
            .as_airport_provider()
            .map(|_| self as &dyn AirportProvider)
    }

    fn as_flight_provider(&self) -> Option<&dyn FlightProvider> {
        self.inner
            .as_flight_provider()
            .map(|_| self as &dyn FlightProvider)
    }

    fn as_price_analysis_provider(&self) -> Option<&dyn PriceAnalysisProvider> {
        self.inner
            .as_price_analysis_provider()
            .map(|_| self as &dyn PriceAnalysisProvider)
    }
}

#[async_trait]
impl AirportProvider for CachingConnector {
    async fn airports(&self, query: &AirportQuery) -> Result<Vec<AirportSuggestion>, SkylaneError> {
        let inner = self
            .inner
            .as_airport_provider()
            .ok_or_else(|| SkylaneError::unsupported("airports"))?;
        let Some(store) = &self.airports else {
            return inner.airports(query).await;
        };
        let key = Self::airport_key(query);
        if let Some(v) = store.get(&key).await {
            #[cfg(feature = "tracing")]
            tracing::trace!(target: "skylane::cache", connector = self.inner.name(), key = %key, "airport cache hit");
            return Ok((*v).clone());
        }
        let value = inner.airports(query).await?;
        store.insert(key, Arc::new(value.clone())).await;
        Ok(value)
    }
}

#[async_trait]
impl FlightProvider for CachingConnector {
    async fn flights(&self, req: &LegRequest) -> Result<Vec<FlightRecord>, SkylaneError> {
        let inner = self
            .inner
            .as_flight_provider()
            .ok_or_else(|| SkylaneError::unsupported("flights"))?;
        let Some(store) = &self.flights else {
            return inner.flights(req).await;
        };
        if let Some(v) = store.get(req).await {
            return Ok((*v).clone());
        }
        let value = inner.flights(req).await?;
        store.insert(req.clone(), Arc::new(value.clone())).await;
        Ok(value)
    }
}

#[async_trait]
impl PriceAnalysisProvider for CachingConnector {
    async fn price_analysis(&self, req: &LegRequest) -> Result<PriceAnalysis, SkylaneError> {
        let inner = self
            .inner
            .as_price_analysis_provider()
            .ok_or_else(|| SkylaneError::unsupported(Capability::PriceAnalysis.as_str()))?;
        let Some(store) = &self.analyses else {
            return inner.price_analysis(req).await;
        };
        let key = Self::analysis_key(req);
        if let Some(v) = store.get(&key).await {
            return Ok((*v).clone());
        }
        let value = inner.price_analysis(req).await?;
        store.insert(key, Arc::new(value.clone())).await;
        Ok(value)
    }
}
