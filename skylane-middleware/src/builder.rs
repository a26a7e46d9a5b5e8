//! Builder for composing connectors with middleware layers.
//!
//! Layers form an "onion" around the raw connector. The `layers` vector
//! stores them outermost-first (last added = outermost) and `build()` applies
//! them in reverse:
//!
//! ```text
//! builder.layer(a).layer(b)
//!
//! Storage: [b, a]        (outermost first)
//! Applied: Raw -> a -> b
//! Result:  b(a(Raw))
//! ```

use std::sync::Arc;

use serde_json::json;
use skylane_core::{CacheConfig, Middleware, SkylaneConnector};

use crate::cache::CacheMiddleware;

const CACHE_LAYER: &str = "CachingMiddleware";

/// Generic middleware builder for composing a connector with layered wrappers.
pub struct ConnectorBuilder {
    raw: Arc<dyn SkylaneConnector>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
}

impl ConnectorBuilder {
    /// Create a new builder from a raw, unwrapped connector.
    #[must_use]
    pub fn new(raw: Arc<dyn SkylaneConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace the response cache.
    ///
    /// The cache sits innermost so that any custom layer added later still
    /// sees every call, while repeated lookups never reach the raw connector.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        self.layers.retain(|m| m.name() != CACHE_LAYER);
        self.layers.push(Box::new(CacheMiddleware::new(cfg.clone())));
        self
    }

    /// Remove the cache if present.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.layers.retain(|m| m.name() != CACHE_LAYER);
        self
    }

    /// Add an arbitrary middleware layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Describe the stack, outermost first, ending with the raw connector.
    #[must_use]
    pub fn describe(&self) -> Vec<serde_json::Value> {
        self.layers
            .iter()
            .map(|l| json!({ "name": l.name(), "config": l.config_json() }))
            .chain(std::iter::once(
                json!({ "name": "RawConnector", "config": { "name": self.raw.name() } }),
            ))
            .collect()
    }

    /// Build the wrapped connector, applying layers innermost first.
    #[must_use]
    pub fn build(self) -> Arc<dyn SkylaneConnector> {
        let mut acc: Arc<dyn SkylaneConnector> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        acc
    }
}
