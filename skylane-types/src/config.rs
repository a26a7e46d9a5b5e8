//! Configuration types shared across the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Capability;

/// Global configuration for the `Skylane` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkylaneConfig {
    /// Timeout for individual provider requests.
    ///
    /// A provider that exceeds it contributes an empty list and a
    /// `ProviderTimeout` warning; the other source is unaffected.
    pub provider_timeout: Duration,
    /// Airport queries shorter than this (in characters, after trimming)
    /// skip the external provider entirely.
    pub external_min_query_len: usize,
    /// Whether the external provider is consulted at all.
    pub include_external: bool,
}

impl Default for SkylaneConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(5),
            external_min_query_len: 2,
            include_external: true,
        }
    }
}

/// Configuration for the caching middleware.
///
/// A zero `ttl_ms` disables caching for the affected capability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheConfig {
    /// Time-to-live applied to every cached entry, in milliseconds.
    pub ttl_ms: u64,
    /// Maximum number of entries kept per capability.
    pub max_entries: u64,
    /// Whether flight offers are cached as well as airport suggestions.
    pub cache_flights: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_ms: 3_600_000,
            max_entries: 1024,
            cache_flights: false,
        }
    }
}

impl CacheConfig {
    /// Effective TTL for a capability, or `None` when caching is disabled for it.
    #[must_use]
    pub fn ttl_for(&self, cap: Capability) -> Option<Duration> {
        if self.ttl_ms == 0 {
            return None;
        }
        match cap {
            Capability::Flights if !self.cache_flights => None,
            _ => Some(Duration::from_millis(self.ttl_ms)),
        }
    }

    /// Effective entry capacity (never zero).
    #[must_use]
    pub fn capacity(&self) -> u64 {
        self.max_entries.max(1)
    }
}
