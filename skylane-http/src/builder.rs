use std::sync::Arc;

use skylane_core::{CacheConfig, SkylaneConnector};
use skylane_middleware::ConnectorBuilder as GenericConnectorBuilder;

use crate::{ExternalConnector, HttpConfig, LocalConnector};

/// Builder type alias specialized for the HTTP connectors.
pub type HttpConnectorBuilder = GenericConnectorBuilder;

impl LocalConnector {
    /// Returns an unconfigured builder around the local connector.
    ///
    /// Customize with the builder methods before calling `.build()`.
    #[must_use]
    pub fn new(cfg: HttpConfig) -> HttpConnectorBuilder {
        let raw: Arc<dyn SkylaneConnector> = Arc::new(Self::new_raw(cfg));
        GenericConnectorBuilder::new(raw)
    }
}

impl ExternalConnector {
    /// Returns a builder that caches airport suggestions for one hour.
    ///
    /// The provider bills per lookup and suggestions change rarely. Call
    /// `.without_cache()` or `.with_cache(..)` to adjust before `.build()`.
    #[must_use]
    pub fn new(cfg: HttpConfig) -> HttpConnectorBuilder {
        let raw: Arc<dyn SkylaneConnector> = Arc::new(Self::new_raw(cfg));
        GenericConnectorBuilder::new(raw).with_cache(&CacheConfig::default())
    }
}
