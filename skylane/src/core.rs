use std::sync::Arc;
use std::time::Duration;

use skylane_core::{SkylaneConfig, SkylaneConnector, SkylaneError, Source};

/// Orchestrator that fans requests out to the local and external sources.
pub struct Skylane {
    pub(crate) local: Option<Arc<dyn SkylaneConnector>>,
    pub(crate) external: Option<Arc<dyn SkylaneConnector>>,
    pub(crate) cfg: SkylaneConfig,
}

/// Builder for constructing a `Skylane` orchestrator with custom configuration.
pub struct SkylaneBuilder {
    local: Option<Arc<dyn SkylaneConnector>>,
    external: Option<Arc<dyn SkylaneConnector>>,
    cfg: SkylaneConfig,
}

impl Default for SkylaneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SkylaneBuilder {
    /// Create a new builder with default configuration and no connectors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            local: None,
            external: None,
            cfg: SkylaneConfig::default(),
        }
    }

    /// Register the connector for the local backend.
    ///
    /// Its results always rank ahead of the external provider's and win
    /// duplicate airport codes. Registering again replaces the previous one.
    #[must_use]
    pub fn local(mut self, c: Arc<dyn SkylaneConnector>) -> Self {
        self.local = Some(c);
        self
    }

    /// Register the connector for the external flight-data provider.
    #[must_use]
    pub fn external(mut self, c: Arc<dyn SkylaneConnector>) -> Self {
        self.external = Some(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: SkylaneConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the per-provider request timeout.
    ///
    /// A source that exceeds it is treated as empty and reported in the
    /// warnings; it never delays the other source beyond this bound.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Minimum trimmed query length (in characters) before the external
    /// provider is consulted for airport suggestions.
    #[must_use]
    pub const fn external_min_query_len(mut self, chars: usize) -> Self {
        self.cfg.external_min_query_len = chars;
        self
    }

    /// Toggle the external provider without unregistering it.
    #[must_use]
    pub const fn include_external(mut self, yes: bool) -> Self {
        self.cfg.include_external = yes;
        self
    }

    /// Build the `Skylane` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if neither a local nor an external connector was registered,
    /// or if the provider timeout is zero.
    pub fn build(self) -> Result<Skylane, SkylaneError> {
        if self.local.is_none() && self.external.is_none() {
            return Err(SkylaneError::InvalidArg(
                "no connectors registered; add one via local(...) or external(...)".to_string(),
            ));
        }
        if self.cfg.provider_timeout.is_zero() {
            return Err(SkylaneError::InvalidArg(
                "provider_timeout must be greater than zero".to_string(),
            ));
        }
        Ok(Skylane {
            local: self.local,
            external: self.external,
            cfg: self.cfg,
        })
    }
}

/// Attribute an opaque provider failure to the connector that produced it.
///
/// Errors that already carry provider context pass through unchanged.
pub fn tag_err(connector: &str, e: SkylaneError) -> SkylaneError {
    match e {
        e @ (SkylaneError::NotFound { .. }
        | SkylaneError::ProviderTimeout { .. }
        | SkylaneError::Connector { .. }) => e,
        other => SkylaneError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Skylane {
    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "skylane::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, SkylaneError>
    where
        Fut: core::future::Future<Output = Result<T, SkylaneError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(SkylaneError::provider_timeout(connector_name, capability)))
    }

    /// Start building a new `Skylane` instance.
    ///
    /// ```rust,ignore
    /// use skylane::Skylane;
    /// use skylane_http::{ExternalConnector, HttpConfig, LocalConnector};
    ///
    /// let cfg = HttpConfig::new("http://localhost:8000")?;
    /// let skylane = Skylane::builder()
    ///     .local(LocalConnector::new(cfg.clone()).build())
    ///     .external(ExternalConnector::new(cfg).build())
    ///     .provider_timeout(std::time::Duration::from_secs(3))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> SkylaneBuilder {
        SkylaneBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SkylaneConfig {
        &self.cfg
    }

    /// Registered connectors in priority order, each paired with the source
    /// its records are attributed to. The external connector is omitted when
    /// disabled by configuration.
    pub(crate) fn sources(&self) -> Vec<(Source, &Arc<dyn SkylaneConnector>)> {
        let mut out = Vec::with_capacity(2);
        if let Some(c) = &self.local {
            out.push((Source::Local, c));
        }
        if self.cfg.include_external
            && let Some(c) = &self.external
        {
            out.push((Source::External, c));
        }
        out
    }
}
