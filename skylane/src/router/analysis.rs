use skylane_core::{Capability, FlightQuery, PriceAnalysisReport, SkylaneError};

use crate::Skylane;
use crate::core::tag_err;

impl Skylane {
    /// Fare quartiles for the outbound leg of `query`.
    ///
    /// Sources are tried in priority order and the first analysis wins.
    /// A source that fails or times out adds a warning and the next one is
    /// tried; if none answers, `analysis` is `None`.
    ///
    /// # Errors
    /// Returns `Unsupported` when no registered connector offers price analysis.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "skylane::router",
            skip(self, query),
            fields(origin = %query.origin(), destination = %query.destination()),
        )
    )]
    pub async fn price_analysis(
        &self,
        query: &FlightQuery,
    ) -> Result<PriceAnalysisReport, SkylaneError> {
        let sources = self.sources();
        if !sources
            .iter()
            .any(|(_, c)| c.as_price_analysis_provider().is_some())
        {
            return Err(SkylaneError::unsupported(
                Capability::PriceAnalysis.as_str(),
            ));
        }
        let request = query.legs().into_iter().next().ok_or_else(|| {
            SkylaneError::InvalidArg("flight query produced no outbound leg".to_string())
        })?;

        let mut warnings: Vec<SkylaneError> = Vec::new();
        for (_source, c) in sources {
            let Some(p) = c.as_price_analysis_provider() else {
                continue;
            };
            let res = Self::provider_call_with_timeout(
                c.name(),
                Capability::PriceAnalysis.as_str(),
                self.cfg.provider_timeout,
                p.price_analysis(&request),
            )
            .await;
            match res {
                Ok(analysis) => {
                    return Ok(PriceAnalysisReport {
                        request,
                        analysis: Some(analysis),
                        warnings,
                    });
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        target: "skylane::router",
                        connector = c.name(),
                        source = %_source,
                        error = %e,
                        "price analysis source failed; trying next"
                    );
                    warnings.push(tag_err(c.name(), e));
                }
            }
        }

        Ok(PriceAnalysisReport {
            request,
            analysis: None,
            warnings,
        })
    }
}
