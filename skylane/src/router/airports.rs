use skylane_core::{
    AirportQuery, AirportRecord, AirportSearchReport, AirportSuggestion, Capability, SkylaneError,
    Source, merge_airports,
};

use crate::Skylane;
use crate::core::tag_err;

type SourceOutcome = (Source, &'static str, Result<Vec<AirportSuggestion>, SkylaneError>);

impl Skylane {
    /// Look up airport suggestions for free-text input.
    ///
    /// The local and external sources are queried concurrently, each bounded
    /// by the provider timeout. Their suggestions are adapted to
    /// [`AirportRecord`]s and combined with [`merge_airports`]: local first,
    /// duplicate codes resolved in favor of the local source, each group
    /// ordered by city.
    ///
    /// The external provider is skipped when the trimmed query is shorter
    /// than `external_min_query_len` or when it is disabled in configuration.
    /// A source that fails or times out contributes nothing and adds one entry
    /// to `warnings`.
    ///
    /// # Errors
    /// Returns `Unsupported` when no registered connector can look up airports.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "skylane::router",
            skip(self, query),
            fields(query = %query.text()),
        )
    )]
    pub async fn search_airports(
        &self,
        query: &AirportQuery,
    ) -> Result<AirportSearchReport, SkylaneError> {
        let sources = self.sources();
        if !sources
            .iter()
            .any(|(_, c)| c.as_airport_provider().is_some())
        {
            return Err(SkylaneError::unsupported(Capability::Airports.as_str()));
        }

        let external_allowed = query.char_len() >= self.cfg.external_min_query_len;
        let call_timeout = self.cfg.provider_timeout;
        let tasks = sources
            .into_iter()
            .filter(|(source, _)| *source == Source::Local || external_allowed)
            .map(|(source, c)| async move {
                let p = c.as_airport_provider()?;
                let res = Self::provider_call_with_timeout(
                    c.name(),
                    Capability::Airports.as_str(),
                    call_timeout,
                    p.airports(query),
                )
                .await;
                Some::<SourceOutcome>((source, c.name(), res))
            });
        let joined = futures::future::join_all(tasks).await;

        let mut local: Vec<AirportRecord> = Vec::new();
        let mut external: Vec<AirportRecord> = Vec::new();
        let mut warnings: Vec<SkylaneError> = Vec::new();
        for (source, name, res) in joined.into_iter().flatten() {
            match res {
                Ok(suggestions) => {
                    let bucket = match source {
                        Source::Local => &mut local,
                        Source::External => &mut external,
                    };
                    bucket.extend(
                        suggestions
                            .into_iter()
                            .map(|s| AirportRecord::from_suggestion(s, source)),
                    );
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        target: "skylane::router",
                        connector = name,
                        source = %source,
                        error = %e,
                        "airport source degraded to empty"
                    );
                    warnings.push(tag_err(name, e));
                }
            }
        }

        Ok(AirportSearchReport {
            airports: merge_airports(&local, &external),
            warnings,
        })
    }
}
