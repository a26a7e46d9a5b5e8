use std::sync::Arc;

use skylane_core::{
    Capability, Decimal, FlightQuery, FlightRecord, FlightSearchReport, LegRequest, LegResults,
    SkylaneConnector, SkylaneError, Source, parse_hour,
};

use crate::Skylane;
use crate::core::tag_err;

impl Skylane {
    /// Search flight offers for every leg of `query`.
    ///
    /// Each leg queries the local and external sources concurrently; legs
    /// themselves also run concurrently. Within a leg, local offers come
    /// first, each source keeping its own order, and every offer is stamped
    /// with the source that produced it. Failed or timed-out sources add a
    /// warning and contribute nothing.
    ///
    /// # Errors
    /// Returns `Unsupported` when no registered connector can search flights.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "skylane::router",
            skip(self, query),
            fields(
                origin = %query.origin(),
                destination = %query.destination(),
                trip = query.trip_type().code(),
            ),
        )
    )]
    pub async fn search_flights(
        &self,
        query: &FlightQuery,
    ) -> Result<FlightSearchReport, SkylaneError> {
        let sources = self.sources();
        if !sources
            .iter()
            .any(|(_, c)| c.as_flight_provider().is_some())
        {
            return Err(SkylaneError::unsupported(Capability::Flights.as_str()));
        }

        let legs = query.legs();
        let per_leg = futures::future::join_all(
            legs.into_iter().map(|leg| self.search_leg(&sources, leg)),
        )
        .await;

        let mut warnings: Vec<SkylaneError> = Vec::new();
        let mut legs: Vec<LegResults> = Vec::with_capacity(per_leg.len());
        for (leg, errs) in per_leg {
            warnings.extend(errs);
            legs.push(leg);
        }
        let mut legs = legs.into_iter();
        let outbound = legs.next().ok_or_else(|| {
            SkylaneError::InvalidArg("flight query produced no outbound leg".to_string())
        })?;
        let inbound = legs.next();

        Ok(FlightSearchReport {
            outbound,
            inbound,
            warnings,
        })
    }

    async fn search_leg(
        &self,
        sources: &[(Source, &Arc<dyn SkylaneConnector>)],
        leg: LegRequest,
    ) -> (LegResults, Vec<SkylaneError>) {
        let call_timeout = self.cfg.provider_timeout;
        let tasks = sources.iter().map(|(source, c)| {
            let leg = &leg;
            async move {
                let p = c.as_flight_provider()?;
                let res = Self::provider_call_with_timeout(
                    c.name(),
                    Capability::Flights.as_str(),
                    call_timeout,
                    p.flights(leg),
                )
                .await;
                Some((*source, c.name(), res))
            }
        });
        let joined = futures::future::join_all(tasks).await;

        let mut flights: Vec<FlightRecord> = Vec::new();
        let mut warnings: Vec<SkylaneError> = Vec::new();
        for (source, name, res) in joined.into_iter().flatten() {
            match res {
                Ok(offers) => {
                    flights.extend(offers.into_iter().filter_map(|f| normalize(f, source)));
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        target: "skylane::router",
                        connector = name,
                        source = %source,
                        leg = %leg.leg,
                        error = %e,
                        "flight source degraded to empty"
                    );
                    warnings.push(tag_err(name, e));
                }
            }
        }

        (
            LegResults {
                request: leg,
                flights,
            },
            warnings,
        )
    }
}

/// Stamp the source and make hour fields consistent with the raw times.
///
/// Offers with a negative price are dropped.
fn normalize(mut f: FlightRecord, source: Source) -> Option<FlightRecord> {
    if f.price < Decimal::ZERO {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "skylane::router", price = %f.price, "dropping offer with negative price");
        return None;
    }
    f.source = source;
    f.departure_hour = f
        .departure_hour
        .filter(|h| *h < 24)
        .or_else(|| f.departure_time.as_deref().and_then(parse_hour));
    f.arrival_hour = f
        .arrival_hour
        .filter(|h| *h < 24)
        .or_else(|| f.arrival_time.as_deref().and_then(parse_hour));
    Some(f)
}
