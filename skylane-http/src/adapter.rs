#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use skylane_core::{LegRequest, SkylaneError};

use crate::config::HttpConfig;
use crate::wire::{
    ExternalLocation, ExternalPriceAnalysisResponse, ExternalSearchResponse,
    LocalFlightsResponse, LocalPlace,
};

/// Local backend transport (so we can inject fakes in tests).
#[async_trait]
pub trait LocalApi: Send + Sync {
    /// `GET /query/places/{q}`.
    async fn places(&self, query: &str) -> Result<Vec<LocalPlace>, SkylaneError>;

    /// `GET /api/flights` for one leg.
    async fn flights(&self, req: &LegRequest) -> Result<LocalFlightsResponse, SkylaneError>;
}

/// External provider transport (so we can inject fakes in tests).
#[async_trait]
pub trait ExternalApi: Send + Sync {
    /// `GET /amadeus/airports/{q}`.
    async fn airports(&self, query: &str) -> Result<Vec<ExternalLocation>, SkylaneError>;

    /// `GET /amadeus/search` for one leg.
    async fn search(&self, req: &LegRequest) -> Result<ExternalSearchResponse, SkylaneError>;

    /// `GET /amadeus/price-analysis` for the route and date of one leg.
    async fn price_analysis(
        &self,
        req: &LegRequest,
    ) -> Result<ExternalPriceAnalysisResponse, SkylaneError>;
}

/// Production transport backed by `reqwest`.
///
/// `reqwest::Client` is `Clone + Send + Sync` and pools connections
/// internally, so one adapter can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct RealAdapter {
    cfg: HttpConfig,
    http: reqwest::Client,
    connector: &'static str,
}

impl RealAdapter {
    /// Wrap `cfg`; errors are attributed to `connector`.
    #[must_use]
    pub fn new(cfg: HttpConfig, connector: &'static str) -> Self {
        let http = cfg.client();
        Self {
            cfg,
            http,
            connector,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
        context: &str,
    ) -> Result<T, SkylaneError> {
        let url = self.cfg.endpoint(segments)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "skylane::http", connector = self.connector, url = %url, "GET");
        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| map_http_err(self.connector, &e, context))?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SkylaneError::not_found(context.to_string()));
        }
        if !status.is_success() {
            return Err(SkylaneError::connector(
                self.connector,
                format!("status {}: {context}", status.as_u16()),
            ));
        }
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| map_http_err(self.connector, &e, context))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| SkylaneError::Data(format!("{context}: undecodable body: {e}")))
    }
}

fn map_http_err(connector: &str, e: &reqwest::Error, context: &str) -> SkylaneError {
    if e.is_timeout() {
        SkylaneError::connector(connector, format!("timeout: {context}"))
    } else if e.is_connect() {
        SkylaneError::connector(connector, format!("unreachable: {context}"))
    } else {
        SkylaneError::connector(connector, format!("{context}: {e}"))
    }
}

fn leg_params(req: &LegRequest, seat_class: &str) -> Vec<(&'static str, String)> {
    vec![
        ("Origin", req.origin.clone()),
        ("Destination", req.destination.clone()),
        ("DepartDate", req.date.format("%Y-%m-%d").to_string()),
        ("SeatClass", seat_class.to_string()),
        ("Adults", req.adults.to_string()),
        // Each leg is requested on its own, so every call is one-way.
        ("TripType", "1".to_string()),
    ]
}

#[async_trait]
impl LocalApi for RealAdapter {
    async fn places(&self, query: &str) -> Result<Vec<LocalPlace>, SkylaneError> {
        self.get_json(
            &["query", "places", query],
            &[],
            &format!("places for '{query}'"),
        )
        .await
    }

    async fn flights(&self, req: &LegRequest) -> Result<LocalFlightsResponse, SkylaneError> {
        let params = leg_params(req, req.seat_class.as_str());
        self.get_json(
            &["api", "flights"],
            &params,
            &format!("flights {}-{}", req.origin, req.destination),
        )
        .await
    }
}

#[async_trait]
impl ExternalApi for RealAdapter {
    async fn airports(&self, query: &str) -> Result<Vec<ExternalLocation>, SkylaneError> {
        self.get_json(
            &["amadeus", "airports", query],
            &[],
            &format!("airports for '{query}'"),
        )
        .await
    }

    async fn search(&self, req: &LegRequest) -> Result<ExternalSearchResponse, SkylaneError> {
        let params = leg_params(req, req.seat_class.travel_class());
        self.get_json(
            &["amadeus", "search"],
            &params,
            &format!("offers {}-{}", req.origin, req.destination),
        )
        .await
    }

    async fn price_analysis(
        &self,
        req: &LegRequest,
    ) -> Result<ExternalPriceAnalysisResponse, SkylaneError> {
        let params = [
            ("Origin", req.origin.clone()),
            ("Destination", req.destination.clone()),
            ("DepartDate", req.date.format("%Y-%m-%d").to_string()),
        ];
        self.get_json(
            &["amadeus", "price-analysis"],
            &params,
            &format!("price analysis {}-{}", req.origin, req.destination),
        )
        .await
    }
}

#[cfg(feature = "test-adapters")]
impl dyn LocalApi {
    /// Test helper that builds a `LocalApi` from two closures.
    pub fn from_fns<P, F>(places: P, flights: F) -> Arc<dyn LocalApi>
    where
        P: Send + Sync + 'static + Fn(&str) -> Result<Vec<LocalPlace>, SkylaneError>,
        F: Send + Sync + 'static + Fn(&LegRequest) -> Result<LocalFlightsResponse, SkylaneError>,
    {
        struct FnLocal<P, F>(P, F);
        #[async_trait]
        impl<P, F> LocalApi for FnLocal<P, F>
        where
            P: Send + Sync + 'static + Fn(&str) -> Result<Vec<LocalPlace>, SkylaneError>,
            F: Send
                + Sync
                + 'static
                + Fn(&LegRequest) -> Result<LocalFlightsResponse, SkylaneError>,
        {
            async fn places(&self, query: &str) -> Result<Vec<LocalPlace>, SkylaneError> {
                (self.0)(query)
            }
            async fn flights(
                &self,
                req: &LegRequest,
            ) -> Result<LocalFlightsResponse, SkylaneError> {
                (self.1)(req)
            }
        }
        Arc::new(FnLocal(places, flights))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn ExternalApi {
    /// Test helper that builds an `ExternalApi` from three closures.
    pub fn from_fns<A, S, P>(airports: A, search: S, analysis: P) -> Arc<dyn ExternalApi>
    where
        A: Send + Sync + 'static + Fn(&str) -> Result<Vec<ExternalLocation>, SkylaneError>,
        S: Send + Sync + 'static + Fn(&LegRequest) -> Result<ExternalSearchResponse, SkylaneError>,
        P: Send
            + Sync
            + 'static
            + Fn(&LegRequest) -> Result<ExternalPriceAnalysisResponse, SkylaneError>,
    {
        struct FnExternal<A, S, P>(A, S, P);
        #[async_trait]
        impl<A, S, P> ExternalApi for FnExternal<A, S, P>
        where
            A: Send + Sync + 'static + Fn(&str) -> Result<Vec<ExternalLocation>, SkylaneError>,
            S: Send
                + Sync
                + 'static
                + Fn(&LegRequest) -> Result<ExternalSearchResponse, SkylaneError>,
            P: Send
                + Sync
                + 'static
                + Fn(&LegRequest) -> Result<ExternalPriceAnalysisResponse, SkylaneError>,
        {
            async fn airports(&self, query: &str) -> Result<Vec<ExternalLocation>, SkylaneError> {
                (self.0)(query)
            }
            async fn search(
                &self,
                req: &LegRequest,
            ) -> Result<ExternalSearchResponse, SkylaneError> {
                (self.1)(req)
            }
            async fn price_analysis(
                &self,
                req: &LegRequest,
            ) -> Result<ExternalPriceAnalysisResponse, SkylaneError> {
                (self.2)(req)
            }
        }
        Arc::new(FnExternal(airports, search, analysis))
    }
}
