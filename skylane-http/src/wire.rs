//! JSON shapes returned by the two backends and their adaptation to
//! skylane records.
//!
//! Every field a backend may omit is optional here; adaptation fills the
//! gaps from the request and never fails on a single malformed offer.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use skylane_core::{
    AirportSuggestion, FlightRecord, LegRequest, PriceAnalysis, PriceMetric, QuartileRanking,
    airline_name, parse_hour,
};

/// A fare that some backends send as a JSON number and others as a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// `245.6`
    Number(serde_json::Number),
    /// `"245.60"`
    Text(String),
}

impl Amount {
    /// Exact decimal value; `None` for unparseable text.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        let raw = match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
        };
        Decimal::from_str(&raw)
            .or_else(|_| Decimal::from_scientific(&raw))
            .ok()
    }
}

/// Entry of `GET /query/places/{q}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalPlace {
    pub code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl From<LocalPlace> for AirportSuggestion {
    fn from(p: LocalPlace) -> Self {
        Self {
            code: p.code,
            city: p.city,
            name: None,
            country: p.country,
            kind: None,
        }
    }
}

/// Entry of `GET /amadeus/airports/{q}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalLocation {
    pub code: Option<String>,
    pub city: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl From<ExternalLocation> for AirportSuggestion {
    fn from(l: ExternalLocation) -> Self {
        Self {
            code: l.code,
            city: l.city,
            name: l.name,
            country: l.country,
            kind: l.kind,
        }
    }
}

/// Body of `GET /api/flights`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalFlightsResponse {
    #[serde(default)]
    pub flights: Vec<LocalFlight>,
}

/// One offer from the local backend. Times are `HH:MM` on the leg date.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalFlight {
    pub id: Option<serde_json::Value>,
    pub airline: Option<String>,
    pub airline_code: Option<String>,
    pub flight_number: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub depart_time: Option<String>,
    pub arrival_time: Option<String>,
    pub duration: Option<String>,
    pub fare: Option<Amount>,
    pub currency: Option<String>,
    pub available_seats: Option<u32>,
}

impl LocalFlight {
    /// Adapt to a [`FlightRecord`] for `req`.
    ///
    /// Returns `None` when the fare is missing, unparseable or negative.
    #[must_use]
    pub fn into_record(self, req: &LegRequest) -> Option<FlightRecord> {
        let price = self.fare.as_ref().and_then(Amount::to_decimal)?;
        if price < Decimal::ZERO {
            return None;
        }
        let airline = self
            .airline
            .or_else(|| self.airline_code.as_deref().map(airline_name));
        Some(FlightRecord {
            offer_id: self.id.map(|v| match v {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            }),
            airline_code: self.airline_code,
            airline,
            flight_number: self.flight_number,
            origin: self.origin.unwrap_or_else(|| req.origin.clone()),
            destination: self.destination.unwrap_or_else(|| req.destination.clone()),
            departure_hour: self.depart_time.as_deref().and_then(parse_hour),
            arrival_hour: self.arrival_time.as_deref().and_then(parse_hour),
            departure_time: self.depart_time,
            arrival_time: self.arrival_time,
            duration: self.duration,
            stops: 0,
            price,
            currency: self.currency,
            available_seats: self.available_seats,
            ..FlightRecord::default()
        })
    }
}

/// Body of `GET /amadeus/search`.
///
/// The provider reports its own failures in-band with `error: true`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalSearchResponse {
    #[serde(default)]
    pub error: bool,
    pub message: Option<String>,
    #[serde(default)]
    pub flights: Vec<ExternalFlight>,
}

/// Price block of an external offer.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalPrice {
    pub total: Option<Amount>,
    pub currency: Option<String>,
}

/// One offer from the external provider. Times are ISO 8601 datetimes.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalFlight {
    pub offer_id: Option<String>,
    pub airline_code: Option<String>,
    pub airline_name: Option<String>,
    pub flight_number: Option<String>,
    pub origin_code: Option<String>,
    pub destination_code: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub duration: Option<String>,
    pub price: Option<ExternalPrice>,
    pub available_seats: Option<u32>,
    #[serde(default)]
    pub stops: u8,
}

impl ExternalFlight {
    /// Adapt to a [`FlightRecord`] for `req`.
    ///
    /// Returns `None` when the total is missing, unparseable or negative.
    #[must_use]
    pub fn into_record(self, req: &LegRequest) -> Option<FlightRecord> {
        let price_block = self.price?;
        let price = price_block.total.as_ref().and_then(Amount::to_decimal)?;
        if price < Decimal::ZERO {
            return None;
        }
        let airline = self
            .airline_name
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.airline_code.as_deref().map(airline_name));
        Some(FlightRecord {
            offer_id: self.offer_id,
            airline,
            airline_code: self.airline_code,
            flight_number: self.flight_number,
            origin: self.origin_code.unwrap_or_else(|| req.origin.clone()),
            destination: self
                .destination_code
                .unwrap_or_else(|| req.destination.clone()),
            departure_hour: self.departure_time.as_deref().and_then(parse_hour),
            arrival_hour: self.arrival_time.as_deref().and_then(parse_hour),
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            duration: self.duration,
            stops: self.stops,
            price,
            currency: price_block.currency,
            available_seats: self.available_seats,
            ..FlightRecord::default()
        })
    }
}

/// Body of `GET /amadeus/price-analysis`.
///
/// Failures are reported in-band with `error: true`, like the search body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalPriceAnalysisResponse {
    #[serde(default)]
    pub error: bool,
    pub message: Option<String>,
    pub currency: Option<String>,
    #[serde(default)]
    pub price_metrics: Vec<ExternalPriceMetric>,
}

/// One point of the provider's fare distribution, passed through verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalPriceMetric {
    pub amount: Option<Amount>,
    #[serde(rename = "quartileRanking")]
    pub quartile_ranking: Option<String>,
}

impl ExternalPriceAnalysisResponse {
    /// Adapt to a [`PriceAnalysis`].
    ///
    /// Points with an unknown ranking or an unreadable amount are skipped.
    /// The currency defaults to USD when absent.
    #[must_use]
    pub fn into_analysis(self) -> PriceAnalysis {
        let metrics = self
            .price_metrics
            .into_iter()
            .filter_map(|m| {
                Some(PriceMetric {
                    ranking: QuartileRanking::from_label(m.quartile_ranking.as_deref()?)?,
                    amount: m.amount.as_ref().and_then(Amount::to_decimal)?,
                })
            })
            .collect();
        PriceAnalysis::new(self.currency.unwrap_or_else(|| "USD".to_string()), metrics)
    }
}
