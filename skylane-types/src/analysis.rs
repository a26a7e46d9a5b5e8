//! Historical fare metrics for a route and date.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Position of a fare within the historical distribution for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuartileRanking {
    /// Lowest observed fare.
    Minimum,
    /// First quartile.
    First,
    /// Median.
    Medium,
    /// Third quartile.
    Third,
    /// Highest observed fare.
    Maximum,
}

impl QuartileRanking {
    /// Parse the provider label (`MINIMUM`, `FIRST`, `MEDIUM`, `THIRD`,
    /// `MAXIMUM`), ignoring case and padding.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "MINIMUM" => Some(Self::Minimum),
            "FIRST" => Some(Self::First),
            "MEDIUM" => Some(Self::Medium),
            "THIRD" => Some(Self::Third),
            "MAXIMUM" => Some(Self::Maximum),
            _ => None,
        }
    }
}

/// One point of the fare distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceMetric {
    /// Which quartile boundary this amount marks.
    pub ranking: QuartileRanking,
    /// Fare at that boundary.
    pub amount: Decimal,
}

/// Fare distribution for one route and departure date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceAnalysis {
    /// ISO 4217 currency of every amount.
    pub currency: String,
    /// Distribution points ordered from `Minimum` to `Maximum`.
    pub metrics: Vec<PriceMetric>,
}

impl PriceAnalysis {
    /// Build an analysis, sorting `metrics` by ranking and keeping the first
    /// amount reported for each ranking.
    #[must_use]
    pub fn new(currency: impl Into<String>, mut metrics: Vec<PriceMetric>) -> Self {
        metrics.sort_by_key(|m| m.ranking);
        metrics.dedup_by_key(|m| m.ranking);
        Self {
            currency: currency.into(),
            metrics,
        }
    }

    /// Amount reported for `ranking`, if any.
    #[must_use]
    pub fn metric(&self, ranking: QuartileRanking) -> Option<Decimal> {
        self.metrics
            .iter()
            .find(|m| m.ranking == ranking)
            .map(|m| m.amount)
    }

    /// Highest distribution point not above `price`.
    ///
    /// `None` when `price` is below every reported point.
    #[must_use]
    pub fn position_of(&self, price: Decimal) -> Option<QuartileRanking> {
        self.metrics
            .iter()
            .rev()
            .find(|m| m.amount <= price)
            .map(|m| m.ranking)
    }
}
