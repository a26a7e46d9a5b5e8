//! Fare helpers: price-slider bounds, per-source price summaries, and
//! carrier display names.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{FlightRecord, Source};

const SLIDER_STEP: Decimal = Decimal::ONE_HUNDRED;
const DEFAULT_SLIDER_MAX: Decimal = Decimal::ONE_THOUSAND;

/// Range offered by the price slider for one leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBounds {
    /// Lowest fare rounded down to a multiple of 100.
    pub min: Decimal,
    /// Highest fare rounded up to a multiple of 100.
    pub max: Decimal,
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: DEFAULT_SLIDER_MAX,
        }
    }
}

impl PriceBounds {
    /// Slider bounds covering every fare in `flights`.
    ///
    /// An empty list yields the default `0..=1000` range. A maximum too
    /// large to round up saturates at `Decimal::MAX`.
    #[must_use]
    pub fn from_flights(flights: &[FlightRecord]) -> Self {
        let mut prices = flights.iter().map(|f| f.price);
        let Some(first) = prices.next() else {
            return Self::default();
        };
        let (lo, hi) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Self {
            min: (lo / SLIDER_STEP)
                .floor()
                .checked_mul(SLIDER_STEP)
                .unwrap_or(Decimal::MIN),
            max: (hi / SLIDER_STEP)
                .ceil()
                .checked_mul(SLIDER_STEP)
                .unwrap_or(Decimal::MAX),
        }
    }
}

/// Price statistics for the flights of one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePriceSummary {
    /// Number of offers.
    pub count: usize,
    /// Cheapest fare, `None` when there are no offers.
    pub min: Option<Decimal>,
    /// Most expensive fare.
    pub max: Option<Decimal>,
    /// Mean fare rounded to two decimal places.
    pub avg: Option<Decimal>,
}

impl SourcePriceSummary {
    fn of<'a>(flights: impl Iterator<Item = &'a FlightRecord>) -> Self {
        let prices: Vec<Decimal> = flights.map(|f| f.price).collect();
        let count = prices.len();
        let min = prices.iter().copied().min();
        let max = prices.iter().copied().max();
        let avg = (count > 0).then(|| mean(&prices).round_dp(2));
        Self {
            count,
            min,
            max,
            avg,
        }
    }
}

// Falls back to summing per-item shares when the plain total overflows.
fn mean(prices: &[Decimal]) -> Decimal {
    let n = Decimal::from(prices.len());
    prices
        .iter()
        .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(*p))
        .map_or_else(
            || prices.iter().map(|p| *p / n).sum(),
            |total| total / n,
        )
}

/// Side-by-side price statistics for local and external offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceComparison {
    /// Offers tagged `Source::Local`.
    pub local: SourcePriceSummary,
    /// Offers tagged `Source::External`.
    pub external: SourcePriceSummary,
}

impl PriceComparison {
    /// Difference between the cheapest external and cheapest local fare.
    ///
    /// Negative when the external provider is cheaper; `None` unless both
    /// sources have offers.
    #[must_use]
    pub fn cheapest_delta(&self) -> Option<Decimal> {
        self.external.min?.checked_sub(self.local.min?)
    }
}

/// Summarize prices per source for a mixed flight list.
#[must_use]
pub fn compare_prices(flights: &[FlightRecord]) -> PriceComparison {
    PriceComparison {
        local: SourcePriceSummary::of(flights.iter().filter(|f| f.source == Source::Local)),
        external: SourcePriceSummary::of(flights.iter().filter(|f| f.source == Source::External)),
    }
}

/// Display name for a carrier code; unknown codes are returned as given.
#[must_use]
pub fn airline_name(code: &str) -> String {
    let name = match code.trim().to_ascii_uppercase().as_str() {
        "AA" => "American Airlines",
        "DL" => "Delta Air Lines",
        "UA" => "United Airlines",
        "SW" => "Southwest Airlines",
        "BA" => "British Airways",
        "LH" => "Lufthansa",
        "AF" => "Air France",
        "KL" => "KLM",
        "TK" => "Turkish Airlines",
        "EK" => "Emirates",
        "QR" => "Qatar Airways",
        "SQ" => "Singapore Airlines",
        _ => return code.to_string(),
    };
    name.to_string()
}
