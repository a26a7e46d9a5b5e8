//! Records exchanged between connectors, the ranking/filtering core, and renderers.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::SkylaneError;

/// Origin of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// The local backend (site database).
    #[default]
    Local,
    /// The external flight-data provider.
    External,
}

impl Source {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::External => "external",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One directional segment of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leg {
    /// Origin to destination.
    Outbound,
    /// Destination back to origin (round trips only).
    Return,
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Outbound => "outbound",
            Self::Return => "return",
        })
    }
}

/// Airport suggestion in the loose shape returned by search endpoints.
///
/// Local and external endpoints disagree on which fields are present: the
/// external provider may omit `city` and carry the place in `name` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportSuggestion {
    /// IATA code as returned (any case, possibly missing).
    #[serde(default)]
    pub code: Option<String>,
    /// City name.
    #[serde(default)]
    pub city: Option<String>,
    /// Airport or place name.
    #[serde(default)]
    pub name: Option<String>,
    /// Country name.
    #[serde(default)]
    pub country: Option<String>,
    /// Location sub-type reported by the provider (e.g. "AIRPORT", "CITY").
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Airport entry in the common record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportRecord {
    /// IATA code. Uppercased once the record has passed through a merge.
    pub code: String,
    /// City name used for display and ordering.
    pub city: String,
    /// Country name.
    pub country: String,
    /// Which source supplied the record.
    pub source: Source,
}

impl AirportRecord {
    /// Build a record from its parts.
    pub fn new(
        code: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        source: Source,
    ) -> Self {
        Self {
            code: code.into(),
            city: city.into(),
            country: country.into(),
            source,
        }
    }

    /// Adapt a loosely-shaped suggestion into the common shape.
    ///
    /// `city` falls back to `name` when absent or blank. A missing code is
    /// carried through as an empty string; the merge step drops it.
    #[must_use]
    pub fn from_suggestion(s: AirportSuggestion, source: Source) -> Self {
        let city = s
            .city
            .filter(|c| !c.trim().is_empty())
            .or(s.name)
            .unwrap_or_default();
        Self {
            code: s.code.unwrap_or_default(),
            city,
            country: s.country.unwrap_or_default(),
            source,
        }
    }

    /// Identity key: trimmed, uppercased code, or `None` when the code is empty.
    #[must_use]
    pub fn key(&self) -> Option<String> {
        let trimmed = self.code.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_uppercase())
    }
}

/// A single flight offer for one leg in the common record shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Provider offer identifier, if any.
    pub offer_id: Option<String>,
    /// Carrier IATA code.
    pub airline_code: Option<String>,
    /// Carrier display name.
    pub airline: Option<String>,
    /// Flight number.
    pub flight_number: Option<String>,
    /// Departure airport code.
    pub origin: String,
    /// Arrival airport code.
    pub destination: String,
    /// Raw departure time as delivered by the source.
    pub departure_time: Option<String>,
    /// Raw arrival time as delivered by the source.
    pub arrival_time: Option<String>,
    /// Departure hour in `[0, 23]`, `None` when the time could not be parsed.
    pub departure_hour: Option<u8>,
    /// Arrival hour in `[0, 23]`, `None` when the time could not be parsed.
    pub arrival_hour: Option<u8>,
    /// Raw duration (ISO 8601 `PT2H30M` or `HH:MM`).
    pub duration: Option<String>,
    /// Number of intermediate stops.
    pub stops: u8,
    /// Total fare. Never negative.
    pub price: Decimal,
    /// Fare currency code.
    pub currency: Option<String>,
    /// Seats still bookable, when reported.
    pub available_seats: Option<u32>,
    /// Which source supplied the record.
    pub source: Source,
}

impl FlightRecord {
    /// Whether the flight has no intermediate stops.
    #[must_use]
    pub const fn is_direct(&self) -> bool {
        self.stops == 0
    }
}

/// Half-open hour interval `[start, end)` used to bucket flights by time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHourBand")]
pub struct HourBand {
    start: u8,
    end: u8,
}

#[derive(Deserialize)]
struct RawHourBand {
    start: u8,
    end: u8,
}

impl TryFrom<RawHourBand> for HourBand {
    type Error = SkylaneError;

    fn try_from(raw: RawHourBand) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl HourBand {
    /// 00:00–06:00.
    pub const EARLY: Self = Self { start: 0, end: 6 };
    /// 06:00–12:00.
    pub const MORNING: Self = Self { start: 6, end: 12 };
    /// 12:00–18:00.
    pub const AFTERNOON: Self = Self { start: 12, end: 18 };
    /// 18:00–24:00.
    pub const EVENING: Self = Self { start: 18, end: 24 };

    /// The four slot buckets offered by the time-of-day controls.
    pub const PRESETS: [Self; 4] = [Self::EARLY, Self::MORNING, Self::AFTERNOON, Self::EVENING];

    /// Build a band.
    ///
    /// # Errors
    /// Returns `InvalidArg` unless `start < end <= 24`.
    pub fn new(start: u8, end: u8) -> Result<Self, SkylaneError> {
        if start >= end || end > 24 {
            return Err(SkylaneError::InvalidArg(format!(
                "hour band must satisfy start < end <= 24, got [{start}, {end})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn start(self) -> u8 {
        self.start
    }

    /// Exclusive upper bound.
    #[must_use]
    pub const fn end(self) -> u8 {
        self.end
    }

    /// Whether `hour` falls inside `[start, end)`.
    #[must_use]
    pub const fn contains(self, hour: u8) -> bool {
        self.start <= hour && hour < self.end
    }
}

impl fmt::Display for HourBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.start, self.end)
    }
}

/// Filter controls for one leg's flight list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Inclusive maximum price.
    pub price_ceiling: Decimal,
    /// Active departure-time band, if any.
    pub departure_band: Option<HourBand>,
    /// Active arrival-time band, if any.
    pub arrival_band: Option<HourBand>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_ceiling(Decimal::MAX)
    }
}

impl FilterState {
    /// Filter with only a price ceiling.
    #[must_use]
    pub const fn with_ceiling(price_ceiling: Decimal) -> Self {
        Self {
            price_ceiling,
            departure_band: None,
            arrival_band: None,
        }
    }

    /// Whether any time-of-day constraint is active.
    #[must_use]
    pub const fn has_time_filter(&self) -> bool {
        self.departure_band.is_some() || self.arrival_band.is_some()
    }
}
