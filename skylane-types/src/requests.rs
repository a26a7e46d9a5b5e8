//! Validated request types accepted by the orchestrator and connectors.

use core::fmt;
use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Leg, SkylaneError};

/// Free-text airport/city lookup, as typed into an origin or destination box.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AirportQuery {
    text: String,
}

impl AirportQuery {
    /// Build a query from user input. Surrounding whitespace is dropped.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the input is blank.
    pub fn new(text: impl AsRef<str>) -> Result<Self, SkylaneError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SkylaneError::InvalidArg(
                "airport query must not be empty".to_string(),
            ));
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    /// The trimmed query text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters (not bytes).
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Cabin class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatClass {
    /// Economy cabin.
    #[default]
    Economy,
    /// Business cabin.
    Business,
    /// First cabin.
    First,
}

impl SeatClass {
    /// Lowercase form used by the local backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Business => "business",
            Self::First => "first",
        }
    }

    /// Uppercase travel-class code used by the external provider.
    #[must_use]
    pub const fn travel_class(self) -> &'static str {
        match self {
            Self::Economy => "ECONOMY",
            Self::Business => "BUSINESS",
            Self::First => "FIRST",
        }
    }
}

impl FromStr for SeatClass {
    type Err = SkylaneError;

    /// Unknown classes are rejected rather than silently mapped to economy.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(Self::Economy),
            "business" => Ok(Self::Business),
            "first" => Ok(Self::First),
            other => Err(SkylaneError::InvalidArg(format!("unknown seat class: {other}"))),
        }
    }
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-way or round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TripType {
    /// Outbound leg only.
    #[default]
    OneWay,
    /// Outbound plus return leg.
    RoundTrip,
}

impl TripType {
    /// Form-field code: `"1"` one-way, `"2"` round trip.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::OneWay => "1",
            Self::RoundTrip => "2",
        }
    }
}

impl FromStr for TripType {
    type Err = SkylaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::OneWay),
            "2" => Ok(Self::RoundTrip),
            other => Err(SkylaneError::InvalidArg(format!("unknown trip type: {other}"))),
        }
    }
}

/// A validated flight search covering one or two legs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightQuery {
    origin: String,
    destination: String,
    depart_date: NaiveDate,
    return_date: Option<NaiveDate>,
    seat_class: SeatClass,
    adults: u8,
}

impl FlightQuery {
    /// Start building a query for an origin/destination pair.
    pub fn builder(origin: impl Into<String>, destination: impl Into<String>) -> FlightQueryBuilder {
        FlightQueryBuilder {
            origin: origin.into(),
            destination: destination.into(),
            depart_date: None,
            return_date: None,
            trip_type: TripType::OneWay,
            seat_class: SeatClass::Economy,
            adults: 1,
        }
    }

    /// Origin airport code (uppercase).
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Destination airport code (uppercase).
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Outbound departure date.
    #[must_use]
    pub const fn depart_date(&self) -> NaiveDate {
        self.depart_date
    }

    /// Return departure date for round trips.
    #[must_use]
    pub const fn return_date(&self) -> Option<NaiveDate> {
        self.return_date
    }

    /// Cabin class.
    #[must_use]
    pub const fn seat_class(&self) -> SeatClass {
        self.seat_class
    }

    /// Number of adult passengers.
    #[must_use]
    pub const fn adults(&self) -> u8 {
        self.adults
    }

    /// Trip type implied by the presence of a return date.
    #[must_use]
    pub const fn trip_type(&self) -> TripType {
        if self.return_date.is_some() {
            TripType::RoundTrip
        } else {
            TripType::OneWay
        }
    }

    /// Per-leg requests. The return leg swaps origin and destination.
    #[must_use]
    pub fn legs(&self) -> Vec<LegRequest> {
        let mut out = vec![LegRequest {
            leg: Leg::Outbound,
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            date: self.depart_date,
            seat_class: self.seat_class,
            adults: self.adults,
        }];
        if let Some(date) = self.return_date {
            out.push(LegRequest {
                leg: Leg::Return,
                origin: self.destination.clone(),
                destination: self.origin.clone(),
                date,
                seat_class: self.seat_class,
                adults: self.adults,
            });
        }
        out
    }
}

/// Builder for [`FlightQuery`].
#[derive(Debug, Clone)]
pub struct FlightQueryBuilder {
    origin: String,
    destination: String,
    depart_date: Option<NaiveDate>,
    return_date: Option<NaiveDate>,
    trip_type: TripType,
    seat_class: SeatClass,
    adults: u8,
}

impl FlightQueryBuilder {
    /// Outbound departure date.
    #[must_use]
    pub const fn depart_date(mut self, date: NaiveDate) -> Self {
        self.depart_date = Some(date);
        self
    }

    /// Parse the outbound date from `YYYY-MM-DD`.
    ///
    /// # Errors
    /// Returns `InvalidArg` for malformed dates.
    pub fn depart_date_str(self, date: &str) -> Result<Self, SkylaneError> {
        let d = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")?;
        Ok(self.depart_date(d))
    }

    /// Return date; switches the trip type to round trip.
    #[must_use]
    pub const fn return_date(mut self, date: NaiveDate) -> Self {
        self.return_date = Some(date);
        self.trip_type = TripType::RoundTrip;
        self
    }

    /// Parse the return date from `YYYY-MM-DD`.
    ///
    /// # Errors
    /// Returns `InvalidArg` for malformed dates.
    pub fn return_date_str(self, date: &str) -> Result<Self, SkylaneError> {
        let d = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")?;
        Ok(self.return_date(d))
    }

    /// Explicit trip type. A one-way trip ignores any return date.
    #[must_use]
    pub const fn trip_type(mut self, trip_type: TripType) -> Self {
        self.trip_type = trip_type;
        self
    }

    /// Cabin class.
    #[must_use]
    pub const fn seat_class(mut self, seat_class: SeatClass) -> Self {
        self.seat_class = seat_class;
        self
    }

    /// Number of adult passengers.
    #[must_use]
    pub const fn adults(mut self, adults: u8) -> Self {
        self.adults = adults;
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    /// Returns `InvalidArg` when origin or destination is blank, they are
    /// equal, the departure date is missing, a round trip has no return
    /// date, the return date precedes departure, or `adults` is zero.
    pub fn build(self) -> Result<FlightQuery, SkylaneError> {
        let origin = self.origin.trim().to_uppercase();
        let destination = self.destination.trim().to_uppercase();
        if origin.is_empty() {
            return Err(SkylaneError::InvalidArg("flight origin is required".into()));
        }
        if destination.is_empty() {
            return Err(SkylaneError::InvalidArg(
                "flight destination is required".into(),
            ));
        }
        if origin == destination {
            return Err(SkylaneError::InvalidArg(
                "origin and destination must differ".into(),
            ));
        }
        let depart_date = self
            .depart_date
            .ok_or_else(|| SkylaneError::InvalidArg("departure date is required".into()))?;
        let return_date = match self.trip_type {
            TripType::OneWay => None,
            TripType::RoundTrip => {
                let r = self.return_date.ok_or_else(|| {
                    SkylaneError::InvalidArg("return date is required for round trips".into())
                })?;
                if r < depart_date {
                    return Err(SkylaneError::InvalidArg(
                        "return date precedes departure date".into(),
                    ));
                }
                Some(r)
            }
        };
        if self.adults == 0 {
            return Err(SkylaneError::InvalidArg(
                "at least one adult passenger is required".into(),
            ));
        }
        Ok(FlightQuery {
            origin,
            destination,
            depart_date,
            return_date,
            seat_class: self.seat_class,
            adults: self.adults,
        })
    }
}

/// Request for one leg, as handed to a flight provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegRequest {
    /// Which leg this is.
    pub leg: Leg,
    /// Departure airport code.
    pub origin: String,
    /// Arrival airport code.
    pub destination: String,
    /// Departure date.
    pub date: NaiveDate,
    /// Cabin class.
    pub seat_class: SeatClass,
    /// Number of adult passengers.
    pub adults: u8,
}
