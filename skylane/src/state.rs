//! Typed UI state for the search page and the store renderers subscribe to.
//!
//! Every update is a pure `SearchState -> SearchState` function that
//! recomputes the affected leg's visibility flags in one pass, so a
//! subscriber never observes a filter change without its visibility.

use serde::{Deserialize, Serialize};
use skylane_core::{
    AirportRecord, AirportSearchReport, Decimal, FilterState, FlightRecord, FlightSearchReport,
    HourBand, Leg, PriceBounds, SkylaneError, visibility,
};
use tokio::sync::watch;

/// Which time-of-day control a band applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandKind {
    /// Departure time.
    Departure,
    /// Arrival time.
    Arrival,
}

/// Flights and filter controls for one leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegState {
    /// Offers in display order.
    pub flights: Vec<FlightRecord>,
    /// Current control values.
    pub filter: FilterState,
    /// Range of the price slider.
    pub bounds: PriceBounds,
    /// Visibility flag per flight, index-aligned with `flights`.
    pub visible: Vec<bool>,
}

impl Default for LegState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl LegState {
    /// Fresh leg state: slider spans every fare, ceiling at the slider max, no bands.
    #[must_use]
    pub fn new(flights: Vec<FlightRecord>) -> Self {
        let bounds = PriceBounds::from_flights(&flights);
        let filter = FilterState::with_ceiling(bounds.max);
        let visible = visibility(&flights, &filter);
        Self {
            flights,
            filter,
            bounds,
            visible,
        }
    }

    /// Flights currently passing the filter.
    pub fn visible_flights(&self) -> impl Iterator<Item = &FlightRecord> {
        self.flights
            .iter()
            .zip(&self.visible)
            .filter_map(|(f, v)| v.then_some(f))
    }

    /// Number of flights currently passing the filter.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    fn refilter(mut self, filter: FilterState) -> Self {
        self.visible = visibility(&self.flights, &filter);
        self.filter = filter;
        self
    }

    fn reset(self) -> Self {
        let filter = FilterState::with_ceiling(self.bounds.max);
        self.refilter(filter)
    }
}

/// Everything the search page renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Ranked airport suggestions for the current input.
    pub airports: Vec<AirportRecord>,
    /// Outbound leg.
    pub outbound: LegState,
    /// Return leg, present for round trips.
    pub inbound: Option<LegState>,
    /// Warnings from the most recent airport lookup.
    pub airport_warnings: Vec<SkylaneError>,
    /// Warnings from the most recent flight search.
    pub flight_warnings: Vec<SkylaneError>,
}

impl SearchState {
    /// Replace the airport suggestions.
    #[must_use]
    pub fn with_airports(mut self, report: AirportSearchReport) -> Self {
        self.airports = report.airports;
        self.airport_warnings = report.warnings;
        self
    }

    /// Replace both legs with new search results; filters start from scratch.
    #[must_use]
    pub fn with_flights(mut self, report: FlightSearchReport) -> Self {
        self.outbound = LegState::new(report.outbound.flights);
        self.inbound = report.inbound.map(|leg| LegState::new(leg.flights));
        self.flight_warnings = report.warnings;
        self
    }

    /// Move a leg's price slider. Values below zero clamp to zero.
    #[must_use]
    pub fn set_price_ceiling(self, leg: Leg, ceiling: Decimal) -> Self {
        self.map_leg(leg, |s| {
            let filter = FilterState {
                price_ceiling: ceiling.max(Decimal::ZERO),
                ..s.filter
            };
            s.refilter(filter)
        })
    }

    /// Activate a time-of-day band, replacing any band of the same kind.
    #[must_use]
    pub fn select_band(self, leg: Leg, kind: BandKind, band: HourBand) -> Self {
        self.map_leg(leg, |s| {
            let filter = with_band(s.filter, kind, Some(band));
            s.refilter(filter)
        })
    }

    /// Deactivate the band of `kind`.
    #[must_use]
    pub fn clear_band(self, leg: Leg, kind: BandKind) -> Self {
        self.map_leg(leg, |s| {
            let filter = with_band(s.filter, kind, None);
            s.refilter(filter)
        })
    }

    /// Ceiling back to the slider max, both bands cleared.
    #[must_use]
    pub fn reset_filters(self, leg: Leg) -> Self {
        self.map_leg(leg, LegState::reset)
    }

    /// State of `leg`, if present.
    #[must_use]
    pub const fn leg(&self, leg: Leg) -> Option<&LegState> {
        match leg {
            Leg::Outbound => Some(&self.outbound),
            Leg::Return => self.inbound.as_ref(),
        }
    }

    // Updates addressed to an absent return leg are no-ops.
    fn map_leg(mut self, leg: Leg, f: impl FnOnce(LegState) -> LegState) -> Self {
        match leg {
            Leg::Outbound => self.outbound = f(std::mem::take(&mut self.outbound)),
            Leg::Return => self.inbound = self.inbound.take().map(f),
        }
        self
    }
}

const fn with_band(mut filter: FilterState, kind: BandKind, band: Option<HourBand>) -> FilterState {
    match kind {
        BandKind::Departure => filter.departure_band = band,
        BandKind::Arrival => filter.arrival_band = band,
    }
    filter
}

/// Shared holder of the current [`SearchState`].
///
/// Renderers call [`StateStore::subscribe`] and re-render on change.
#[derive(Debug)]
pub struct StateStore {
    tx: watch::Sender<SearchState>,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(SearchState::default())
    }
}

impl StateStore {
    /// Create a store holding `initial`.
    #[must_use]
    pub fn new(initial: SearchState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Receiver that observes every published state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.tx.subscribe()
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SearchState {
        self.tx.borrow().clone()
    }

    /// Apply a pure update and notify subscribers.
    pub fn update(&self, f: impl FnOnce(SearchState) -> SearchState) {
        self.tx.send_modify(|state| {
            let current = std::mem::take(state);
            *state = f(current);
        });
    }

    /// Apply an update only when `f` produces a new state; subscribers are
    /// notified only in that case. Returns whether the state was replaced.
    pub fn update_if(&self, f: impl FnOnce(&SearchState) -> Option<SearchState>) -> bool {
        self.tx.send_if_modified(|state| match f(state) {
            Some(next) => {
                *state = next;
                true
            }
            None => false,
        })
    }
}
