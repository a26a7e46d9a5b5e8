//! Skylane orchestrates flight-search requests across a local backend and an
//! external flight-data provider.
//!
//! Overview
//! - Queries both sources concurrently through connectors implementing the
//!   `skylane_core` contracts, each call bounded by a per-provider timeout.
//! - Merges airport suggestions with `merge_airports`: local results first,
//!   duplicate codes resolved in favor of the local source, each group
//!   ordered by city.
//! - Returns flight offers per leg, stamped with their source, for
//!   client-side filtering by price ceiling and time-of-day bands.
//! - Fetches fare quartiles for a route and date from the first source that
//!   offers price analysis, falling back in priority order.
//! - A failing source degrades to empty and is reported in `warnings`; only
//!   invalid requests or a missing capability produce an `Err`.
//!
//! UI state
//! - [`state::SearchState`] holds typed results and exposes pure update
//!   functions; [`state::StateStore`] publishes it over a `tokio::sync::watch`
//!   channel for renderers.
//! - [`suggest::Suggester`] turns keystrokes into lookups and publishes only the
//!   newest response (last-results-win).
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use skylane::{AirportQuery, FlightQuery, Skylane};
//!
//! let skylane = Skylane::builder()
//!     .local(local_connector)
//!     .external(external_connector)
//!     .build()?;
//!
//! let airports = skylane.search_airports(&AirportQuery::new("new yo")?).await?;
//! let flights = skylane
//!     .search_flights(
//!         &FlightQuery::builder("JFK", "LHR")
//!             .depart_date_str("2025-06-01")?
//!             .return_date_str("2025-06-08")?
//!             .build()?,
//!     )
//!     .await?;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;
/// Last-results-win ticketing.
pub mod sequencer;
/// Search page state and its subscribable store.
pub mod state;
/// Keystroke-driven airport suggestions.
pub mod suggest;

pub use core::{Skylane, SkylaneBuilder, tag_err};
pub use sequencer::{Ticket, TicketSequencer};
pub use state::{BandKind, LegState, SearchState, StateStore};
pub use suggest::Suggester;

pub use skylane_middleware::{CacheMiddleware, ConnectorBuilder};

// Re-export core types for convenience
pub use skylane_core::{
    AirportQuery, AirportRecord, AirportSearchReport, AirportSuggestion, CacheConfig, Capability,
    Decimal, FilterState, FlightQuery, FlightQueryBuilder, FlightRecord, FlightSearchReport,
    HourBand, Leg, LegRequest, LegResults, PriceAnalysis, PriceAnalysisReport, PriceBounds,
    PriceComparison, PriceMetric, QuartileRanking, SeatClass, SkylaneConfig, SkylaneConnector,
    SkylaneError, Source, SourcePriceSummary, TripType,
    airline_name, clock_time, compare_prices, format_duration, is_visible, merge_airports,
    parse_hour, visibility, visible_count,
};
