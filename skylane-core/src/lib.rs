//! skylane-core
//!
//! Core types, traits, and pure algorithms shared across the skylane ecosystem.
//!
//! - `types`: re-exported records, requests, reports and configuration.
//! - `connector`: the `SkylaneConnector` trait and capability provider traits.
//! - `rank`: merge-and-rank of airport suggestions from the local and external sources.
//! - `filter`: the flight visibility predicate set (price ceiling, hour bands).
//! - `time`: lenient hour/duration parsing for source-defined time strings.
//! - `fares`: price-slider bounds, per-source price comparison and carrier names.
//!
//! `rank` and `filter` are total: malformed records degrade to "dropped" or
//! "hidden" rather than producing errors.
#![warn(missing_docs)]

/// Connector capability traits and the primary `SkylaneConnector` interface.
pub mod connector;
/// Price bounds, per-source comparisons, and carrier lookups.
pub mod fares;
/// Flight visibility predicates.
pub mod filter;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;
/// Airport merge-and-rank.
pub mod rank;
/// Lenient time parsing and display helpers.
pub mod time;
pub mod types;

pub use connector::SkylaneConnector;
pub use fares::{PriceBounds, PriceComparison, SourcePriceSummary, airline_name, compare_prices};
pub use filter::{is_visible, visibility, visible_count};
pub use middleware::Middleware;
pub use rank::{compare_city, merge_airports};
pub use time::{clock_time, format_duration, parse_hour};
pub use types::*;
