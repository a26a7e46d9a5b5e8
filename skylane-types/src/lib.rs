//! Skylane-specific data transfer objects and configuration primitives.
//!
//! Everything here is plain data: the records produced by connectors, the
//! requests accepted by the orchestrator, the reports it returns, and the
//! serde-friendly configuration structs.
#![warn(missing_docs)]

mod analysis;
mod capability;
mod config;
mod connector;
mod error;
mod records;
mod reports;
mod requests;

pub use analysis::{PriceAnalysis, PriceMetric, QuartileRanking};
pub use capability::Capability;
pub use config::{CacheConfig, SkylaneConfig};
pub use connector::ConnectorKey;
pub use error::SkylaneError;
pub use records::{
    AirportRecord, AirportSuggestion, FilterState, FlightRecord, HourBand, Leg, Source,
};
pub use reports::{AirportSearchReport, FlightSearchReport, LegResults, PriceAnalysisReport};
pub use requests::{AirportQuery, FlightQuery, FlightQueryBuilder, LegRequest, SeatClass, TripType};
