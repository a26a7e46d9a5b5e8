//! Re-export of foundational types from `skylane-types`.
// Consolidated re-exports so downstream crates can depend on `skylane-core` only

pub use skylane_types::{Capability, ConnectorKey, SkylaneError};

pub use skylane_types::{CacheConfig, SkylaneConfig};

pub use skylane_types::{
    AirportRecord, AirportSuggestion, FilterState, FlightRecord, HourBand, Leg, Source,
};

pub use skylane_types::{
    AirportQuery, FlightQuery, FlightQueryBuilder, LegRequest, SeatClass, TripType,
};

pub use skylane_types::{
    AirportSearchReport, FlightSearchReport, LegResults, PriceAnalysisReport,
};

pub use skylane_types::{PriceAnalysis, PriceMetric, QuartileRanking};

pub use rust_decimal::Decimal;
