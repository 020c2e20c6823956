//! @ai:module:intent Number set statistics and aggregation
//! @ai:module:layer domain
//! @ai:module:public_api NumberSet, SessionStats, Parity, StatsAggregator, compute_stats

pub mod aggregator;
pub mod types;

pub use aggregator::{compute_stats, StatsAggregator, StatsAggregatorTrait};
pub use types::{NumberSet, Parity, SessionStats, SET_SIZE};
