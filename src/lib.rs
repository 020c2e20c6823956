//! @ai:module:intent Number processing terminal library
//! @ai:module:layer application
//! @ai:module:public_api app, config, display, error, history, input, stats
//!
//! # numproc
//!
//! Collects sets of five integers, reports their sum and even/odd
//! breakdown, and keeps an in-memory history of every analysis.
//!
//! ## Example
//!
//! ```rust
//! use numproc::{compute_stats, HistoryStore, NumberSet};
//!
//! let stats = compute_stats(&NumberSet::new([1, 2, 3, 4, -4]));
//! assert_eq!(stats.total_sum, 6);
//! assert_eq!(stats.even_count, 3);
//!
//! let mut history = HistoryStore::new();
//! history.record(stats.clone());
//! assert_eq!(history.list_all(), &[stats]);
//! ```

pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod history;
pub mod input;
pub mod stats;

pub use app::Session;
pub use config::{AppConfig, DisplayConfig, OutputFormat, Pace, PacingConfig};
pub use display::{Presenter, TerminalPresenter};
pub use error::{Error, Result};
pub use history::HistoryStore;
pub use input::{collect_number_set, parse_integer, LineReader, MenuChoice, NextStep};
pub use stats::{
    compute_stats, NumberSet, Parity, SessionStats, StatsAggregator, StatsAggregatorTrait,
};
