//! Core types, ranking, and error handling for codelb
//!
//! This crate holds the leaderboard data model, the ordered map it is
//! built on, the averaging and ranking rules, and the shared error type
//! used by the loader, terminal, and binary crates.

pub mod error;
pub mod ordered_map;
pub mod ranking;
pub mod types;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{LeaderboardError, Result};
pub use ranking::{Ranker, rank_by};
pub use types::{KnownGroup, Leaderboard, Metric, Metrics, ModelItem, ModelName};
