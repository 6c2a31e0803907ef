//! Leaderboard fetching and parsing for codelb
//!
//! This crate resolves which board file to read, fetches it over HTTP or
//! from disk, and parses the YAML into the ordered core data model.

pub mod board;
pub mod loader;
pub mod source;

pub use board::Board;
pub use loader::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, LeaderboardLoader, LeaderboardSource, LoaderConfig,
    parse_leaderboard,
};
pub use source::Source;
