//! codelb - Rank code-completion models from a YAML leaderboard
//!
//! This library provides functionality to:
//! - Fetch a leaderboard file over HTTP or from disk
//! - Derive per-group averages and rank models by one group
//! - Render the ranking as bar rows, a table, or JSON
//! - Keep the ranking fresh in a watch loop
//!
//! # Examples
//!
//! ```no_run
//! use codelb::app::BoardApp;
//! use codelb_core::Ranker;
//! use codelb_loader::{Board, LeaderboardLoader, LoaderConfig};
//! use codelb_terminal::get_formatter;
//!
//! #[tokio::main]
//! async fn main() -> codelb::Result<()> {
//!     let config = LoaderConfig::default();
//!     let source = config.source_for(Board::Cceval)?;
//!     let loader = LeaderboardLoader::new(source, config)?;
//!
//!     let mut app = BoardApp::new(loader, Ranker::default()).with_title(Board::Cceval.title());
//!     app.refresh().await;
//!
//!     println!("{}", app.render(get_formatter(false, false, true).as_ref()));
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod live_monitor;

// Re-export commonly used types
pub use codelb_core::error::{LeaderboardError, Result};
pub use codelb_core::types::{Leaderboard, Metric, Metrics, ModelItem, ModelName};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
