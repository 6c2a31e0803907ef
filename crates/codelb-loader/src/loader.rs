//! Leaderboard loader
//!
//! Fetches a leaderboard file as text (HTTP or local file) and parses it
//! into an ordered [`Leaderboard`]. Every call fetches afresh; there is no
//! cache and no retry.
//!
//! # Examples
//!
//! ```no_run
//! use codelb_loader::{Board, LeaderboardLoader, LeaderboardSource, LoaderConfig};
//!
//! # async fn example() -> codelb_core::Result<()> {
//! let config = LoaderConfig::default();
//! let source = config.source_for(Board::Instruct)?;
//! let loader = LeaderboardLoader::new(source, config)?;
//!
//! let board = loader.load().await?;
//! println!("{} models", board.len());
//! # Ok(())
//! # }
//! ```

use crate::board::Board;
use crate::source::Source;
use async_trait::async_trait;
use codelb_core::error::{LeaderboardError, Result};
use codelb_core::types::Leaderboard;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Site the published boards are served from
pub const DEFAULT_BASE_URL: &str = "https://leaderboard.tabbyml.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Anything that can produce a fresh leaderboard on demand
///
/// The binary's refresh loop is written against this trait so it can run on
/// remote files, local files, or fixed data in tests.
#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    /// Fetch and parse the current leaderboard
    async fn load(&self) -> Result<Leaderboard>;

    /// Human readable location, used in logs and headers
    fn location(&self) -> String;

    /// Local file to watch for changes, if any
    fn watch_path(&self) -> Option<&Path> {
        None
    }
}

/// Loader settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Base URL (or directory) the well-known board files live under
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl LoaderConfig {
    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Source of a well-known board under the configured base
    pub fn source_for(&self, board: Board) -> Result<Source> {
        if self.base_url.trim().is_empty() {
            return Err(LeaderboardError::Config("base URL is empty".to_string()));
        }
        Source::parse(&board.location(&self.base_url))
    }
}

/// Fetches and parses one leaderboard source
pub struct LeaderboardLoader {
    source: Source,
    client: reqwest::Client,
}

impl LeaderboardLoader {
    /// Create a loader for a source
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(source: Source, config: LoaderConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { source, client })
    }

    /// The source this loader reads
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Retrieve the raw document text
    pub async fn fetch_text(&self) -> Result<String> {
        match &self.source {
            Source::Url(url) => {
                debug!("Fetching leaderboard from {}", url);
                let response = self.client.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LeaderboardError::HttpStatus {
                        url: url.clone(),
                        status: status.as_u16(),
                    });
                }
                Ok(response.text().await?)
            }
            Source::File(path) => {
                debug!("Reading leaderboard from {}", path.display());
                Ok(tokio::fs::read_to_string(path).await?)
            }
        }
    }
}

#[async_trait]
impl LeaderboardSource for LeaderboardLoader {
    async fn load(&self) -> Result<Leaderboard> {
        let text = self.fetch_text().await?;
        let board = parse_leaderboard(&text)?;
        info!("Loaded {} models from {}", board.len(), self.source);
        Ok(board)
    }

    fn location(&self) -> String {
        self.source.to_string()
    }

    fn watch_path(&self) -> Option<&Path> {
        self.source.path()
    }
}

/// Parse leaderboard YAML
///
/// A document holding nothing but whitespace, comments, or a document
/// marker is an empty board.
///
/// # Examples
/// ```
/// use codelb_loader::parse_leaderboard;
///
/// let board = parse_leaderboard("A:\n  BM25: { Python: 30, Java: 50 }\n").unwrap();
/// assert_eq!(board.get("A").unwrap().average("BM25"), Some(40.0));
///
/// assert!(parse_leaderboard("# nothing yet\n").unwrap().is_empty());
/// ```
pub fn parse_leaderboard(text: &str) -> Result<Leaderboard> {
    let blank = text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    });
    if blank {
        return Ok(Leaderboard::new());
    }
    Ok(serde_yaml::from_str(text)?)
}
