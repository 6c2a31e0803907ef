//! CLI interface for codelb
//!
//! This module defines the command-line interface using clap. The board to
//! show is picked, in order of precedence, by an explicit `SOURCE`, by a
//! page link passed with `--location`, or by `--kind`.
//!
//! # Example
//!
//! ```bash
//! # Rank the default board by BM25
//! codelb
//!
//! # Instruct fine-tuning board, as a table
//! codelb --kind instruct --table
//!
//! # Same board, selected from a shared page link
//! codelb --location "https://leaderboard.tabbyml.com/?kind=instruct"
//!
//! # A local file, ranked by the Oracle condition, refreshed on change
//! codelb ./public/cceval.yml --sort-by Oracle --watch
//! ```

use clap::Parser;
use codelb_core::error::Result;
use codelb_loader::{Board, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, LoaderConfig, Source};
use std::time::Duration;

/// Rank code-completion models from a YAML leaderboard
#[derive(Parser, Debug, Clone)]
#[command(name = "codelb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Leaderboard file to load (URL or path); overrides --kind and --location
    pub source: Option<String>,

    /// Board to show (cceval, instruct, tabby, leaderboard)
    #[arg(long, short = 'k', default_value = "cceval")]
    pub kind: Board,

    /// Page link whose `kind` query parameter selects the board
    #[arg(long, conflicts_with = "kind")]
    pub location: Option<String>,

    /// Base URL or directory the board files are served from
    #[arg(long, env = "CODELB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Metric group to rank by
    #[arg(long, short = 's', default_value = "BM25")]
    pub sort_by: String,

    /// Output as JSON
    #[arg(long, conflicts_with = "table")]
    pub json: bool,

    /// Output as a table instead of bars
    #[arg(long)]
    pub table: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "CODELB_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Keep running and refresh the board periodically
    #[arg(long, short = 'w')]
    pub watch: bool,

    /// Refresh interval in seconds for watch mode
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Show informational and debug output (default is quiet mode with only warnings and errors)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// The board selected by `--location` or `--kind`
    pub fn board(&self) -> Board {
        self.location
            .as_deref()
            .map_or(self.kind, Board::from_location)
    }

    /// Loader settings from the command line and environment
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig::default()
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout))
    }

    /// Where to read the leaderboard from
    pub fn resolve_source(&self) -> Result<Source> {
        match &self.source {
            Some(arg) => Source::parse(arg),
            None => self.loader_config().source_for(self.board()),
        }
    }

    /// Title of the selected board; explicit sources have none
    pub fn title(&self) -> Option<&'static str> {
        match self.source {
            Some(_) => None,
            None => self.board().title(),
        }
    }
}
