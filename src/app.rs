//! Board pipeline: fetch, rank, render
//!
//! `BoardApp` owns the ranked list shown to the user. Every refresh fetches
//! the source again and replaces the list wholesale. A failed fetch or parse
//! leaves the list empty: the failure is logged at debug level and never
//! retried or reported as an error.

use codelb_core::ranking::Ranker;
use codelb_core::types::ModelItem;
use codelb_loader::LeaderboardSource;
use codelb_terminal::output::{BoardView, OutputFormatter};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info};

/// One board and its current ranking
pub struct BoardApp<S> {
    source: S,
    ranker: Ranker,
    title: Option<String>,
    items: Vec<ModelItem>,
    show_progress: bool,
}

impl<S: LeaderboardSource> BoardApp<S> {
    /// Create an app with an empty ranking
    pub fn new(source: S, ranker: Ranker) -> Self {
        Self {
            source,
            ranker,
            title: None,
            items: Vec::new(),
            show_progress: false,
        }
    }

    /// Set the title shown above the ranking
    pub fn with_title(mut self, title: Option<impl Into<String>>) -> Self {
        self.title = title.map(Into::into);
        self
    }

    /// Show a spinner while fetching
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn ranker(&self) -> &Ranker {
        &self.ranker
    }

    /// The current ranking
    pub fn items(&self) -> &[ModelItem] {
        &self.items
    }

    /// Fetch the source again and replace the ranking
    pub async fn refresh(&mut self) -> &[ModelItem] {
        let progress = if self.show_progress {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) =
                ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")
            {
                pb.set_style(style);
            }
            pb.set_message(format!("Fetching {}", self.source.location()));
            pb.enable_steady_tick(Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let loaded = self.source.load().await;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        self.items = match loaded {
            Ok(board) => {
                let items = self.ranker.rank(&board);
                info!(
                    "Ranked {} models by {} average",
                    items.len(),
                    self.ranker.sort_by()
                );
                items
            }
            Err(e) => {
                debug!(
                    "Failed to load leaderboard from {}: {}",
                    self.source.location(),
                    e
                );
                Vec::new()
            }
        };

        &self.items
    }

    /// View of the current ranking for a formatter
    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(self.title.as_deref(), self.ranker.sort_by(), &self.items)
    }

    /// Render the current ranking
    pub fn render(&self, formatter: &dyn OutputFormatter) -> String {
        formatter.format_board(&self.view())
    }
}
