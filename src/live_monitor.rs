//! Watch mode for codelb
//!
//! Re-fetches the board at a fixed interval and, for local files, whenever
//! the file changes on disk. Refreshes run one at a time inside a single
//! select loop, so a slow fetch is always finished before the next one
//! starts and two fetches never overlap. Ctrl+C is honoured while a fetch
//! is in flight; the pending fetch is dropped.

use crate::app::BoardApp;
use chrono::Local;
use codelb_core::error::{LeaderboardError, Result};
use codelb_loader::LeaderboardSource;
use codelb_terminal::output::OutputFormatter;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::{
    sync::mpsc,
    time::{MissedTickBehavior, interval},
};
use tracing::{debug, info};

/// Wait after a change event so the writer can finish
const CHANGE_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Live monitoring state
pub struct LiveMonitor<S> {
    app: BoardApp<S>,
    formatter: Box<dyn OutputFormatter>,
    json_output: bool,
    interval_secs: u64,
}

impl<S: LeaderboardSource> LiveMonitor<S> {
    /// Create a new live monitor
    pub fn new(
        app: BoardApp<S>,
        formatter: Box<dyn OutputFormatter>,
        json_output: bool,
        interval_secs: u64,
    ) -> Self {
        Self {
            app,
            formatter,
            json_output,
            interval_secs,
        }
    }

    /// Run until Ctrl+C
    pub async fn run(mut self) -> Result<()> {
        let (tx, mut rx) = mpsc::channel(10);

        // Dropping the watcher stops it; keep it for the whole loop.
        let _watcher = match self.app.source().watch_path() {
            Some(path) => Some(watch_file(path, tx)?),
            None => {
                drop(tx);
                None
            }
        };

        let mut ticker = interval(Duration::from_secs(self.interval_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately
        ticker.tick().await;

        if until_ctrl_c(self.refresh_display()).await.is_none() {
            println!("\nExiting watch mode...");
            return Ok(());
        }

        loop {
            let outcome = tokio::select! {
                _ = ticker.tick() => until_ctrl_c(self.refresh_display()).await,
                Some(()) = rx.recv() => {
                    until_ctrl_c(async {
                        tokio::time::sleep(CHANGE_SETTLE_DELAY).await;
                        while rx.try_recv().is_ok() {}
                        debug!("Leaderboard file changed, refreshing");
                        self.refresh_display().await;
                        ticker.reset();
                    })
                    .await
                }
                _ = tokio::signal::ctrl_c() => None,
            };

            if outcome.is_none() {
                println!("\nExiting watch mode...");
                break;
            }
        }

        Ok(())
    }

    /// Fetch, rank, and print the board
    async fn refresh_display(&mut self) {
        if !self.json_output {
            print!("\x1B[2J\x1B[1;1H"); // Clear screen and move cursor to top-left
            println!(
                "Watching {} - Last updated: {}",
                self.app.source().location(),
                Local::now().format("%Y-%m-%d %H:%M:%S")
            );
            println!(
                "Refresh interval: {}s | Press Ctrl+C to exit",
                self.interval_secs
            );
            println!("{}", "-".repeat(80));
        }

        self.app.refresh().await;
        println!("{}", self.app.render(self.formatter.as_ref()));
    }
}

/// Run `task` to completion unless Ctrl+C arrives first
///
/// A slow fetch can take up to the request timeout; Ctrl+C abandons it
/// instead of waiting.
async fn until_ctrl_c<F: Future>(task: F) -> Option<F::Output> {
    tokio::select! {
        output = task => Some(output),
        _ = tokio::signal::ctrl_c() => None,
    }
}

/// Watch a single file for changes
///
/// The parent directory is watched rather than the file itself so that
/// editors replacing the file through a rename are still noticed.
fn watch_file(path: &Path, tx: mpsc::Sender<()>) -> Result<RecommendedWatcher> {
    let target: PathBuf = path.to_path_buf();
    let file_name = target.file_name().map(|name| name.to_os_string());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut watcher = RecommendedWatcher::new(
        move |result: notify::Result<Event>| {
            if let Ok(event) = result
                && matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                )
                && event
                    .paths
                    .iter()
                    .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name)
            {
                // A full channel already has a refresh pending.
                let _ = tx.try_send(());
            }
        },
        Config::default(),
    )
    .map_err(|e| {
        LeaderboardError::Io(std::io::Error::other(format!(
            "Failed to create file watcher: {e}"
        )))
    })?;

    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .map_err(|e| {
            LeaderboardError::Io(std::io::Error::other(format!(
                "Failed to watch directory {}: {e}",
                dir.display()
            )))
        })?;

    info!("Watching {} for changes", target.display());
    Ok(watcher)
}
