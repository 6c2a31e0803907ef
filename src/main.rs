//! codelb - Rank code-completion models from a YAML leaderboard

use clap::Parser;
use codelb::{app::BoardApp, cli::Cli, live_monitor::LiveMonitor};
use codelb_core::{Ranker, Result};
use codelb_loader::LeaderboardLoader;
use codelb_terminal::{color_enabled, get_formatter};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose debug output `--verbose` turns on
const VERBOSE_FILTER: &str = "codelb=debug,codelb_core=debug,codelb_loader=debug,codelb_terminal=debug";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. The --verbose flag overrides RUST_LOG.
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new(VERBOSE_FILTER)
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let source = cli.resolve_source()?;
    info!("Using leaderboard source: {}", source);

    let loader = LeaderboardLoader::new(source, cli.loader_config())?;
    let show_progress = !cli.json && !cli.watch && is_terminal::is_terminal(std::io::stdout());
    let mut app = BoardApp::new(loader, Ranker::new(cli.sort_by.clone()))
        .with_title(cli.title())
        .with_progress(show_progress);
    let formatter = get_formatter(cli.json, cli.table, color_enabled(cli.no_color));

    if cli.watch {
        info!("Starting watch mode");
        LiveMonitor::new(app, formatter, cli.json, cli.interval)
            .run()
            .await?;
    } else {
        app.refresh().await;
        println!("{}", app.render(formatter.as_ref()));
    }

    Ok(())
}
