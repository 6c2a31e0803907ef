//! Output formatting module for codelb
//!
//! This module provides formatters for displaying a ranked board:
//! - Bar rows, mirroring the published leaderboard page
//! - Table format for compact terminal output
//! - JSON format for machine-readable output and integration with other tools
//!
//! # Examples
//!
//! ```
//! use codelb_core::types::{Leaderboard, Metric, Metrics};
//! use codelb_core::Ranker;
//! use codelb_terminal::output::{BoardView, get_formatter};
//!
//! let metrics: Metrics = [("BM25", Metric::from_scores([("Python", 30.0), ("Java", 50.0)]))]
//!     .into_iter()
//!     .collect();
//! let board: Leaderboard = [("StarCoder-7B", metrics)].into_iter().collect();
//! let items = Ranker::default().rank(&board);
//!
//! let view = BoardView::new(None, "BM25", &items);
//! let json = get_formatter(true, false, false).format_board(&view);
//! assert!(json.contains("\"Average\": 40.0"));
//! ```

use crate::bars::BarFormatter;
use codelb_core::ranking::group_columns;
use codelb_core::types::ModelItem;
use prettytable::{Cell, Row, Table, format};
use serde::Serialize;
use serde_json::json;

/// A ranked board ready to be rendered
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    /// Question shown above the ranking
    pub title: Option<&'a str>,
    /// Metric group the items are sorted by
    pub sort_by: &'a str,
    /// Ranked models
    pub items: &'a [ModelItem],
}

impl<'a> BoardView<'a> {
    pub fn new(title: Option<&'a str>, sort_by: &'a str, items: &'a [ModelItem]) -> Self {
        Self {
            title,
            sort_by,
            items,
        }
    }
}

/// Trait for output formatters
///
/// # Example Implementation
///
/// ```
/// use codelb_terminal::output::{BoardView, OutputFormatter};
///
/// struct CountFormatter;
///
/// impl OutputFormatter for CountFormatter {
///     fn format_board(&self, view: &BoardView<'_>) -> String {
///         format!("{} models ranked by {}", view.items.len(), view.sort_by)
///     }
/// }
/// ```
pub trait OutputFormatter {
    /// Format a ranked board
    fn format_board(&self, view: &BoardView<'_>) -> String;
}

/// Whether colored output should be used
///
/// Respects the NO_COLOR environment variable as well as the CLI flag.
pub fn color_enabled(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none()
}

/// Table formatter for human-readable output
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_board(&self, view: &BoardView<'_>) -> String {
        let groups = group_columns(view.items);

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        let mut titles = vec![Cell::new("#").style_spec("b"), Cell::new("Model").style_spec("b")];
        titles.extend(groups.iter().map(|g| {
            let title = if g == view.sort_by {
                format!("{g} *")
            } else {
                g.clone()
            };
            Cell::new(&title).style_spec("b")
        }));
        table.set_titles(Row::new(titles));

        for (rank, item) in view.items.iter().enumerate() {
            let mut cells = vec![
                Cell::new(&(rank + 1).to_string()).style_spec("r"),
                Cell::new(item.name.as_str()),
            ];
            cells.extend(groups.iter().map(|g| {
                let label = match item.metrics.get(g) {
                    Some(metric) => crate::bars::percent_label(metric.average()),
                    None => "-".to_string(),
                };
                Cell::new(&label).style_spec("r")
            }));
            table.add_row(Row::new(cells));
        }

        match view.title {
            Some(title) => format!("{title}\n{table}"),
            None => table.to_string(),
        }
    }
}

/// JSON formatter for machine-readable output
///
/// Keys keep file order: models in rank order, groups and languages as
/// they appear in the source document.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonBoard<'a> {
    title: Option<&'a str>,
    sort_by: &'a str,
    models: &'a [ModelItem],
}

impl OutputFormatter for JsonFormatter {
    fn format_board(&self, view: &BoardView<'_>) -> String {
        let output = JsonBoard {
            title: view.title,
            sort_by: view.sort_by,
            models: view.items,
        };
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|e| json!({ "error": e.to_string() }).to_string())
    }
}

/// Get the formatter for the requested output mode
///
/// JSON wins over the table; bars are the default.
///
/// # Arguments
///
/// * `json` - Machine-readable JSON output
/// * `table` - Compact table output
/// * `colored_output` - Whether bar rows may use ANSI colors
pub fn get_formatter(json: bool, table: bool, colored_output: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else if table {
        Box::new(TableFormatter)
    } else {
        Box::new(BarFormatter::new(colored_output))
    }
}
