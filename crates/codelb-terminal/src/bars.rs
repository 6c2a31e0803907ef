//! Horizontal bar rows for ranked models
//!
//! Every model gets one bar per metric group, `average × multiplier`
//! characters long, followed by the average as a percentage. The multiplier
//! depends on how wide the terminal is: wide terminals put the model name
//! in a right-aligned gutter left of the bars, narrow ones put it on its
//! own line above them.

use crate::output::{BoardView, OutputFormatter};
use codelb_core::ranking::group_columns;
use codelb_core::types::{KnownGroup, ModelItem, group_label};
use colored::{Color, Colorize};
use tracing::debug;

/// Bar character
const BAR_FULL: &str = "█";

/// Page heading
pub const HEADING: &str = "Coding LLMs Leaderboard";

/// Terminal width from which the wide layout is used
pub const WIDE_MIN_COLUMNS: usize = 100;

/// Width of the model name gutter in the wide layout
const NAME_GUTTER: usize = 24;

/// Bar length of legend entries
const LEGEND_BAR: usize = 4;

/// Layout chosen from the terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// Name above the bars, short bars
    Narrow,
    /// Name beside the bars, long bars
    Wide,
}

impl Breakpoint {
    /// Pick the layout for a terminal width
    pub fn from_width(columns: usize) -> Self {
        if columns >= WIDE_MIN_COLUMNS {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    /// Detect the layout of the current terminal
    ///
    /// Output that is not a terminal gets the wide layout.
    pub fn detect() -> Self {
        let breakpoint = terminal_width().map_or(Self::Wide, Self::from_width);
        debug!("Using {:?} bar layout", breakpoint);
        breakpoint
    }

    /// Characters per percentage point
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Narrow => 0.25,
            Self::Wide => 0.5,
        }
    }
}

/// Average at which a bar reaches full length
const FULL_SCALE: f64 = 100.0;

/// Bar length in characters for an average
///
/// Bars are clamped to `0..=100` percent, so out-of-range scores never
/// grow past a full-scale bar.
pub fn bar_width(average: f64, multiplier: f64) -> usize {
    if !average.is_finite() {
        return 0;
    }
    (average.clamp(0.0, FULL_SCALE) * multiplier).round() as usize
}

/// Percentage label for an average; `-` when there is none
pub fn percent_label(average: Option<f64>) -> String {
    // Adding zero turns a rounded `-0.0` into `0.0`.
    average.map_or_else(|| "-".to_string(), |avg| format!("{}%", avg + 0.0))
}

fn group_color(group: &str) -> Color {
    match KnownGroup::from_name(group) {
        Some(KnownGroup::Baseline) => Color::BrightGreen,
        Some(KnownGroup::Bm25) => Color::BrightMagenta,
        Some(KnownGroup::Oracle) => Color::BrightBlue,
        None => Color::White,
    }
}

/// Renders ranked models as bar rows
pub struct BarFormatter {
    breakpoint: Breakpoint,
    colored_output: bool,
}

impl BarFormatter {
    /// Create a formatter for the current terminal
    pub fn new(colored_output: bool) -> Self {
        Self {
            breakpoint: Breakpoint::detect(),
            colored_output,
        }
    }

    /// Force a layout
    pub fn with_breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    fn draw_bar(&self, width: usize, group: &str) -> String {
        let bar = BAR_FULL.repeat(width);
        if self.colored_output {
            bar.color(group_color(group)).to_string()
        } else {
            bar
        }
    }

    fn draw_metric(&self, item: &ModelItem, group: &str) -> Option<String> {
        item.metrics.get(group)?;
        let average = item.average(group);
        let width = average.map_or(0, |avg| bar_width(avg, self.breakpoint.multiplier()));
        let label = percent_label(average);
        if width == 0 {
            return Some(label);
        }
        Some(format!("{} {}", self.draw_bar(width, group), label))
    }

    fn draw_model(&self, item: &ModelItem, groups: &[String]) -> String {
        let name = item.name.as_str();
        let lines: Vec<String> = groups
            .iter()
            .filter_map(|group| self.draw_metric(item, group))
            .collect();

        let mut output = String::new();
        match self.breakpoint {
            Breakpoint::Wide => {
                let gutter = console::pad_str(
                    name,
                    NAME_GUTTER,
                    console::Alignment::Right,
                    Some("..."),
                );
                if lines.is_empty() {
                    output.push_str(&format!("{gutter}\n"));
                }
                for (i, line) in lines.iter().enumerate() {
                    if i == 0 {
                        output.push_str(&format!("{gutter}  {line}\n"));
                    } else {
                        output.push_str(&format!("{}  {line}\n", " ".repeat(NAME_GUTTER)));
                    }
                }
            }
            Breakpoint::Narrow => {
                output.push_str(&format!("{name}\n"));
                for line in &lines {
                    output.push_str(&format!("  {line}\n"));
                }
            }
        }
        output
    }

    fn draw_legend(&self, groups: &[String]) -> String {
        let mut output = String::new();
        for group in groups {
            output.push_str(&format!(
                "  {} {}\n",
                self.draw_bar(LEGEND_BAR, group),
                group_label(group)
            ));
        }
        output
    }
}

impl OutputFormatter for BarFormatter {
    fn format_board(&self, view: &BoardView<'_>) -> String {
        let mut output = String::new();

        let heading = if self.colored_output {
            HEADING.bold().to_string()
        } else {
            HEADING.to_string()
        };
        output.push_str(&format!("{heading}\n"));
        if let Some(title) = view.title {
            let title = if self.colored_output {
                title.italic().to_string()
            } else {
                title.to_string()
            };
            output.push_str(&format!("\n{title}\n"));
        }
        output.push('\n');

        let mut groups = group_columns(view.items);
        for item in view.items {
            output.push_str(&self.draw_model(item, &groups));
        }

        if groups.is_empty() {
            groups = KnownGroup::ALL
                .iter()
                .map(|g| g.as_str().to_string())
                .collect();
        }
        output.push('\n');
        output.push_str(&self.draw_legend(&groups));
        output
    }
}

/// Get terminal width using the cross-platform terminal_size crate
fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(width, _)| width.0 as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use codelb_core::types::{Leaderboard, Metric, Metrics};
    use codelb_core::Ranker;

    fn ranked() -> Vec<ModelItem> {
        let metrics = |baseline: f64, bm25: f64| -> Metrics {
            [
                ("Baseline", Metric::from_scores([("X", baseline)])),
                ("BM25", Metric::from_scores([("X", bm25)])),
            ]
            .into_iter()
            .collect()
        };
        let board: Leaderboard = [("small", metrics(10.0, 20.0)), ("large", metrics(30.0, 40.0))]
            .into_iter()
            .collect();
        Ranker::default().rank(&board)
    }

    #[test]
    fn test_breakpoints() {
        assert_eq!(Breakpoint::from_width(80), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::Wide.multiplier(), 2.0 * Breakpoint::Narrow.multiplier());
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(40.0, 0.5), 20);
        assert_eq!(bar_width(77.5, 0.25), 19);
        assert_eq!(bar_width(-3.0, 0.5), 0);
        assert_eq!(bar_width(1e30, 0.5), 50);
        assert_eq!(bar_width(250.0, 0.25), 25);
        assert_eq!(bar_width(f64::INFINITY, 0.5), 0);
        assert_eq!(bar_width(f64::NAN, 0.5), 0);
    }

    #[test]
    fn test_huge_scores_render_full_scale_bars() {
        let board: Leaderboard = [
            (
                "huge",
                [("BM25", Metric::from_scores([("X", 1e30)]))]
                    .into_iter()
                    .collect::<Metrics>(),
            ),
            (
                "overflowing",
                [("BM25", Metric::from_scores([("X", f64::MAX), ("Y", f64::MAX)]))]
                    .into_iter()
                    .collect::<Metrics>(),
            ),
        ]
        .into_iter()
        .collect();
        let items = Ranker::default().rank(&board);

        let output = BarFormatter::new(false)
            .with_breakpoint(Breakpoint::Wide)
            .format_board(&BoardView::new(None, "BM25", &items));
        assert!(output.contains(&format!("huge  {} 1", BAR_FULL.repeat(50))));
        assert!(!output.contains(&BAR_FULL.repeat(51)));
        assert!(output.contains("overflowing  -\n"), "{output}");
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(Some(77.5)), "77.5%");
        assert_eq!(percent_label(Some(40.0)), "40%");
        assert_eq!(percent_label(None), "-");
        assert_eq!(percent_label(Some(-0.0)), "0%");
        let tiny = Metric::from_scores([("X", -0.001)]);
        assert_eq!(percent_label(tiny.average()), "0%");
    }

    #[test]
    fn test_wide_layout() {
        let items = ranked();
        let view = BoardView::new(Some("Which is best?"), "BM25", &items);
        let output = BarFormatter::new(false)
            .with_breakpoint(Breakpoint::Wide)
            .format_board(&view);

        assert!(output.starts_with(HEADING));
        assert!(output.contains("Which is best?"));
        let large_row = format!("{:>24}  {} 30%", "large", BAR_FULL.repeat(15));
        assert!(output.contains(&large_row), "{output}");
        assert!(output.contains(&format!("{}  {} 40%", " ".repeat(24), BAR_FULL.repeat(20))));
        assert!(output.find("large").unwrap() < output.find("small").unwrap());
        assert!(output.contains("with Repository Context ( BM25 )"));
        assert!(!output.contains("Oracle"));
    }

    #[test]
    fn test_narrow_layout() {
        let items = ranked();
        let view = BoardView::new(None, "BM25", &items);
        let output = BarFormatter::new(false)
            .with_breakpoint(Breakpoint::Narrow)
            .format_board(&view);

        assert!(output.contains("large\n"));
        assert!(output.contains(&format!("  {} 40%\n", BAR_FULL.repeat(10))));
    }

    #[test]
    fn test_empty_board_shows_full_legend() {
        let view = BoardView::new(None, "BM25", &[]);
        let output = BarFormatter::new(false)
            .with_breakpoint(Breakpoint::Wide)
            .format_board(&view);
        for group in KnownGroup::ALL {
            assert!(output.contains(group.label()));
        }
    }

    #[test]
    fn test_missing_group_is_skipped() {
        let mut metrics = Metrics::new();
        metrics.insert("Oracle", Metric::from_scores([("X", 50.0)]));
        metrics.insert("BM25", Metric::default());
        let board: Leaderboard = [("partial", metrics)].into_iter().collect();
        let items = Ranker::default().rank(&board);

        let formatter = BarFormatter::new(false).with_breakpoint(Breakpoint::Narrow);
        let output = formatter.format_board(&BoardView::new(None, "BM25", &items));
        assert!(output.contains("partial\n  -\n"));
        assert!(!output.contains("Baseline"));
    }

    #[test]
    fn test_long_names_are_truncated() {
        let board: Leaderboard = [(
            "an-extremely-long-model-name-that-overflows",
            [("BM25", Metric::from_scores([("X", 10.0)]))]
                .into_iter()
                .collect::<Metrics>(),
        )]
        .into_iter()
        .collect();
        let items = Ranker::default().rank(&board);
        let output = BarFormatter::new(false)
            .with_breakpoint(Breakpoint::Wide)
            .format_board(&BoardView::new(None, "BM25", &items));
        assert!(output.contains("..."));
        assert!(!output.contains("overflows"));
    }
}
