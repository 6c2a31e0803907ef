//! Ranking of leaderboard models
//!
//! The ranker turns a parsed [`Leaderboard`] into the list of [`ModelItem`]s
//! the renderers consume, sorted by the average of one designated metric
//! group (BM25 unless asked otherwise).
//!
//! Policies:
//! - an empty group has no average;
//! - a model whose designated group is missing or empty sorts after every
//!   model that has an average for it;
//! - ties keep the file order (the sort is stable).
//!
//! # Examples
//!
//! ```
//! use codelb_core::ranking::Ranker;
//! use codelb_core::types::{Leaderboard, Metric, Metrics};
//!
//! let model = |bm25: f64| -> Metrics {
//!     [("BM25", Metric::from_scores([("Python", bm25)]))].into_iter().collect()
//! };
//! let board: Leaderboard = [("small", model(10.0)), ("large", model(40.0))]
//!     .into_iter()
//!     .collect();
//!
//! let ranked = Ranker::default().rank(&board);
//! assert_eq!(ranked[0].name.as_str(), "large");
//! assert_eq!(ranked[1].name.as_str(), "small");
//! ```

use crate::types::{KnownGroup, Leaderboard, ModelItem, ModelName};
use std::cmp::Ordering;
use tracing::debug;

/// Round to two decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean rounded to two decimals
///
/// Returns `None` for an empty input, or when the mean is not finite.
pub fn average(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return None;
    }
    let mean = sum / count as f64;
    mean.is_finite().then(|| round2(mean))
}

/// Descending order on optional averages, with `None` last
fn compare_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts leaderboard models by one metric group's average
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranker {
    sort_by: String,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(KnownGroup::Bm25.as_str())
    }
}

impl Ranker {
    /// Create a ranker keyed on the given metric group
    pub fn new(sort_by: impl Into<String>) -> Self {
        Self {
            sort_by: sort_by.into(),
        }
    }

    /// The designated metric group
    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    /// Build one item per model and sort them by the designated average
    pub fn rank(&self, board: &Leaderboard) -> Vec<ModelItem> {
        let mut items: Vec<ModelItem> = board
            .models()
            .map(|(name, metrics)| ModelItem::new(ModelName::new(name), metrics.clone()))
            .collect();

        let unranked = items
            .iter()
            .filter(|item| item.average(&self.sort_by).is_none())
            .count();
        if unranked > 0 {
            debug!(
                "{} of {} models have no {} average and are listed last",
                unranked,
                items.len(),
                self.sort_by
            );
        }

        items.sort_by(|a, b| compare_desc(a.average(&self.sort_by), b.average(&self.sort_by)));
        items
    }
}

/// Rank a leaderboard by the given metric group
pub fn rank_by(board: &Leaderboard, sort_by: &str) -> Vec<ModelItem> {
    Ranker::new(sort_by).rank(board)
}

/// Metric group columns to show for a ranked list
///
/// Known groups come first in their fixed order, followed by any other
/// group in the order it is first seen.
pub fn group_columns(items: &[ModelItem]) -> Vec<String> {
    let mut columns: Vec<String> = KnownGroup::ALL
        .iter()
        .map(|g| g.as_str())
        .filter(|g| items.iter().any(|item| item.metrics.get(g).is_some()))
        .map(str::to_string)
        .collect();

    for item in items {
        for (group, _) in item.metrics.groups() {
            if !columns.iter().any(|c| c == group) {
                columns.push(group.to_string());
            }
        }
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{metrics, two_model_board};
    use crate::types::{Metric, Metrics};

    #[test]
    fn test_round2() {
        assert_eq!(round2(77.5), 77.5);
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(12.345_678), 12.35);
    }

    #[test]
    fn test_average() {
        assert_eq!(average([80.0, 70.0, 75.0, 85.0]), Some(77.5));
        assert_eq!(average([10.0, 20.0, 20.0]), Some(16.67));
        assert_eq!(average(std::iter::empty()), None);
        assert_eq!(average([f64::INFINITY, 1.0]), None);
    }

    #[test]
    fn test_two_model_scenario() {
        let ranked = rank_by(&two_model_board(), "BM25");
        let order: Vec<_> = ranked.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(order, vec!["A", "B"]);
        assert_eq!(ranked[0].average("BM25"), Some(40.0));
        assert_eq!(ranked[1].average("BM25"), Some(10.0));
    }

    #[test]
    fn test_sort_by_other_group() {
        let ranked = rank_by(&two_model_board(), "Baseline");
        assert_eq!(ranked[0].name.as_str(), "B");
        assert_eq!(ranked[0].average("Baseline"), Some(50.0));
    }

    #[test]
    fn test_ties_keep_file_order() {
        let board: Leaderboard = [
            ("first", metrics(&[("BM25", &[("X", 10.0)])])),
            ("second", metrics(&[("BM25", &[("X", 20.0)])])),
            ("third", metrics(&[("BM25", &[("X", 10.0)])])),
        ]
        .into_iter()
        .collect();

        let ranked = Ranker::default().rank(&board);
        let order: Vec<_> = ranked.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(order, vec!["second", "first", "third"]);
    }

    #[test]
    fn test_missing_designated_group_sorts_last() {
        let board: Leaderboard = [
            ("no-bm25", metrics(&[("Baseline", &[("X", 99.0)])])),
            ("low", metrics(&[("BM25", &[("X", 1.0)])])),
            ("empty-bm25", metrics(&[("BM25", &[])])),
            ("high", metrics(&[("BM25", &[("X", 50.0)])])),
        ]
        .into_iter()
        .collect();

        let ranked = Ranker::default().rank(&board);
        let order: Vec<_> = ranked.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(order, vec!["high", "low", "no-bm25", "empty-bm25"]);
    }

    #[test]
    fn test_unknown_sort_group_keeps_input_order() {
        let ranked = rank_by(&two_model_board(), "Nope");
        let order: Vec<_> = ranked.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let board = two_model_board();
        let ranker = Ranker::default();
        assert_eq!(ranker.rank(&board), ranker.rank(&board));
    }

    #[test]
    fn test_empty_board() {
        assert!(Ranker::default().rank(&Leaderboard::new()).is_empty());
    }

    #[test]
    fn test_group_columns_order() {
        let mut custom = Metrics::new();
        custom.insert("Custom", Metric::from_scores([("X", 1.0)]));
        custom.insert("Oracle", Metric::from_scores([("X", 1.0)]));
        let board: Leaderboard = [
            ("a", custom),
            ("b", metrics(&[("Baseline", &[("X", 1.0)])])),
        ]
        .into_iter()
        .collect();

        let items = Ranker::default().rank(&board);
        assert_eq!(group_columns(&items), vec!["Baseline", "Oracle", "Custom"]);
    }
}
