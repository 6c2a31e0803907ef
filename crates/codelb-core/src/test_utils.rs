//! Shared test helpers for unit tests
//!
//! Integration tests under `tests/` cannot see this module; they carry
//! their own builders in `tests/common/mod.rs`.

use crate::types::{Leaderboard, Metric, Metrics};

/// Build a model's metrics from `(group, [(language, score)])` pairs
pub fn metrics(groups: &[(&str, &[(&str, f64)])]) -> Metrics {
    groups
        .iter()
        .map(|(group, scores)| (*group, Metric::from_scores(scores.iter().copied())))
        .collect()
}

/// Two models whose BM25 averages are 40 and 10
pub fn two_model_board() -> Leaderboard {
    [
        (
            "A",
            metrics(&[
                ("Baseline", &[("X", 10.0), ("Y", 20.0)]),
                ("BM25", &[("X", 30.0), ("Y", 50.0)]),
                ("Oracle", &[("X", 40.0), ("Y", 60.0)]),
            ]),
        ),
        (
            "B",
            metrics(&[
                ("Baseline", &[("X", 90.0), ("Y", 10.0)]),
                ("BM25", &[("X", 10.0), ("Y", 10.0)]),
                ("Oracle", &[("X", 5.0), ("Y", 5.0)]),
            ]),
        ),
    ]
    .into_iter()
    .collect()
}
