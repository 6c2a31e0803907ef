//! Core domain types for codelb
//!
//! A leaderboard file maps model names to metric groups, and each metric
//! group maps languages to a score:
//!
//! ```yaml
//! StarCoder-7B:
//!   Baseline: { "C#": 8.1, Java: 12.3, Python: 10.2, TypeScript: 9.9 }
//!   BM25:     { "C#": 14.2, Java: 20.5, Python: 18.0, TypeScript: 16.4 }
//!   Oracle:   { "C#": 17.0, Java: 24.1, Python: 21.3, TypeScript: 19.9 }
//! ```
//!
//! The per-group `Average` is derived, never stored: it is computed from the
//! current scores every time it is asked for.

use crate::ordered_map::OrderedMap;
use crate::ranking::average;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Key used for the derived average when a metric is serialized
pub const AVERAGE_KEY: &str = "Average";

/// Strongly-typed model name wrapper
///
/// # Examples
/// ```
/// use codelb_core::types::ModelName;
///
/// let model = ModelName::new("StarCoder-7B");
/// assert_eq!(model.as_str(), "StarCoder-7B");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelName(String);

impl ModelName {
    /// Create a new ModelName from any string-like type
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ModelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The evaluation conditions a leaderboard is usually published with
///
/// Files may carry other groups; those are kept and shown after these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownGroup {
    /// No repository context
    Baseline,
    /// Context retrieved from the repository with BM25
    Bm25,
    /// Context taken from the ground-truth file
    Oracle,
}

impl KnownGroup {
    /// Display order of the known groups
    pub const ALL: [KnownGroup; 3] = [Self::Baseline, Self::Bm25, Self::Oracle];

    /// Group name as it appears in leaderboard files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Baseline => "Baseline",
            Self::Bm25 => "BM25",
            Self::Oracle => "Oracle",
        }
    }

    /// Human readable legend label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Baseline => "Baseline",
            Self::Bm25 => "with Repository Context ( BM25 )",
            Self::Oracle => "with Repository Context ( Oracle )",
        }
    }

    /// Look up a known group by its file name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == name)
    }
}

impl fmt::Display for KnownGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legend label for any group name
pub fn group_label(name: &str) -> &str {
    KnownGroup::from_name(name).map_or(name, |g| g.label())
}

/// Per-language scores of one metric group
///
/// # Examples
/// ```
/// use codelb_core::types::Metric;
///
/// let metric = Metric::from_scores([
///     ("C#", 80.0),
///     ("Java", 70.0),
///     ("Python", 75.0),
///     ("TypeScript", 85.0),
/// ]);
/// assert_eq!(metric.average(), Some(77.5));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metric {
    scores: OrderedMap<f64>,
}

impl Metric {
    /// Build a metric from (language, score) pairs
    pub fn from_scores<K: Into<String>>(scores: impl IntoIterator<Item = (K, f64)>) -> Self {
        let mut scores: OrderedMap<f64> = scores.into_iter().collect();
        scores.remove(AVERAGE_KEY);
        Self { scores }
    }

    /// Score for one language
    pub fn score(&self, language: &str) -> Option<f64> {
        self.scores.get(language).copied()
    }

    /// Set the score for one language
    pub fn set_score(&mut self, language: impl Into<String>, score: f64) {
        let language = language.into();
        if language != AVERAGE_KEY {
            self.scores.insert(language, score);
        }
    }

    /// Languages and scores in file order
    pub fn scores(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(k, v)| (k, *v))
    }

    /// Number of languages scored
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Mean of the per-language scores, rounded to two decimals
    ///
    /// `None` when the group has no scores.
    pub fn average(&self) -> Option<f64> {
        average(self.scores.values().copied())
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len() + 1))?;
        for (language, score) in self.scores.iter() {
            map.serialize_entry(language, score)?;
        }
        map.serialize_entry(AVERAGE_KEY, &self.average())?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Metric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut scores = OrderedMap::<f64>::deserialize(deserializer)?;
        // A stored average would go stale; it is always recomputed.
        scores.remove(AVERAGE_KEY);
        Ok(Self { scores })
    }
}

/// Metric groups of one model, keyed by group name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metrics(OrderedMap<Metric>);

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a group
    pub fn insert(&mut self, group: impl Into<String>, metric: Metric) {
        self.0.insert(group, metric);
    }

    /// Get a group by name
    pub fn get(&self, group: &str) -> Option<&Metric> {
        self.0.get(group)
    }

    /// Average of a group; `None` when the group is missing or empty
    pub fn average(&self, group: &str) -> Option<f64> {
        self.get(group).and_then(Metric::average)
    }

    /// Groups in file order
    pub fn groups(&self) -> impl Iterator<Item = (&str, &Metric)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Metric)> for Metrics {
    fn from_iter<I: IntoIterator<Item = (K, Metric)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A whole leaderboard file: model name to metric groups, in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard(OrderedMap<Metrics>);

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a model
    pub fn insert(&mut self, model: impl Into<String>, metrics: Metrics) {
        self.0.insert(model, metrics);
    }

    /// Get a model's metrics
    pub fn get(&self, model: &str) -> Option<&Metrics> {
        self.0.get(model)
    }

    /// Models in file order
    pub fn models(&self) -> impl Iterator<Item = (&str, &Metrics)> {
        self.0.iter()
    }

    /// Number of models
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Metrics)> for Leaderboard {
    fn from_iter<I: IntoIterator<Item = (K, Metrics)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A ranked row: the model name with all of its metric groups
///
/// Serializes flat, with the name next to the groups:
/// `{"name": "...", "Baseline": {..., "Average": 12.3}, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelItem {
    pub name: ModelName,
    #[serde(flatten)]
    pub metrics: Metrics,
}

impl ModelItem {
    pub fn new(name: ModelName, metrics: Metrics) -> Self {
        Self { name, metrics }
    }

    /// Average of one group for this model
    pub fn average(&self, group: &str) -> Option<f64> {
        self.metrics.average(group)
    }
}
