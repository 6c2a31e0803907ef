//! Common test utilities and helpers for codelb tests
//!
//! This module provides builders for leaderboard YAML documents and a few
//! in-memory leaderboard sources.

#![allow(dead_code)]

use async_trait::async_trait;
use codelb_core::error::{LeaderboardError, Result};
use codelb_core::types::Leaderboard;
use codelb_loader::{LeaderboardSource, parse_leaderboard};
use once_cell::sync::Lazy;
use std::path::PathBuf;
use tempfile::TempDir;

/// Languages every published board scores
pub const TEST_LANGUAGES: &[&str] = &["C#", "Java", "Python", "TypeScript"];

/// A realistic three-model board
pub static SAMPLE_YAML: Lazy<String> = Lazy::new(|| {
    boards_yaml(&[
        ModelEntryBuilder::new("StarCoder-1B")
            .with_group("Baseline", &[4.0, 6.0, 5.0, 5.0])
            .with_group("BM25", &[8.0, 10.0, 9.0, 9.0])
            .with_group("Oracle", &[10.0, 12.0, 11.0, 11.0]),
        ModelEntryBuilder::new("gpt-3.5-turbo")
            .with_group("Baseline", &[20.0, 22.0, 21.0, 23.0])
            .with_group("BM25", &[30.0, 32.0, 31.0, 33.0])
            .with_group("Oracle", &[35.0, 37.0, 36.0, 38.0]),
        ModelEntryBuilder::new("StarCoder-7B")
            .with_group("Baseline", &[8.0, 12.0, 10.0, 10.0])
            .with_group("BM25", &[14.0, 20.0, 18.0, 16.0])
            .with_group("Oracle", &[17.0, 24.0, 21.0, 19.0]),
    ])
});

/// Builder for one model entry of a leaderboard YAML document
#[derive(Debug, Clone)]
pub struct ModelEntryBuilder {
    name: String,
    groups: Vec<(String, Vec<(String, f64)>)>,
}

impl ModelEntryBuilder {
    /// Create a model with no groups
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            groups: Vec::new(),
        }
    }

    /// Add a group scored on `TEST_LANGUAGES`, in order
    pub fn with_group(self, group: &str, scores: &[f64]) -> Self {
        let scores: Vec<(&str, f64)> = TEST_LANGUAGES
            .iter()
            .copied()
            .zip(scores.iter().copied())
            .collect();
        self.with_scores(group, &scores)
    }

    /// Add a group with explicit language names
    pub fn with_scores(mut self, group: &str, scores: &[(&str, f64)]) -> Self {
        self.groups.push((
            group.to_string(),
            scores.iter().map(|(l, s)| (l.to_string(), *s)).collect(),
        ));
        self
    }

    /// Render as a YAML mapping entry
    pub fn to_yaml(&self) -> String {
        let mut yaml = format!("{:?}:\n", self.name);
        for (group, scores) in &self.groups {
            let body = scores
                .iter()
                .map(|(language, score)| format!("{language:?}: {score}"))
                .collect::<Vec<_>>()
                .join(", ");
            yaml.push_str(&format!("  {group:?}: {{ {body} }}\n"));
        }
        yaml
    }
}

/// Join model entries into one document
pub fn boards_yaml(models: &[ModelEntryBuilder]) -> String {
    models.iter().map(ModelEntryBuilder::to_yaml).collect()
}

/// Write a board file into a fresh temporary directory
pub fn write_board(file_name: &str, yaml: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(file_name);
    std::fs::write(&path, yaml).unwrap();
    (dir, path)
}

/// Source serving a fixed YAML document
pub struct StaticSource {
    pub yaml: String,
}

#[async_trait]
impl LeaderboardSource for StaticSource {
    async fn load(&self) -> Result<Leaderboard> {
        parse_leaderboard(&self.yaml)
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

/// Source that always fails like an unreachable server
pub struct FailingSource;

#[async_trait]
impl LeaderboardSource for FailingSource {
    async fn load(&self) -> Result<Leaderboard> {
        Err(LeaderboardError::HttpStatus {
            url: "https://leaderboard.invalid/cceval.yml".to_string(),
            status: 503,
        })
    }

    fn location(&self) -> String {
        "https://leaderboard.invalid/cceval.yml".to_string()
    }
}
