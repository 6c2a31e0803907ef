//! Where a leaderboard file is read from

use codelb_core::error::{LeaderboardError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// A leaderboard location: an HTTP(S) URL or a local file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetched with an HTTP GET
    Url(String),
    /// Read from the local filesystem
    File(PathBuf),
}

impl Source {
    /// Classify a command-line argument
    ///
    /// `http://` and `https://` arguments are URLs; `file://` arguments and
    /// anything else are treated as paths.
    ///
    /// # Examples
    /// ```
    /// use codelb_loader::source::Source;
    ///
    /// assert!(matches!(Source::parse("https://example.com/cceval.yml").unwrap(), Source::Url(_)));
    /// assert!(matches!(Source::parse("public/cceval.yml").unwrap(), Source::File(_)));
    /// ```
    pub fn parse(arg: &str) -> Result<Self> {
        let arg = arg.trim();
        if arg.is_empty() {
            return Err(LeaderboardError::InvalidSource(
                "empty source location".to_string(),
            ));
        }

        let lower = arg.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Self::Url(arg.to_string()));
        }

        let path = arg.strip_prefix("file://").unwrap_or(arg);
        if path.is_empty() {
            return Err(LeaderboardError::InvalidSource(format!(
                "no path in '{arg}'"
            )));
        }
        Ok(Self::File(PathBuf::from(path)))
    }

    /// The local path, for file sources
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Url(_) => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
