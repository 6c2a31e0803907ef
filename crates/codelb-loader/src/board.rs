//! Published leaderboard boards
//!
//! Each board is one YAML file served next to the page at a well-known path.
//! A shared page link selects its board with a `kind` query parameter
//! (`?kind=instruct`); without one the cross-model comparison is shown.

use reqwest::Url;
use std::fmt;

/// A named leaderboard file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Board {
    /// Open-source models compared with ChatGPT on CrossCodeEval
    #[default]
    Cceval,
    /// Base models compared with their instruct fine-tunes
    Instruct,
    /// Models served by Tabby
    Tabby,
    /// The original single-file leaderboard
    Leaderboard,
}

impl Board {
    pub const ALL: [Board; 4] = [Self::Cceval, Self::Instruct, Self::Tabby, Self::Leaderboard];

    /// File name under the site root
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Cceval => "cceval.yml",
            Self::Instruct => "instruct.yml",
            Self::Tabby => "tabby.yml",
            Self::Leaderboard => "leaderboard.yml",
        }
    }

    /// Question shown above the ranking, if the board has one
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Cceval => Some("How do open-source models compare to ChatGPT?"),
            Self::Instruct => Some("Does instruct fine-tuning improve code completion?"),
            Self::Tabby | Self::Leaderboard => None,
        }
    }

    /// Location of the board file under a base URL or directory
    ///
    /// # Examples
    /// ```
    /// use codelb_loader::board::Board;
    ///
    /// assert_eq!(
    ///     Board::Instruct.location("https://leaderboard.tabbyml.com/"),
    ///     "https://leaderboard.tabbyml.com/instruct.yml"
    /// );
    /// ```
    pub fn location(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.file_name())
    }

    /// Resolve the board a page link points at
    ///
    /// The `kind` parameter is read from the query string, or from the
    /// fragment of hash-routed links (`#/?kind=instruct`). Values are
    /// percent-decoded. A missing or unrecognised kind falls back to the
    /// default board.
    ///
    /// # Examples
    /// ```
    /// use codelb_loader::board::Board;
    ///
    /// assert_eq!(
    ///     Board::from_location("https://leaderboard.tabbyml.com/?kind=instruct"),
    ///     Board::Instruct
    /// );
    /// assert_eq!(Board::from_location("/#/?kind=instruct"), Board::Instruct);
    /// assert_eq!(Board::from_location("https://leaderboard.tabbyml.com/"), Board::Cceval);
    /// ```
    pub fn from_location(href: &str) -> Self {
        let Ok(base) = Url::parse(LINK_BASE) else {
            return Self::default();
        };
        // Relative links resolve against a placeholder origin.
        let Ok(url) = base.join(href.trim()) else {
            return Self::default();
        };

        kind_param(&url)
            .or_else(|| {
                let fragment = url.fragment()?;
                let query = fragment.split_once('?').map_or(fragment, |(_, q)| q);
                kind_param(&base.join(&format!("?{query}")).ok()?)
            })
            .and_then(|kind| kind.parse().ok())
            .unwrap_or_default()
    }
}

/// Placeholder origin for relative page links
const LINK_BASE: &str = "https://leaderboard.invalid/";

fn kind_param(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == "kind")
        .map(|(_, value)| value.into_owned())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cceval => write!(f, "cceval"),
            Self::Instruct => write!(f, "instruct"),
            Self::Tabby => write!(f, "tabby"),
            Self::Leaderboard => write!(f, "leaderboard"),
        }
    }
}

impl std::str::FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cceval" => Ok(Self::Cceval),
            "instruct" => Ok(Self::Instruct),
            "tabby" => Ok(Self::Tabby),
            "leaderboard" => Ok(Self::Leaderboard),
            _ => Err(format!(
                "Unknown board '{s}', expected one of: cceval, instruct, tabby, leaderboard"
            )),
        }
    }
}
