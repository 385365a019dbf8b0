//! Search query types.

/// Query type for search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Approximate matching that tolerates typos, scored against the
    /// configured threshold.
    Fuzzy(String),
    /// fzf-style ordered subsequence matching, e.g. `abt` finds "About".
    /// Supports the fzf operators (`^prefix`, `suffix$`, `'exact`, `!not`).
    Subsequence(String),
}

impl SearchQuery {
    pub fn text(&self) -> &str {
        match self {
            SearchQuery::Fuzzy(text) | SearchQuery::Subsequence(text) => text,
        }
    }
}

/// Which [`SearchQuery`] a search session builds from typed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryKind {
    #[default]
    Fuzzy,
    Subsequence,
}

impl QueryKind {
    pub fn query(self, text: impl Into<String>) -> SearchQuery {
        match self {
            QueryKind::Fuzzy => SearchQuery::Fuzzy(text.into()),
            QueryKind::Subsequence => SearchQuery::Subsequence(text.into()),
        }
    }
}
