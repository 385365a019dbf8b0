mod approx;
mod index;

use crate::query::SearchQuery;
use index::Index;
use sitefind_core::{DocumentList, SearchConfig, SearchDocument};

/// Query service over a fixed document list.
///
/// The index is built once in `new` and never changes afterwards; searching
/// is a pure function of the query.
pub struct SearchEngine {
    documents: DocumentList,
    index: Index,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(documents: DocumentList, config: SearchConfig) -> Self {
        let index = Index::build(documents.as_slice(), &config);
        tracing::debug!(documents = documents.len(), "search index built");

        Self {
            documents,
            index,
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn documents(&self) -> &DocumentList {
        &self.documents
    }
}

/// Search operations.
impl SearchEngine {
    /// Returns matching documents best first, at most `result_limit` of them.
    ///
    /// Blank queries, and queries shorter than `min_match_char_length` once
    /// trimmed, return nothing.
    pub fn search(&self, query: &SearchQuery) -> Vec<SearchDocument> {
        let pattern = query.text().trim();
        if pattern.is_empty() || pattern.chars().count() < self.config.min_match_char_length {
            return Vec::new();
        }

        let ranked = match query {
            SearchQuery::Fuzzy(_) => self.index.fuzzy(pattern, &self.config),
            SearchQuery::Subsequence(_) => self.index.subsequence(pattern, &self.config),
        };

        let documents = self.documents.as_slice();
        let results: Vec<SearchDocument> = ranked
            .into_iter()
            .take(self.config.result_limit)
            .map(|idx| documents[idx].clone())
            .collect();

        tracing::debug!(query = pattern, matches = results.len(), "search query");
        results
    }

    /// Typo-tolerant search, the default query kind.
    pub fn query(&self, text: &str) -> Vec<SearchDocument> {
        self.search(&SearchQuery::Fuzzy(text.to_string()))
    }
}
