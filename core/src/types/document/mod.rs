//! Page documents produced by the site indexer.

use crate::error::IndexError;
use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Destination path of a page, e.g. `/about`.
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PageUrl(String);

/// One searchable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocument {
    pub url: PageUrl,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Immutable list of documents loaded from the index artifact.
///
/// Cloning is cheap: the documents are shared, never copied or mutated.
#[derive(Debug, Clone, Default)]
pub struct DocumentList {
    documents: Arc<[SearchDocument]>,
}

impl DocumentList {
    pub fn new(documents: Vec<SearchDocument>) -> Self {
        let list = Self {
            documents: documents.into(),
        };
        for url in list.duplicate_urls() {
            tracing::warn!(%url, "duplicate url in search index");
        }
        list
    }

    /// Parses a JSON array of `{url, title, description?}`.
    pub fn from_json_str(json: &str) -> Result<Self, IndexError> {
        let documents: Vec<SearchDocument> = serde_json::from_str(json)?;
        Ok(Self::new(documents))
    }

    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let content = std::fs::read_to_string(path)?;
        let list = Self::from_json_str(&content)?;
        tracing::info!(path = %path.display(), documents = list.len(), "loaded search index");
        Ok(list)
    }

    pub fn as_slice(&self) -> &[SearchDocument] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchDocument> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// URLs appearing more than once, in first-repeat order.
    pub fn duplicate_urls(&self) -> Vec<&PageUrl> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.documents
            .iter()
            .map(|doc| &doc.url)
            .filter(|url| !seen.insert(*url) && reported.insert(*url))
            .collect()
    }
}

impl<'a> IntoIterator for &'a DocumentList {
    type Item = &'a SearchDocument;
    type IntoIter = std::slice::Iter<'a, SearchDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
