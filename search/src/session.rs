//! One mounted search UI instance.

use crate::engine::SearchEngine;
use crate::query::QueryKind;
use sitefind_core::{DocumentList, SearchConfig, SearchDocument};
use std::cell::OnceCell;

/// What the search UI should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView<'a> {
    /// Nothing typed yet.
    Idle,
    /// A query was typed and nothing matched. Rendered as an explicit
    /// "no results" message, never as an empty list.
    NoResults { query: &'a str },
    Matches(&'a [SearchDocument]),
}

/// Search state owned by one search UI instance.
///
/// The index is built on the first query and lives until the session is
/// dropped (`Unindexed -> Indexed`, once).
pub struct SearchSession {
    documents: DocumentList,
    config: SearchConfig,
    kind: QueryKind,
    engine: OnceCell<SearchEngine>,
    query: String,
    results: Vec<SearchDocument>,
    on_close: Box<dyn FnMut()>,
}

impl SearchSession {
    /// `on_close` dismisses the search UI; it runs on `close` and after a
    /// result is selected.
    pub fn mount(
        documents: DocumentList,
        config: SearchConfig,
        on_close: impl FnMut() + 'static,
    ) -> Self {
        Self {
            documents,
            config,
            kind: QueryKind::default(),
            engine: OnceCell::new(),
            query: String::new(),
            results: Vec::new(),
            on_close: Box::new(on_close),
        }
    }

    pub fn with_query_kind(mut self, kind: QueryKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_indexed(&self) -> bool {
        self.engine.get().is_some()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query and re-runs it. Called on every input change.
    pub fn set_query(&mut self, text: &str) -> ResultsView<'_> {
        let engine = self.engine.get_or_init(|| {
            SearchEngine::new(self.documents.clone(), self.config.clone())
        });

        self.results = engine.search(&self.kind.query(text));
        self.query = text.to_string();
        self.view()
    }

    pub fn view(&self) -> ResultsView<'_> {
        if self.query.trim().is_empty() {
            ResultsView::Idle
        } else if self.results.is_empty() {
            ResultsView::NoResults { query: &self.query }
        } else {
            ResultsView::Matches(&self.results)
        }
    }

    /// Follows a displayed result: dismisses the UI and returns the target.
    ///
    /// Out-of-range indices select nothing and leave the UI open.
    pub fn select(&mut self, index: usize) -> Option<&SearchDocument> {
        let document = self.results.get(index)?;
        tracing::debug!(url = %document.url, "search result selected");
        (self.on_close)();
        Some(document)
    }

    /// Dismisses the UI without a selection and clears the query.
    pub fn close(&mut self) {
        self.query.clear();
        self.results.clear();
        (self.on_close)();
    }
}
