//! Site search: typo-tolerant queries over a static page index.
//!
//! # Design
//!
//! - The document list is loaded once and never mutated; the index over it
//!   is built at most once per session and then only read.
//! - Two query kinds share the same index:
//!   - `Fuzzy`: approximate matching with a normalized edit-distance
//!     threshold, ranked by a weighted per-field score.
//!   - `Subsequence`: nucleo's fzf-style matcher.
//! - Queries are synchronous and cannot fail; no match is an empty result.
//!
//! # Session API
//!
//! - `SearchSession::mount()`: Takes the documents and a close callback
//! - `set_query()`: Runs the query and returns what to display
//! - `select()`, `close()`: Dismiss the UI

mod engine;
mod query;
mod session;

pub use engine::SearchEngine;
pub use query::{QueryKind, SearchQuery};
pub use session::{ResultsView, SearchSession};
pub use sitefind_core::{CaseMatching, DocumentList, SearchConfig, SearchDocument};
