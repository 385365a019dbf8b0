//! Line-driven search session: every input line is a keystroke-complete query.

use crate::render;
use anyhow::Result;
use sitefind_core::{DocumentList, SearchConfig};
use sitefind_search::{QueryKind, ResultsView, SearchSession};
use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;

/// Runs queries from `input` until a result is selected or input ends.
///
/// A line holding just the number of a displayed result selects it; any other
/// line replaces the query. Returns the selected URL.
pub(crate) fn run(
    documents: DocumentList,
    config: SearchConfig,
    kind: QueryKind,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<Option<String>> {
    let closed = Rc::new(Cell::new(false));
    let on_close = {
        let closed = closed.clone();
        move || closed.set(true)
    };
    let mut session = SearchSession::mount(documents, config, on_close).with_query_kind(kind);
    let mut selected = None;

    for line in input.lines() {
        let line = line?;

        if let Some(n) = selection(&session, &line) {
            selected = session.select(n).map(|doc| doc.url.to_string());
        } else {
            let view = session.set_query(&line);
            render::write_view(out, view)?;
        }

        if closed.get() {
            break;
        }
    }

    if !closed.get() {
        session.close();
    }
    Ok(selected)
}

/// Zero-based index of a displayed result named by `line`, if any.
fn selection(session: &SearchSession, line: &str) -> Option<usize> {
    let ResultsView::Matches(documents) = session.view() else {
        return None;
    };
    let n: usize = line.trim().parse().ok()?;
    (1..=documents.len()).contains(&n).then(|| n - 1)
}
