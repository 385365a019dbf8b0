use sitefind_core::{DocumentList, SearchDocument};
use sitefind_search::ResultsView;
use std::io::{self, Write};

pub(crate) fn write_view(out: &mut impl Write, view: ResultsView<'_>) -> io::Result<()> {
    match view {
        ResultsView::Idle => Ok(()),
        ResultsView::NoResults { query } => writeln!(out, "No results for \"{}\"", query.trim()),
        ResultsView::Matches(documents) => {
            for (n, doc) in documents.iter().enumerate() {
                writeln!(out, "{:>3}. {}  {}", n + 1, doc.title, doc.url)?;
                if let Some(description) = &doc.description {
                    writeln!(out, "     {description}")?;
                }
            }
            Ok(())
        }
    }
}

/// Matches as a JSON array; idle and no-result views are `[]`.
pub(crate) fn write_json(out: &mut impl Write, view: ResultsView<'_>) -> io::Result<()> {
    let documents: &[SearchDocument] = match view {
        ResultsView::Matches(documents) => documents,
        ResultsView::Idle | ResultsView::NoResults { .. } => &[],
    };
    serde_json::to_writer_pretty(&mut *out, documents)?;
    writeln!(out)
}

pub(crate) fn write_check(out: &mut impl Write, documents: &DocumentList) -> io::Result<()> {
    writeln!(out, "{} documents", documents.len())?;
    let duplicates = documents.duplicate_urls();
    if duplicates.is_empty() {
        return Ok(());
    }
    writeln!(out, "{} duplicate urls:", duplicates.len())?;
    for url in duplicates {
        writeln!(out, "  {url}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitefind_core::PageUrl;

    fn doc(url: &str, title: &str, description: Option<&str>) -> SearchDocument {
        SearchDocument {
            url: PageUrl::try_new(url.to_string()).unwrap(),
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }

    fn render(view: ResultsView<'_>) -> String {
        let mut out = Vec::new();
        write_view(&mut out, view).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_no_results_is_explicit() {
        assert_eq!(
            render(ResultsView::NoResults { query: "xyz123 " }),
            "No results for \"xyz123\"\n"
        );
    }

    #[test]
    fn test_idle_renders_nothing() {
        assert_eq!(render(ResultsView::Idle), "");
    }

    #[test]
    fn test_matches_are_numbered() {
        let documents = [
            doc("/about", "About AMDCG", Some("Advanced Materials group")),
            doc("/contact", "Contact Us", None),
        ];

        assert_eq!(
            render(ResultsView::Matches(&documents)),
            "  1. About AMDCG  /about\n     Advanced Materials group\n  2. Contact Us  /contact\n"
        );
    }

    #[test]
    fn test_json_for_no_results_is_empty_array() {
        let mut out = Vec::new();

        write_json(&mut out, ResultsView::NoResults { query: "x" }).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[test]
    fn test_check_reports_duplicates() {
        let documents = DocumentList::new(vec![
            doc("/a", "A", None),
            doc("/a", "A", None),
            doc("/b", "B", None),
        ]);
        let mut out = Vec::new();

        write_check(&mut out, &documents).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "3 documents\n1 duplicate urls:\n  /a\n"
        );
    }
}
