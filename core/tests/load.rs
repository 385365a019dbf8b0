use sitefind_core::{DocumentList, IndexError, SearchConfig};
use tempfile::TempDir;

/// Verify the index artifact loads from disk in file order.
#[test]
fn test_load_index_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search-index.json");
    std::fs::write(
        &path,
        r#"[
            {"url": "/", "title": "Home", "description": "Research group home"},
            {"url": "/conference", "title": "Conference 2026"}
        ]"#,
    )
    .unwrap();

    let list = DocumentList::load(&path).unwrap();

    let titles: Vec<&str> = list.iter().map(|doc| doc.title.as_str()).collect();
    assert_eq!(titles, vec!["Home", "Conference 2026"]);
}

/// Verify a missing artifact is an IO error, not an empty index.
#[test]
fn test_load_missing_index_file() {
    let dir = TempDir::new().unwrap();

    let err = DocumentList::load(&dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(err, IndexError::Io(_)));
}

/// Verify a truncated artifact is a parse error.
#[test]
fn test_load_truncated_index_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search-index.json");
    std::fs::write(&path, r#"[{"url": "/", "title": "Ho"#).unwrap();

    let err = DocumentList::load(&path).unwrap_err();

    assert!(matches!(err, IndexError::Parse(_)));
}

/// Verify a config written by `save` loads back identically.
#[test]
fn test_config_roundtrip_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search.toml");
    let config = SearchConfig {
        threshold: 0.45,
        distance: 250,
        ..SearchConfig::default()
    };

    config.save(&path).unwrap();

    assert_eq!(SearchConfig::load(&path).unwrap(), config);
}
