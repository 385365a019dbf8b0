use super::*;
use tempfile::TempDir;

fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("theme.toml")
}

#[test]
fn test_missing_storage_defaults_to_system() {
    let dir = TempDir::new().unwrap();

    let store = ThemeStore::init_from_storage(&store_path(&dir)).unwrap();

    assert_eq!(store.current(), Theme::System);
}

#[test]
fn test_reads_persisted_preference() {
    let dir = TempDir::new().unwrap();
    std::fs::write(store_path(&dir), "theme = \"light\"\n").unwrap();

    let store = ThemeStore::init_from_storage(&store_path(&dir)).unwrap();

    assert_eq!(store.current(), Theme::Light);
}

#[test]
fn test_toggle_writes_through() {
    let dir = TempDir::new().unwrap();
    let mut store = ThemeStore::init_from_storage(&store_path(&dir)).unwrap();

    assert_eq!(store.toggle().unwrap(), Theme::Dark);
    assert_eq!(store.current(), Theme::Dark);

    let reloaded = ThemeStore::init_from_storage(&store_path(&dir)).unwrap();
    assert_eq!(reloaded.current(), Theme::Dark);
}

#[test]
fn test_storage_is_read_only_at_init() {
    let dir = TempDir::new().unwrap();
    let mut owner = ThemeStore::init_from_storage(&store_path(&dir)).unwrap();
    let earlier = ThemeStore::init_from_storage(&store_path(&dir)).unwrap();

    owner.toggle().unwrap();

    assert_eq!(earlier.current(), Theme::System);
    let later = ThemeStore::init_from_storage(&store_path(&dir)).unwrap();
    assert_eq!(later.current(), Theme::Dark);
}

#[test]
fn test_toggle_alternates() {
    let dir = TempDir::new().unwrap();
    let mut store = ThemeStore::init_from_storage(&store_path(&dir)).unwrap();

    store.toggle().unwrap();
    store.toggle().unwrap();

    assert_eq!(store.current(), Theme::Light);
}

#[test]
fn test_failed_write_keeps_current() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("theme.toml");
    let mut store = ThemeStore::init_from_storage(&path).unwrap();

    assert!(matches!(store.toggle(), Err(ThemeError::Io(_))));
    assert_eq!(store.current(), Theme::System);
}

#[test]
fn test_malformed_storage_is_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(store_path(&dir), "theme = \"purple\"").unwrap();

    let err = ThemeStore::init_from_storage(&store_path(&dir)).unwrap_err();

    assert!(matches!(err, ThemeError::Parse(_)));
}
