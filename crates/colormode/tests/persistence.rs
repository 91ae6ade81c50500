//! Preferences written through a `FileStore` survive across controllers.

use std::fs;

use colormode::{
    ColorMode, Config, FileStore, ManualPreference, PreferenceStore, RootElement,
    ThemePreference, ThemePreferenceController,
};
use tempfile::TempDir;

fn session(
    store: FileStore,
    os: ColorMode,
) -> ThemePreferenceController<FileStore, ManualPreference, RootElement> {
    ThemePreferenceController::new(store, ManualPreference::new(os), RootElement::new())
}

#[test]
fn test_toggle_persists_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("colormode").join("prefs.json");

    let mut first = session(FileStore::new(&path), ColorMode::Dark);
    assert_eq!(first.initialize(), ColorMode::Dark);
    assert_eq!(first.toggle().unwrap(), ColorMode::Light);

    let mut second = session(FileStore::new(&path), ColorMode::Dark);
    assert_eq!(second.initialize(), ColorMode::Light);
    assert_eq!(second.preference(), ThemePreference::Light);
}

#[test]
fn test_initialize_does_not_create_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");

    let mut c = session(FileStore::new(&path), ColorMode::Light);
    c.initialize();
    c.initialize();
    assert!(!path.exists());
}

#[test]
fn test_malformed_file_reads_as_unset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "{ not json").unwrap();

    let mut c = session(FileStore::new(&path), ColorMode::Dark);
    assert_eq!(c.initialize(), ColorMode::Dark);
    assert_eq!(c.preference(), ThemePreference::Unset);

    assert_eq!(c.toggle().unwrap(), ColorMode::Light);
    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("light"));
}

#[test]
fn test_unknown_value_in_file_is_unset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, r#"{"color-theme": "sepia"}"#).unwrap();

    let mut c = session(FileStore::new(&path), ColorMode::Light);
    assert_eq!(c.initialize(), ColorMode::Light);
    assert!(c.preference().is_unset());
}

#[test]
fn test_two_keys_share_one_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");

    let mut site = ThemePreferenceController::with_config(
        FileStore::new(&path),
        ManualPreference::new(ColorMode::Light),
        RootElement::new(),
        Config::new().storage_key("site"),
    );
    site.initialize();
    site.toggle().unwrap();

    let mut docs = ThemePreferenceController::with_config(
        FileStore::new(&path),
        ManualPreference::new(ColorMode::Light),
        RootElement::new(),
        Config::new().storage_key("docs"),
    );
    assert_eq!(docs.initialize(), ColorMode::Light);
    docs.toggle().unwrap();
    docs.toggle().unwrap();

    let mut site_again = ThemePreferenceController::with_config(
        FileStore::new(&path),
        ManualPreference::new(ColorMode::Light),
        RootElement::new(),
        Config::new().storage_key("site"),
    );
    assert_eq!(site_again.initialize(), ColorMode::Dark);
}

#[test]
fn test_toggle_after_another_session_wrote_flips_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, r#"{"color-theme": "dark"}"#).unwrap();

    let mut first = session(FileStore::new(&path), ColorMode::Light);
    assert_eq!(first.initialize(), ColorMode::Dark);
    let flips = first.presentation().flips();

    let mut second = session(FileStore::new(&path), ColorMode::Light);
    second.initialize();
    second.toggle().unwrap();

    assert_eq!(first.toggle().unwrap(), ColorMode::Light);
    assert_eq!(first.presentation().flips(), flips + 1);
    assert_eq!(
        FileStore::new(&path).get("color-theme").unwrap().as_deref(),
        Some("light")
    );
}
