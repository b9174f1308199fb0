//! Configuration loaded from disk and applied to the page.

use std::fs;

use gamefolio_engine::{App, ConfigError, GamefolioConfig};
use tempfile::tempdir;

#[test]
fn config_file_customizes_page() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[app]
ascii_only = true
reduced_motion = true

[page]
title = "Mein Portfolio"
brand = "  "
"#,
    )
    .unwrap();

    let config = GamefolioConfig::load_from(&path).unwrap().unwrap();
    let app = App::new(Some(&config));
    assert_eq!(app.page().title, "Mein Portfolio");
    assert_eq!(app.page().brand, "Fabio Voelkner - Developer");
    assert!(app.ui_options().ascii_only);
    assert!(app.ui_options().reduced_motion);
}

#[test]
fn missing_config_is_not_an_error() {
    let dir = tempdir().unwrap();
    let loaded = GamefolioConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn malformed_config_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[page\ntitle = ").unwrap();

    let err = GamefolioConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), path.as_path());
}
