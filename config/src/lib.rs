//! Configuration for Gamefolio.
//!
//! Reads `~/.gamefolio/config.toml`. Every section is optional; a missing file
//! means "use defaults" and is not an error.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//!
//! [page]
//! title = "Fabio Voelkner - GAMEFOLIO Prototype"
//! description = "Portfolio prototype in Next.js with drag&drop cards as menu"
//! brand = "Fabio Voelkner - Developer"
//! ```

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use gamefolio_types::ui::UiOptions;

pub const DEFAULT_TITLE: &str = "Fabio Voelkner - GAMEFOLIO Prototype";
pub const DEFAULT_DESCRIPTION: &str = "Portfolio prototype in Next.js with drag&drop cards as menu";
pub const DEFAULT_BRAND: &str = "Fabio Voelkner - Developer";

const ENV_ASCII: &str = "GAMEFOLIO_ASCII";
const ENV_HIGH_CONTRAST: &str = "GAMEFOLIO_HIGH_CONTRAST";

#[derive(Debug, Default, Deserialize)]
pub struct GamefolioConfig {
    pub app: Option<AppConfig>,
    pub page: Option<PageConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for borders and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Keep the dragged card in the hand instead of following the pointer.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Page shell metadata. Opaque to the card logic.
#[derive(Debug, Default, Deserialize)]
pub struct PageConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
}

/// Resolved page shell metadata with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub brand: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            brand: DEFAULT_BRAND.to_string(),
        }
    }
}

impl GamefolioConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// UI options from `[app]`, with environment overrides applied on top.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let mut options = self
            .app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default();

        if env_flag(ENV_ASCII) {
            options.ascii_only = true;
        }
        if env_flag(ENV_HIGH_CONTRAST) {
            options.high_contrast = true;
        }
        options
    }

    #[must_use]
    pub fn page_meta(&self) -> PageMeta {
        let defaults = PageMeta::default();
        let Some(page) = self.page.as_ref() else {
            return defaults;
        };
        PageMeta {
            title: non_blank(page.title.as_deref()).unwrap_or(defaults.title),
            description: non_blank(page.description.as_deref()).unwrap_or(defaults.description),
            brand: non_blank(page.brand.as_deref()).unwrap_or(defaults.brand),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn env_flag(name: &str) -> bool {
    match env::var(name) {
        Ok(raw) => is_truthy(&raw),
        Err(_) => false,
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".gamefolio").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config: GamefolioConfig = toml::from_str("").unwrap();
        assert!(config.app.is_none());
        assert!(config.page.is_none());
        assert_eq!(config.page_meta(), PageMeta::default());
    }

    #[test]
    fn parse_app_config() {
        let toml_str = r#"
[app]
ascii_only = true
reduced_motion = true
"#;
        let config: GamefolioConfig = toml::from_str(toml_str).unwrap();
        let app = config.app.as_ref().unwrap();
        assert!(app.ascii_only);
        assert!(!app.high_contrast);
        assert!(app.reduced_motion);
    }

    #[test]
    fn parse_page_config_keeps_defaults_for_blank_fields() {
        let toml_str = r#"
[page]
title = "Portfolio"
brand = "   "
"#;
        let config: GamefolioConfig = toml::from_str(toml_str).unwrap();
        let meta = config.page_meta();
        assert_eq!(meta.title, "Portfolio");
        assert_eq!(meta.brand, DEFAULT_BRAND);
        assert_eq!(meta.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn load_from_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = GamefolioConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[page]\nbrand = \"Dev\"\n").unwrap();
        let config = GamefolioConfig::load_from(&path).unwrap().unwrap();
        assert_eq!(config.page_meta().brand, "Dev");
    }

    #[test]
    fn parse_error_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[app\nascii_only = ").unwrap();
        let err = GamefolioConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy(" YeS "));
        assert!(is_truthy("TRUE"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("on"));
        assert!(!is_truthy(""));
    }
}
