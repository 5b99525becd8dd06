// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application configuration loaded from an optional TOML file.

pub mod style;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

pub use style::ViewStyle;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GITCRYPT_DEMO_CONFIG";

/// Which files to show, where to find them, and how the view looks.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Preferred file; shown when it decodes as text.
    pub primary_file: String,
    /// Degraded-mode substitute for the primary file.
    pub fallback_file: String,
    /// Folder to read resources from instead of the bundled copies.
    pub resource_dir: Option<PathBuf>,
    pub style: ViewStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            primary_file: "Secret.txt".to_string(),
            fallback_file: "Unsecret.txt".to_string(),
            resource_dir: None,
            style: ViewStyle::default(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse configuration")
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or is not valid TOML
    /// for this schema.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file: {:?}", path))
    }
}

/// Load configuration from `$GITCRYPT_DEMO_CONFIG` or the user config dir.
///
/// An explicitly named file must exist; the default location is optional and
/// falls back to built-in defaults when absent.
pub fn load_config() -> Result<AppConfig> {
    if let Some(path) = env::var_os(CONFIG_ENV).map(PathBuf::from) {
        info!(path = %path.display(), "loading config from {CONFIG_ENV}");
        return AppConfig::from_file(&path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            info!(path = %path.display(), "loading config");
            AppConfig::from_file(&path)
        }
        _ => {
            debug!("no config file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// `<config_dir>/gitcrypt-demo/config.toml` when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gitcrypt-demo").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = AppConfig::from_toml_str("").expect("empty config parses");

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.primary_file, "Secret.txt");
        assert_eq!(config.fallback_file, "Unsecret.txt");
        assert!(config.resource_dir.is_none());
    }

    #[test]
    fn partial_document_overrides_only_given_keys() {
        let config = AppConfig::from_toml_str(
            r#"
            fallback_file = "Public.md"
            resource_dir = "/srv/demo"

            [style]
            icon_size = 64.0
            "#,
        )
        .expect("config parses");

        assert_eq!(config.primary_file, "Secret.txt");
        assert_eq!(config.fallback_file, "Public.md");
        assert_eq!(config.resource_dir, Some(PathBuf::from("/srv/demo")));
        assert_eq!(config.style.icon_size, 64.0);
        assert_eq!(config.style.background, ViewStyle::default().background);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AppConfig::from_toml_str("primary = \"typo.txt\"").unwrap_err();

        assert!(err.to_string().contains("Failed to parse configuration"));
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "primary_file = \"Other.txt\"\n").expect("write");

        let config = AppConfig::from_file(&path).expect("config loads");

        assert_eq!(config.primary_file, "Other.txt");
    }

    #[test]
    fn from_file_missing_path_reports_it() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.toml");

        let err = AppConfig::from_file(&path).unwrap_err();

        assert!(err.to_string().contains("absent.toml"));
    }
}
