use crate::backend::utils::paths::{default_download_dir, get_config_path};
use anyhow::Context;
use serde::{Deserialize, Serialize};

use std::path::{Path, PathBuf};

/// Environment variable overriding [`AppConfig::api_url`].
pub const API_URL_ENV: &str = "FILEDROP_API_URL";
/// Environment variable overriding [`AppConfig::download_dir`].
pub const DOWNLOAD_DIR_ENV: &str = "FILEDROP_DOWNLOAD_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the file server, without the `/files` suffix.
    pub api_url: String,
    pub download_dir: Option<PathBuf>,
    /// Limit for establishing a connection.
    pub connect_timeout_secs: u64,
    /// Limit for a single stalled read. A transfer that keeps making progress never times out.
    pub read_timeout_secs: u64,
    pub window: WindowSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            download_dir: None,
            connect_timeout_secs: 10,
            read_timeout_secs: 30,
            window: WindowSettings::default(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 760.0,
        }
    }
}

impl AppConfig {
    /// Loads the config file if present, then applies environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::load_or_default(get_config_path())?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Reads `path` when it resolved and exists. The file is optional, so an
    /// unresolvable location only costs a warning.
    fn load_or_default(path: anyhow::Result<PathBuf>) -> anyhow::Result<Self> {
        match path {
            Ok(path) if path.exists() => Self::from_file(&path),
            Ok(path) => {
                log::debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => {
                log::warn!("Cannot locate config directory ({e}), using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Rejects values the HTTP client cannot work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.connect_timeout_secs == 0 {
            anyhow::bail!("connect_timeout_secs must be greater than zero");
        }
        if self.read_timeout_secs == 0 {
            anyhow::bail!("read_timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// Applies overrides from `lookup`, normally `std::env::var`. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = lookup(API_URL_ENV) {
            self.api_url = url;
        }
        if let Some(dir) = lookup(DOWNLOAD_DIR_ENV) {
            self.download_dir = Some(PathBuf::from(dir));
        }
    }

    /// The configured download directory, or `~/Downloads`.
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .unwrap_or_else(default_download_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_points_at_local_server() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.read_timeout_secs, 30);
        assert!(config.download_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"api_url":"http://files.internal:8080"}"#).unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.api_url, "http://files.internal:8080");
        assert_eq!(config.read_timeout_secs, 30);
        assert_eq!(config.window, WindowSettings::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_unresolvable_config_dir_falls_back_to_defaults() {
        let config =
            AppConfig::load_or_default(Err(anyhow::anyhow!("Could not determine home directory")))
                .unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(Ok(dir.path().join("config.json"))).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"read_timeout_secs":0}"#).unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));

        let config = AppConfig {
            connect_timeout_secs: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (API_URL_ENV, "https://example.org/api"),
            (DOWNLOAD_DIR_ENV, "/tmp/drops"),
        ]);
        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|value| value.to_string()));

        assert_eq!(config.api_url, "https://example.org/api");
        assert_eq!(config.download_dir(), PathBuf::from("/tmp/drops"));
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| (key == API_URL_ENV).then(|| "  ".to_string()));
        assert_eq!(config.api_url, "http://localhost:3000");
    }
}
