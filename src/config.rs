use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_DISPLAY_PRECISION, DEFAULT_LOG_FILE,
    DEFAULT_REQUEST_TIMEOUT_SECS, MAX_DISPLAY_PRECISION,
};

const CONFIG_FILE: &str = "config.yaml";

/// User settings, read from `~/.currency-converter/config.yaml`
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Provider root; requests go to `{api_base_url}/latest/{CODE}`
    pub api_base_url: String,
    /// Decimal places in the result line
    pub display_precision: usize,
    pub request_timeout_secs: u64,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            display_precision: DEFAULT_DISPLAY_PRECISION,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Settings {
    /// Directory holding the config file
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".currency-converter")
    }

    /// Load from the default location.
    ///
    /// An unreadable file yields the defaults plus the error, so the caller
    /// can log it once tracing is up.
    pub fn load() -> (Self, Option<anyhow::Error>) {
        Self::load_or_default(&Self::config_dir().join(CONFIG_FILE))
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> (Self, Option<anyhow::Error>) {
        match Self::load_from(path) {
            Ok(settings) => (settings, None),
            Err(e) => {
                let e = e.context(format!("reading {}", path.display()));
                (Settings::default(), Some(e))
            }
        }
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings.normalized())
    }

    fn normalized(mut self) -> Self {
        self.display_precision = self.display_precision.min(MAX_DISPLAY_PRECISION);
        while self.api_base_url.ends_with('/') {
            self.api_base_url.pop();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.display_precision, 2);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "display_precision: 4\napi_base_url: http://localhost:9000/v4/\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.display_precision, 4);
        assert_eq!(settings.api_base_url, "http://localhost:9000/v4");
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn test_precision_is_clamped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "display_precision: 99\n").unwrap();
        assert_eq!(Settings::load_from(&path).unwrap().display_precision, 10);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "display_precision: [not a number\n").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_unreadable_file_falls_back_with_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "display_precision: [oops\n").unwrap();

        let (settings, error) = Settings::load_or_default(&path);
        assert_eq!(settings, Settings::default());
        let error = error.expect("bad file should report an error");
        assert!(error.to_string().contains("config.yaml"));
    }

    #[test]
    fn test_missing_file_has_no_error() {
        let dir = tempdir().unwrap();
        let (settings, error) = Settings::load_or_default(&dir.path().join("config.yaml"));
        assert_eq!(settings, Settings::default());
        assert!(error.is_none());
    }
}
