//! Layered CLI settings: defaults, then the config file, then `AGORA_*`
//! environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use agora_client::{ClientConfig, RetryConfig};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub gateway_url: String,
    pub assistant_url: Option<String>,
    pub timeout_secs: u64,
    pub max_retries: usize,
    /// Session file; defaults to `$CONFIG_DIR/agora/session.json`
    pub session_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            gateway_url: client.gateway_url,
            assistant_url: client.assistant_url,
            timeout_secs: client.timeout_secs,
            max_retries: client.retry.max_retries,
            session_file: None,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("agora").join("config.toml"))
}

impl Settings {
    /// Read the config file (missing is fine) and the environment.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let path = config_file.map(Path::to_path_buf).or_else(default_config_path);
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(config_file.is_some()));
        }
        builder
            .add_source(Environment::with_prefix("AGORA").try_parsing(true))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Command-line flags win over everything else.
    pub fn with_overrides(mut self, gateway_url: Option<String>, assistant_url: Option<String>) -> Self {
        if let Some(url) = gateway_url {
            self.gateway_url = url;
        }
        if assistant_url.is_some() {
            self.assistant_url = assistant_url;
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.gateway_url.trim_end_matches('/'));
        config.timeout_secs = self.timeout_secs;
        config.retry = RetryConfig { max_retries: self.max_retries, ..RetryConfig::default() };
        if let Some(url) = self.assistant_url.as_deref().filter(|u| !u.trim().is_empty()) {
            config = config.with_assistant_url(url);
        }
        config
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Settings::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "gateway_url = \"https://agora.example/api\"\ntimeout_secs = 5").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.gateway_url, "https://agora.example/api");
        assert_eq!(settings.timeout_secs, 5);
        assert_eq!(settings.max_retries, RetryConfig::default().max_retries);
    }

    #[test]
    fn test_flags_override_file() {
        let settings = Settings::default().with_overrides(Some("http://flag".to_string()), None);
        assert_eq!(settings.gateway_url, "http://flag");
        assert_eq!(settings.assistant_url, None);
    }

    #[test]
    fn test_client_config() {
        let settings = Settings {
            gateway_url: "http://gw/".to_string(),
            assistant_url: Some(" ".to_string()),
            timeout_secs: 10,
            max_retries: 0,
            session_file: None,
        };
        let config = settings.client_config();
        assert_eq!(config.gateway_url, "http://gw");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.retry.max_retries, 0);
        assert!(config.assistant_url.is_none());
    }
}
