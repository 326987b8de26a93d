//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shop_observability::{LogFormat, LogLevel};

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "SHOP_API_URL";

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Page log settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Apply an API URL override, typically from [`API_URL_ENV`].
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }
}

/// Storefront API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Server origin, e.g. `http://localhost:5000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Value of the `session` cookie for authenticated calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            session_cookie: None,
        }
    }
}

/// Page log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `json` or `human`.
    #[serde(default = "default_log_format")]
    pub format: LogFormat,

    /// Minimum level written.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_format() -> LogFormat {
    LogFormat::Human
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl LoggingConfig {
    /// Parsed level, warn when unrecognised.
    pub fn min_level(&self) -> LogLevel {
        self.level.parse().unwrap_or(LogLevel::Warn)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            level: default_log_level(),
        }
    }
}

/// Generate a default storefront.toml.
pub fn generate_default_config() -> String {
    r#"# Storefront client configuration

[api]
base_url = "http://localhost:5000"
timeout_secs = 10
# session_cookie = "..."

[logging]
format = "human"
level = "warn"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.logging.min_level(), LogLevel::Warn);
    }

    #[test]
    fn test_generated_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_toml_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[api]\nbase_url = \"http://shop.test\"\n").unwrap();

        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.api.base_url, "http://shop.test");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.json");
        let path = path.to_str().unwrap();

        let mut config = CliConfig::default();
        config.api.session_cookie = Some("abc".to_string());
        config.logging.format = LogFormat::Json;
        config.save(path).unwrap();

        assert_eq!(CliConfig::load(path).unwrap(), config);
    }

    #[test]
    fn test_base_url_override() {
        let config = CliConfig::default()
            .with_base_url_override(Some("http://staging.test".to_string()));
        assert_eq!(config.api.base_url, "http://staging.test");

        let unchanged = CliConfig::default().with_base_url_override(Some("  ".to_string()));
        assert_eq!(unchanged.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_bad_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[api\n").unwrap();
        assert!(CliConfig::load(path.to_str().unwrap()).is_err());
    }
}
