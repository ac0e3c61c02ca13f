// src/core/config.rs
use crate::core::constants::{
    API_URL_ENV, DEFAULT_API_URL, DEFAULT_POLL_INTERVAL, DEFAULT_REQUEST_TIMEOUT,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SERVICE_NAME, MAX_POLL_INTERVAL,
    MIN_POLL_INTERVAL,
};
use crate::core::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// TOML Configuration Structure
#[derive(Debug, Serialize, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    general: Option<GeneralConfig>,
    #[serde(default)]
    api: Option<ApiConfigToml>,
    #[serde(default)]
    server: Option<ServerConfigToml>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiConfigToml {
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_poll_interval")]
    poll_interval_ms: u64,
    #[serde(default = "default_timeout")]
    timeout_ms: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct ServerConfigToml {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_service_name")]
    service_name: String,
    #[serde(default)]
    notice: Option<String>,
}

// Default Functions
fn default_log_level() -> String {
    "info".into()
}
fn default_base_url() -> String {
    DEFAULT_API_URL.into()
}
fn default_poll_interval() -> u64 {
    DEFAULT_POLL_INTERVAL
}
fn default_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT
}
fn default_host() -> String {
    DEFAULT_SERVER_HOST.into()
}
fn default_port() -> u16 {
    DEFAULT_SERVER_PORT
}
fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.into()
}

// Main Configuration Structures
#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<PathBuf>,
    pub log_level: String,
    pub api: ApiConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub poll_interval: Duration,
    pub timeout: Duration,
}

/// Settings for the local development health endpoint.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub service_name: String,
    pub notice: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.into(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL),
            timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.into(),
            port: DEFAULT_SERVER_PORT,
            service_name: DEFAULT_SERVICE_NAME.into(),
            notice: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: default_log_level(),
            api: ApiConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Loads the first parseable config file, creating the default one when
    /// none exists, then applies environment overrides. A broken file never
    /// stops startup: the defaults are used and the file stays the config path.
    pub async fn load() -> Self {
        let mut broken = None;
        for path in crate::setup::setup_toml::get_config_paths() {
            if path.exists() {
                match Self::from_file(&path).await {
                    Ok(config) => {
                        log::debug!("Config loaded: {}", path.display());
                        return config.with_env_overrides();
                    }
                    Err(e) => {
                        log::warn!("Skipping config {}: {}", path.display(), e);
                        broken.get_or_insert(path);
                    }
                }
            }
        }

        if let Some(path) = broken {
            log::warn!("No usable config file, using defaults");
            return Self::defaults_at(path).with_env_overrides();
        }

        let path = match crate::setup::setup_toml::ensure_config_exists().await {
            Ok(path) => {
                log::debug!("New config: {}", path.display());
                path
            }
            Err(e) => {
                log::warn!("Could not create config file: {}", e);
                crate::setup::setup_toml::default_config_path()
            }
        };
        Self::load_or_default(path).await.with_env_overrides()
    }

    /// Reads `path`, falling back to the defaults when it is missing or invalid.
    pub async fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::from_file(&path).await {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Config {} unusable, using defaults: {}", path.display(), e);
                Self::defaults_at(path)
            }
        }
    }

    fn defaults_at(path: PathBuf) -> Self {
        Self {
            config_path: Some(path),
            ..Self::default()
        }
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;
        let mut config = Self::parse(&content)?;
        config.config_path = Some(path.as_ref().to_path_buf());
        Ok(config)
    }

    /// Parses TOML content without touching the filesystem or environment.
    pub fn parse(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| AppError::Config(format!("TOML: {}", e)))?;

        let api = file.api.map_or_else(ApiConfig::default, |a| {
            let poll = Self::clamp(
                a.poll_interval_ms,
                MIN_POLL_INTERVAL,
                MAX_POLL_INTERVAL,
                DEFAULT_POLL_INTERVAL,
            );
            if poll != a.poll_interval_ms {
                log::warn!(
                    "poll_interval_ms {} out of range, using {}",
                    a.poll_interval_ms,
                    poll
                );
            }
            ApiConfig {
                base_url: Self::normalize_base_url(&a.base_url),
                poll_interval: Duration::from_millis(poll),
                timeout: Duration::from_millis(a.timeout_ms.max(1)),
            }
        });

        let server = file
            .server
            .map_or_else(ServerConfig::default, |s| ServerConfig {
                host: s.host,
                port: s.port,
                service_name: s.service_name,
                notice: s.notice.filter(|n| !n.trim().is_empty()),
            });

        Ok(Self {
            config_path: None,
            log_level: file
                .general
                .map_or_else(default_log_level, |g| g.log_level),
            api,
            server,
        })
    }

    /// `WORDTRAINER_API_URL` wins over the file value when set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        let value = std::env::var(API_URL_ENV).ok();
        self.with_api_url_override(value.as_deref())
    }

    pub fn with_api_url_override(mut self, value: Option<&str>) -> Self {
        if let Some(url) = value.map(str::trim).filter(|u| !u.is_empty()) {
            log::debug!("API base URL overridden: {}", url);
            self.api.base_url = Self::normalize_base_url(url);
        }
        self
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Durable slot for the active language; shares the config file.
    pub fn language_path(&self) -> PathBuf {
        self.config_path
            .clone()
            .unwrap_or_else(crate::setup::setup_toml::default_config_path)
    }

    pub fn health_url(&self) -> String {
        format!(
            "{}{}",
            self.api.base_url,
            crate::core::constants::HEALTH_PATH
        )
    }

    // Helper methods
    fn clamp(value: u64, min: u64, max: u64, default: u64) -> u64 {
        if value < min || value > max {
            default
        } else {
            value
        }
    }

    fn normalize_base_url(url: &str) -> String {
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            DEFAULT_API_URL.into()
        } else {
            trimmed.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(
            config.api.poll_interval,
            Duration::from_millis(DEFAULT_POLL_INTERVAL)
        );
        assert_eq!(config.server.service_name, DEFAULT_SERVICE_NAME);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn out_of_range_poll_interval_is_clamped() {
        let config = Config::parse("[api]\npoll_interval_ms = 0\n").unwrap();
        assert_eq!(
            config.api.poll_interval,
            Duration::from_millis(DEFAULT_POLL_INTERVAL)
        );
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let config = Config::parse("[api]\nbase_url = \"http://api.test:9000/\"\n").unwrap();
        assert_eq!(config.health_url(), "http://api.test:9000/api/health/");
    }

    #[test]
    fn override_replaces_base_url_only_when_non_empty() {
        let config = Config::default().with_api_url_override(Some("  "));
        assert_eq!(config.api.base_url, DEFAULT_API_URL);

        let config = Config::default().with_api_url_override(Some("http://remote:1234"));
        assert_eq!(config.api.base_url, "http://remote:1234");
    }

    #[test]
    fn language_section_is_ignored_by_config() {
        let config = Config::parse("[language]\ncurrent = \"de\"\n").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        assert!(matches!(
            Config::parse("[api\nbase_url ="),
            Err(AppError::Config(_))
        ));
    }

    #[tokio::test]
    async fn broken_file_falls_back_to_defaults_at_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        std::fs::write(&path, "[language\ncurrent = \"de\"\n").unwrap();

        let config = Config::load_or_default(&path).await;
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.config_path(), Some(path.as_path()));
        assert_eq!(config.language_path(), path);

        let store = TranslationStore::init(Box::new(
            crate::i18n::TomlFileStorage::new(config.language_path()),
        ))
        .await;
        assert_eq!(store.active_language(), LanguageCode::En);
    }

    #[tokio::test]
    async fn readable_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        std::fs::write(&path, "[general]\nlog_level = \"debug\"\n").unwrap();

        let config = Config::load_or_default(&path).await;
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.config_path(), Some(path.as_path()));
    }

    #[test]
    fn blank_notice_is_dropped() {
        let config = Config::parse("[server]\nnotice = \"  \"\n").unwrap();
        assert!(config.server.notice.is_none());
    }
}
