// src/setup/setup_toml.rs

use crate::core::constants::{CONFIG_DIR, CONFIG_FILE};
use crate::core::prelude::*;
use std::path::PathBuf;
use tokio::fs;

const DEFAULT_CONFIG: &str = r#"[general]
log_level = "info"

[api]
# Overridden by the WORDTRAINER_API_URL environment variable
base_url = "http://localhost:8000"
# Health polling cadence (250 - 600000 ms)
poll_interval_ms = 5000
timeout_ms = 10000

[server]
# Local development health endpoint (`wordtrainer-dash serve`)
host = "127.0.0.1"
port = 8000
service_name = "wordtrainer-backend"
notice = "Development backend is running."

[language]
current = "en"
"#;

fn base_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
}

pub fn default_config_path() -> PathBuf {
    base_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

pub async fn ensure_config_exists() -> Result<PathBuf> {
    let config_path = default_config_path();

    if let Some(config_dir) = config_path.parent() {
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await.map_err(AppError::Io)?;
            log::debug!("Config directory created: {}", config_dir.display());
        }
    }

    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)
            .await
            .map_err(AppError::Io)?;
        log::info!("Config file created: {}", config_path.display());
    }

    Ok(config_path)
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(base_dir) = base_dir() {
        paths.push(base_dir.join(CONFIG_DIR).join(CONFIG_FILE));
        paths.push(base_dir.join(CONFIG_FILE));
        paths.push(base_dir.join("config").join(CONFIG_FILE));
    }
    #[cfg(debug_assertions)]
    {
        paths.push(PathBuf::from(CONFIG_FILE));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.server.port, 8000);
        assert_eq!(
            config.server.notice.as_deref(),
            Some("Development backend is running.")
        );
    }

    #[test]
    fn default_path_is_first_candidate() {
        let paths = get_config_paths();
        assert_eq!(paths.first(), Some(&default_config_path()));
    }
}
