// src/health/client.rs
use super::types::HealthPayload;
use crate::core::prelude::*;

/// Issues `GET <base-url>/api/health/`, one request per call.
#[derive(Debug, Clone)]
pub struct HealthClient {
    http: reqwest::Client,
    url: String,
}

impl HealthClient {
    pub fn new(health_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("HTTP client failed: {}", e)))?;

        Ok(Self {
            http,
            url: health_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.health_url(), config.api.timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> Result<HealthPayload> {
        log::debug!("GET {}", self.url);
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Health endpoint answered {}", status);
            return Err(AppError::RemoteUnavailable(format!(
                "Health API error: {}",
                status.as_u16()
            )));
        }

        Ok(response.json::<HealthPayload>().await?)
    }
}
