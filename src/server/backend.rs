// src/server/backend.rs - state behind the development health endpoint

use crate::core::config::ServerConfig;
use crate::health::{HealthExample, HealthPayload, HealthStatus};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::RwLock;

#[derive(Debug)]
pub struct HealthBackend {
    service_name: String,
    healthy: AtomicBool,
    next_id: AtomicU64,
    notices: RwLock<Vec<HealthExample>>,
}

impl HealthBackend {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            healthy: AtomicBool::new(true),
            next_id: AtomicU64::new(1),
            notices: RwLock::new(Vec::new()),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let backend = Self::new(config.service_name.clone());
        if let Some(notice) = &config.notice {
            backend.add_notice(notice.clone());
        }
        backend
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::Relaxed)
    }

    /// Simulates a failed dependency check; the endpoint then answers 500.
    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::Relaxed);
        log::info!(
            "Dev backend marked {}",
            if healthy { "healthy" } else { "unhealthy" }
        );
    }

    pub fn add_notice(&self, info: impl Into<String>) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let notice = HealthExample {
            id: Some(id),
            info: info.into(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
        };
        self.notices
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notice);
        id
    }

    /// Newest notice only.
    pub fn latest_notices(&self) -> Vec<HealthExample> {
        self.notices
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .cloned()
            .into_iter()
            .collect()
    }

    pub fn payload(&self) -> HealthPayload {
        HealthPayload {
            status: HealthStatus::Healthy,
            service: self.service_name.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            examples: self.latest_notices(),
        }
    }
}
