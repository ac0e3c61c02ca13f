// src/commands/context.rs
use crate::core::prelude::*;
use crate::health::HealthMonitor;

/// Everything a command may touch during one shell session.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub store: TranslationStore,
    pub monitor: Option<HealthMonitor>,
}

impl Session {
    pub fn new(config: Config, store: TranslationStore) -> Self {
        Self {
            config,
            store,
            monitor: None,
        }
    }

    pub fn with_monitor(mut self, monitor: HealthMonitor) -> Self {
        self.monitor = Some(monitor);
        self
    }

    pub fn t(&self, key: &str, params: &[&str]) -> String {
        self.store.translate_with(key, params)
    }
}
