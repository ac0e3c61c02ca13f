// src/health/mod.rs
pub mod client;
pub mod monitor;
pub mod types;

pub use client::HealthClient;
pub use monitor::HealthMonitor;
pub use types::{HealthExample, HealthPayload, HealthState, HealthStatus};
