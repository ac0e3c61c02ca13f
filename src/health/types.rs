// src/health/types.rs
use crate::core::error::Result;
use serde::{Deserialize, Serialize};

/// `status` field as reported. Only the exact string `"healthy"` counts as healthy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
    /// Anything else the backend reports, kept verbatim; rendered as not healthy.
    Unknown(String),
}

impl HealthStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Healthy => "healthy",
            Self::Unhealthy => "unhealthy",
            Self::Unknown(raw) => raw,
        }
    }

    /// Dictionary key for the status badge.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Healthy => "status.healthy",
            Self::Unhealthy | Self::Unknown(_) => "status.unhealthy",
        }
    }
}

impl From<String> for HealthStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "healthy" => Self::Healthy,
            "unhealthy" => Self::Unhealthy,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<HealthStatus> for String {
    fn from(status: HealthStatus) -> Self {
        match status {
            HealthStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthExample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `GET /api/health/`, passed through as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthPayload {
    pub status: HealthStatus,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<HealthExample>,
}

impl HealthPayload {
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }

    /// `examples[0].info`, when present and non-empty.
    pub fn first_info(&self) -> Option<&str> {
        self.examples
            .first()
            .map(|example| example.info.as_str())
            .filter(|info| !info.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthState {
    Loading,
    Error(String),
    Success(HealthPayload),
}

impl HealthState {
    pub fn from_result(result: Result<HealthPayload>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(e) => Self::Error(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn payload(&self) -> Option<&HealthPayload> {
        match self {
            Self::Success(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }
}
