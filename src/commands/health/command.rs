use crate::commands::command::Command;
use crate::commands::context::Session;
use crate::core::prelude::*;
use crate::health::{HealthClient, HealthState, HealthStatus};

#[derive(Debug)]
pub struct HealthCommand {
    session: Arc<Session>,
}

impl HealthCommand {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Plain-text card for one health state, in the active language.
    pub fn render(session: &Session, state: &HealthState) -> String {
        match state {
            HealthState::Loading => session.t("health.loading", &[]),
            HealthState::Error(msg) => session.t("health.error", &[msg]),
            HealthState::Success(payload) => {
                let mut badge = session.t(payload.status.label_key(), &[]);
                if let HealthStatus::Unknown(raw) = &payload.status {
                    badge = format!("{}: {}", badge, raw);
                }
                let mut lines = vec![
                    session.t("health.card_title", &[]),
                    format!(
                        "[{}] {}",
                        badge,
                        session.t("health.service", &[&payload.service])
                    ),
                    session.t("health.timestamp", &[&payload.timestamp]),
                ];
                if let Some(info) = payload.first_info() {
                    lines.push(session.t("health.notice", &[info]));
                }
                lines.join("\n")
            }
        }
    }
}

#[async_trait::async_trait]
impl Command for HealthCommand {
    fn name(&self) -> &'static str {
        "health"
    }

    fn description(&self) -> &'static str {
        "Show backend health (health refresh | health check)"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "health" | "status")
    }

    async fn execute(&self, args: &[&str]) -> Result<String> {
        let sub = args.first().map(|arg| arg.to_lowercase());
        match (sub.as_deref(), &self.session.monitor) {
            // One-shot query, independent of the monitor
            (Some("check"), _) => {
                let client = HealthClient::from_config(&self.session.config)?;
                let state = HealthState::from_result(client.fetch().await);
                Ok(Self::render(&self.session, &state))
            }
            (Some("refresh"), Some(monitor)) => {
                monitor.refresh();
                Ok(self.session.t("health.refresh", &[]))
            }
            (None, Some(monitor)) => Ok(Self::render(&self.session, &monitor.state())),
            (None | Some("refresh"), None) => Ok(self.session.t("health.monitor_off", &[])),
            (Some(other), _) => Err(AppError::InvalidArgument(format!(
                "health {}: expected 'refresh' or 'check'",
                other
            ))),
        }
    }

    fn priority(&self) -> u8 {
        80
    }
}
