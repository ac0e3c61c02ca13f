#[macro_export]
macro_rules! matches_exact {
    ($cmd:expr, $($pattern:literal)|+) => {
        matches!($cmd.trim().to_lowercase().as_str(), $($pattern)|+)
    };
}

// Module definitions
pub mod commands;
pub mod core;
pub mod health;
pub mod i18n;
pub mod server;
pub mod setup;

// Essential re-exports
pub use commands::{Command, CommandHandler, CommandRegistry, Session};
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use health::{HealthClient, HealthMonitor, HealthState};
pub use i18n::{LanguageCode, TranslationStore};

use std::sync::Arc;

pub fn create_default_registry(session: Arc<Session>) -> CommandRegistry {
    use commands::{
        exit::ExitCommand, health::HealthCommand, help::HelpCommand, lang::LanguageCommand,
        version::VersionCommand,
    };

    let mut registry = CommandRegistry::new();

    registry.register(HealthCommand::new(session.clone()));
    registry.register(LanguageCommand::new(session.clone()));
    registry.register(VersionCommand::new(session.clone()));
    registry.register(ExitCommand::new(session.clone()));
    registry.initialize();

    let entries = registry.list_commands();
    registry.register(HelpCommand::new(session, entries));

    registry.initialize();
    registry
}

/// Builds a session: language from the durable slot, health monitor polling the configured API.
pub async fn start_session(config: Config) -> Result<Arc<Session>> {
    let storage = i18n::TomlFileStorage::new(config.language_path());
    let store = TranslationStore::init(Box::new(storage)).await;

    let client = HealthClient::from_config(&config)?;
    let monitor = HealthMonitor::spawn(client, config.api.poll_interval);

    Ok(Arc::new(Session::new(config, store).with_monitor(monitor)))
}
