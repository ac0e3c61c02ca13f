// src/commands/handler.rs

use super::context::Session;
use super::registry::CommandRegistry;
use crate::core::constants::SIG_EXIT;
use crate::core::prelude::*;

#[derive(Debug)]
pub struct CommandResult {
    pub message: String,
    pub success: bool,
    pub should_exit: bool,
}

impl CommandResult {
    fn empty() -> Self {
        Self {
            message: String::new(),
            success: false,
            should_exit: false,
        }
    }
}

pub struct CommandHandler {
    registry: CommandRegistry,
    session: Arc<Session>,
}

impl CommandHandler {
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            registry: crate::create_default_registry(session.clone()),
            session,
        }
    }

    pub async fn handle_input(&self, input: &str) -> CommandResult {
        let input = input.trim();
        let parts: Vec<&str> = input.split_whitespace().collect();

        let Some((command, args)) = parts.split_first() else {
            return CommandResult::empty();
        };

        log::debug!("CommandHandler processing: '{}'", input);

        match self.registry.execute(command, args).await {
            Some(Ok(msg)) => {
                let (message, should_exit) = match msg.strip_prefix(SIG_EXIT) {
                    Some(rest) => (rest.to_string(), true),
                    None => (msg, false),
                };
                CommandResult {
                    message,
                    success: true,
                    should_exit,
                }
            }
            Some(Err(e)) => {
                log::error!("Command error: {}", e);
                CommandResult {
                    message: e.to_string(),
                    success: false,
                    should_exit: false,
                }
            }
            None => {
                log::warn!("Unknown command: {}", input);
                CommandResult {
                    message: self.session.t("commands.unknown", &[command]),
                    success: false,
                    should_exit: false,
                }
            }
        }
    }

    pub fn list_commands(&self) -> Vec<(&'static str, &'static str)> {
        self.registry.list_commands()
    }
}
