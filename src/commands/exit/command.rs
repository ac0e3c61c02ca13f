use crate::commands::command::Command;
use crate::commands::context::Session;
use crate::core::constants::SIG_EXIT;
use crate::core::prelude::*;

#[derive(Debug)]
pub struct ExitCommand {
    session: Arc<Session>,
}

impl ExitCommand {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }
}

#[async_trait::async_trait]
impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Exit the application"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "exit" | "quit" | "q")
    }

    async fn execute(&self, _args: &[&str]) -> Result<String> {
        Ok(format!("{}{}", SIG_EXIT, self.session.t("commands.exit", &[])))
    }

    fn priority(&self) -> u8 {
        100
    }
}
