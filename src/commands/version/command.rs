use crate::commands::command::Command;
use crate::commands::context::Session;
use crate::core::constants::{APP_TITLE, VERSION};
use crate::core::prelude::*;

#[derive(Debug)]
pub struct VersionCommand {
    session: Arc<Session>,
}

impl VersionCommand {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }
}

#[async_trait::async_trait]
impl Command for VersionCommand {
    fn name(&self) -> &'static str {
        "version"
    }

    fn description(&self) -> &'static str {
        "Show application version"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "version" | "ver")
    }

    async fn execute(&self, _args: &[&str]) -> Result<String> {
        Ok(self.session.t("commands.version", &[APP_TITLE, VERSION]))
    }

    fn priority(&self) -> u8 {
        40
    }
}
