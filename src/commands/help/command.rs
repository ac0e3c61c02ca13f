use crate::commands::command::Command;
use crate::commands::context::Session;
use crate::core::prelude::*;

#[derive(Debug)]
pub struct HelpCommand {
    session: Arc<Session>,
    entries: Vec<(&'static str, &'static str)>,
}

impl HelpCommand {
    /// `entries` is the registry listing taken before help registers itself.
    pub fn new(session: Arc<Session>, entries: Vec<(&'static str, &'static str)>) -> Self {
        Self { session, entries }
    }

    fn listing(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries
            .iter()
            .copied()
            .chain(std::iter::once((self.name(), self.description())))
    }
}

#[async_trait::async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show all available commands"
    }

    fn matches(&self, command: &str) -> bool {
        crate::matches_exact!(command, "help" | "?" | "commands")
    }

    async fn execute(&self, args: &[&str]) -> Result<String> {
        if let Some(&wanted) = args.first() {
            let wanted = wanted.to_lowercase();
            return Ok(self
                .listing()
                .find(|(name, _)| *name == wanted)
                .map(|(name, description)| format!("{}: {}", name, description))
                .unwrap_or_else(|| self.session.t("commands.unknown", &[&wanted])));
        }

        let width = self.listing().map(|(name, _)| name.len()).max().unwrap_or(0);
        let mut result = self.session.t("commands.help.header", &[]);
        for (name, description) in self.listing() {
            result.push_str(&format!("\n  {:<width$}  {}", name, description, width = width));
        }
        Ok(result)
    }

    fn priority(&self) -> u8 {
        95
    }
}
