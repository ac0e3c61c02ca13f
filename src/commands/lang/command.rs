use crate::commands::command::Command;
use crate::commands::context::Session;
use crate::core::prelude::*;

#[derive(Debug)]
pub struct LanguageCommand {
    session: Arc<Session>,
}

impl LanguageCommand {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    fn show_status(&self) -> String {
        let store = &self.session.store;
        let current = store.active_language();
        let available = store
            .available_languages()
            .iter()
            .map(|lang| format!("{} ({})", lang, store.language_label(*lang)))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{}\n{}",
            self.session.t(
                "language.current",
                &[&format!("{} ({})", current, store.language_label(current))]
            ),
            self.session.t("language.available", &[&available])
        )
    }
}

#[async_trait::async_trait]
impl Command for LanguageCommand {
    fn name(&self) -> &'static str {
        "language"
    }

    fn description(&self) -> &'static str {
        "Show or change the display language"
    }

    fn matches(&self, command: &str) -> bool {
        command.trim().to_lowercase().starts_with("lang")
    }

    async fn execute(&self, args: &[&str]) -> Result<String> {
        match args.first() {
            None => Ok(self.show_status()),
            Some(&code) => match self.session.store.set_language_str(code).await {
                // Confirmation is already in the new language
                Ok(lang) => Ok(self
                    .session
                    .t("language.changed", &[&lang.code().to_uppercase()])),
                Err(AppError::InvalidArgument(_)) => {
                    Ok(self.session.t("language.invalid", &[code]))
                }
                Err(e) => Err(e),
            },
        }
    }

    fn priority(&self) -> u8 {
        70
    }
}
