// src/i18n/store.rs - single-writer translation store
use super::lookup;
use super::persistence::{load_best_effort, persist_best_effort, LanguageStorage};
use super::types::{Catalog, LanguageCode};
use super::DEFAULT_LANGUAGE;
use crate::core::prelude::*;
use tokio::sync::watch;

/// Owns the active language. Consumers read through `&self` or subscribe.
#[derive(Debug)]
pub struct TranslationStore {
    active: watch::Sender<LanguageCode>,
    storage: Box<dyn LanguageStorage>,
    catalog: &'static Catalog,
}

impl TranslationStore {
    /// Reads the durable slot once. Missing, unknown or unreadable values start at `en`.
    pub async fn init(storage: Box<dyn LanguageStorage>) -> Self {
        Self::init_with_catalog(storage, Catalog::embedded()).await
    }

    pub async fn init_with_catalog(
        storage: Box<dyn LanguageStorage>,
        catalog: &'static Catalog,
    ) -> Self {
        let initial = load_best_effort(storage.as_ref())
            .await
            .unwrap_or(DEFAULT_LANGUAGE);
        log::info!("Active language: {}", initial);

        let (active, _) = watch::channel(initial);
        Self {
            active,
            storage,
            catalog,
        }
    }

    pub fn active_language(&self) -> LanguageCode {
        *self.active.borrow()
    }

    pub fn available_languages(&self) -> &'static [LanguageCode] {
        &LanguageCode::ALL
    }

    /// Switches language in memory first, then persists without failing the caller.
    pub async fn set_language(&self, lang: LanguageCode) {
        let previous = self.active.send_replace(lang);
        if previous != lang {
            log::info!("Language changed: {} -> {}", previous, lang);
        }
        persist_best_effort(lang, self.storage.save(lang)).await;
    }

    /// String entry point for user input; unknown codes leave the state untouched.
    pub async fn set_language_str(&self, code: &str) -> Result<LanguageCode> {
        let lang = code.parse::<LanguageCode>().map_err(|e| {
            log::debug!("Rejected language '{}'", code);
            AppError::InvalidArgument(e.to_string())
        })?;
        self.set_language(lang).await;
        Ok(lang)
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        lookup::resolve(
            self.catalog.dictionary(self.active_language()),
            self.catalog.dictionary(DEFAULT_LANGUAGE),
            key,
        )
    }

    pub fn translate_with(&self, key: &str, params: &[&str]) -> String {
        lookup::format(self.translate(key), params)
    }

    /// Display name of `lang` in the active language.
    pub fn language_label(&self, lang: LanguageCode) -> &str {
        self.translate(lang.label_key())
    }

    pub fn subscribe(&self) -> watch::Receiver<LanguageCode> {
        self.active.subscribe()
    }
}
