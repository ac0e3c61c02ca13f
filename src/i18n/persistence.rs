// src/i18n/persistence.rs - durable slot for the active language

use crate::core::prelude::*;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use toml_edit::{value, DocumentMut, Item, Table, Value};

/// TOML section and key of the durable slot: `[language] current = "<code>"`.
pub const LANGUAGE_SECTION: &str = "language";
pub const LANGUAGE_KEY: &str = "current";

/// A single named key-value entry surviving restarts.
#[async_trait::async_trait]
pub trait LanguageStorage: Send + Sync + std::fmt::Debug {
    /// Raw stored value, unvalidated. `Ok(None)` when nothing is stored.
    async fn load(&self) -> Result<Option<String>>;
    async fn save(&self, lang: LanguageCode) -> Result<()>;
}

/// Runs a persistence operation and swallows its failure.
pub async fn persist_best_effort<F>(lang: LanguageCode, op: F)
where
    F: Future<Output = Result<()>>,
{
    match op.await {
        Ok(()) => log::debug!("Language '{}' persisted", lang),
        Err(e) => log::warn!("Could not persist language '{}': {}", lang, e),
    }
}

/// Reads the slot; any failure or unknown value means "nothing stored".
pub async fn load_best_effort(storage: &dyn LanguageStorage) -> Option<LanguageCode> {
    match storage.load().await {
        Ok(Some(raw)) => match raw.parse::<LanguageCode>() {
            Ok(lang) => Some(lang),
            Err(e) => {
                log::warn!("Ignoring stored language: {}", e);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::warn!("Could not read stored language: {}", e);
            None
        }
    }
}

/// Keeps the slot inside a TOML file, editing only `language.current`.
#[derive(Debug, Clone)]
pub struct TomlFileStorage {
    path: PathBuf,
}

impl TomlFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn extract(content: &str) -> Result<Option<String>> {
        let table: toml::Table = content
            .parse()
            .map_err(|e| AppError::Config(format!("TOML: {}", e)))?;
        Ok(table
            .get(LANGUAGE_SECTION)
            .and_then(|section| section.get(LANGUAGE_KEY))
            .and_then(|value| value.as_str())
            .map(str::to_string))
    }

    /// Sets `language.current` in a parsed document, keeping comments and layout.
    /// Works for `[language]` tables, dotted keys and inline tables alike.
    fn update(content: &str, lang: LanguageCode) -> Result<String> {
        let mut doc: DocumentMut = content
            .parse()
            .map_err(|e| AppError::Config(format!("TOML: {}", e)))?;

        match doc.get_mut(LANGUAGE_SECTION) {
            Some(section) => {
                let table = section.as_table_like_mut().ok_or_else(|| {
                    AppError::Config(format!("'{}' is not a table", LANGUAGE_SECTION))
                })?;
                match table.get_mut(LANGUAGE_KEY) {
                    // Keep the surrounding whitespace and trailing comment.
                    Some(Item::Value(current)) => {
                        let mut replacement = Value::from(lang.code());
                        *replacement.decor_mut() = current.decor().clone();
                        *current = replacement;
                    }
                    _ => {
                        table.insert(LANGUAGE_KEY, value(lang.code()));
                    }
                }
            }
            None => {
                let mut section = Table::new();
                section.insert(LANGUAGE_KEY, value(lang.code()));
                doc.insert(LANGUAGE_SECTION, Item::Table(section));
            }
        }

        Ok(doc.to_string())
    }
}

#[async_trait::async_trait]
impl LanguageStorage for TomlFileStorage {
    async fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(AppError::Io)?;
        Self::extract(&content)
    }

    async fn save(&self, lang: LanguageCode) -> Result<()> {
        let content = if self.path.exists() {
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(AppError::Io)?
        } else {
            String::new()
        };
        // Fails on a file we cannot parse, which is then left untouched.
        let updated = Self::update(&content, lang)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(AppError::Io)?;
            }
        }

        tokio::fs::write(&self.path, updated)
            .await
            .map_err(AppError::Io)
    }
}

/// In-process slot; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    value: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait::async_trait]
impl LanguageStorage for MemoryStorage {
    async fn load(&self) -> Result<Option<String>> {
        Ok(self.value())
    }

    async fn save(&self, lang: LanguageCode) -> Result<()> {
        *self
            .value
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(lang.code().to_string());
        Ok(())
    }
}
