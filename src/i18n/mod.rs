// src/i18n/mod.rs
//
// Translation store: a closed set of languages, one embedded dictionary per
// language, lookup falling back to English and then to the key itself.

pub mod error;
pub mod langs;
pub mod lookup;
pub mod persistence;
pub mod store;
pub mod types;

pub use error::TranslationError;
pub use persistence::{LanguageStorage, MemoryStorage, TomlFileStorage};
pub use store::TranslationStore;
pub use types::{Catalog, Dictionary, LanguageCode};

pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::En;
