// src/i18n/types.rs
use super::error::TranslationError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Supported display languages. Closed set: nothing else can be parsed or stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    De,
    Fr,
    Es,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 4] = [Self::En, Self::De, Self::Fr, Self::Es];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Es => "es",
        }
    }

    /// Dictionary key holding the language's display name.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::En => "language.en",
            Self::De => "language.de",
            Self::Fr => "language.fr",
            Self::Es => "language.es",
        }
    }
}

impl FromStr for LanguageCode {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| TranslationError::InvalidLanguage(s.to_string()))
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Key to display string mapping for one language. Values are never empty.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn from_json(content: &str) -> Result<Self, TranslationError> {
        let raw: HashMap<String, String> = serde_json::from_str(content)
            .map_err(|e| TranslationError::LoadError(e.to_string()))?;
        Ok(Self::from_entries(raw))
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .filter(|(_, v)| !v.is_empty())
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One dictionary per language, loaded once and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dictionaries: HashMap<LanguageCode, Dictionary>,
    empty: Dictionary,
}

static EMBEDDED: Lazy<Catalog> = Lazy::new(Catalog::load_embedded);

impl Catalog {
    pub fn embedded() -> &'static Catalog {
        &EMBEDDED
    }

    pub fn from_dictionaries(dictionaries: HashMap<LanguageCode, Dictionary>) -> Self {
        Self {
            dictionaries,
            empty: Dictionary::default(),
        }
    }

    fn load_embedded() -> Self {
        let mut dictionaries = HashMap::new();
        for lang in LanguageCode::ALL {
            match Self::load_language(lang) {
                Ok(dict) => {
                    log::debug!("Loaded {} entries for '{}'", dict.len(), lang);
                    dictionaries.insert(lang, dict);
                }
                // Lookups for this language fall through to the default dictionary.
                Err(e) => log::error!("Dictionary '{}' unavailable: {}", lang, e),
            }
        }
        Self::from_dictionaries(dictionaries)
    }

    fn load_language(lang: LanguageCode) -> Result<Dictionary, TranslationError> {
        let content = super::langs::get_language_file(lang.code()).ok_or_else(|| {
            TranslationError::LoadError(format!("File not found: {}.json", lang.code()))
        })?;
        let content_str = std::str::from_utf8(content.as_ref())
            .map_err(|e| TranslationError::LoadError(e.to_string()))?;
        Dictionary::from_json(content_str)
    }

    pub fn dictionary(&self, lang: LanguageCode) -> &Dictionary {
        self.dictionaries.get(&lang).unwrap_or(&self.empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes_case_insensitively() {
        assert_eq!("de".parse::<LanguageCode>(), Ok(LanguageCode::De));
        assert_eq!(" FR ".parse::<LanguageCode>(), Ok(LanguageCode::Fr));
        assert_eq!("Es".parse::<LanguageCode>(), Ok(LanguageCode::Es));
    }

    #[test]
    fn rejects_codes_outside_the_set() {
        for bad in ["", "it", "en-US", "english", "d e"] {
            assert!(
                matches!(
                    bad.parse::<LanguageCode>(),
                    Err(TranslationError::InvalidLanguage(_))
                ),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&LanguageCode::De).unwrap(), "\"de\"");
        let parsed: LanguageCode = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(parsed, LanguageCode::Es);
    }

    #[test]
    fn empty_values_are_dropped() {
        let dict = Dictionary::from_entries([("a", "A"), ("b", "")]);
        assert_eq!(dict.get("a"), Some("A"));
        assert!(!dict.contains("b"));
    }

    #[test]
    fn every_language_is_embedded() {
        let catalog = Catalog::embedded();
        for lang in LanguageCode::ALL {
            assert!(!catalog.dictionary(lang).is_empty(), "{} is empty", lang);
        }
    }

    #[test]
    fn default_dictionary_is_a_superset() {
        let catalog = Catalog::embedded();
        let en = catalog.dictionary(LanguageCode::En);
        for lang in LanguageCode::ALL {
            for key in catalog.dictionary(lang).keys() {
                assert!(en.contains(key), "'{}' from {} missing in en", key, lang);
            }
        }
    }

    #[test]
    fn every_language_has_a_label() {
        let en = Catalog::embedded().dictionary(LanguageCode::En);
        for lang in LanguageCode::ALL {
            assert!(en.contains(lang.label_key()));
        }
    }
}
