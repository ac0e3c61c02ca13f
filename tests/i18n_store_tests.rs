use wordtrainer_dashboard::i18n::{Catalog, LanguageStorage, MemoryStorage, TomlFileStorage};
use wordtrainer_dashboard::{AppError, LanguageCode, TranslationStore};

async fn store_with(value: Option<&str>) -> TranslationStore {
    let storage = match value {
        Some(v) => MemoryStorage::with_value(v),
        None => MemoryStorage::new(),
    };
    TranslationStore::init(Box::new(storage)).await
}

#[tokio::test]
async fn persisted_de_is_initial_language() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.toml");
    std::fs::write(&path, "[api]\nbase_url = \"http://x\"\n\n[language]\ncurrent = \"de\"\n").unwrap();

    let store = TranslationStore::init(Box::new(TomlFileStorage::new(&path))).await;
    assert_eq!(store.active_language(), LanguageCode::De);
}

#[tokio::test]
async fn missing_file_starts_in_english() {
    let dir = tempfile::tempdir().unwrap();
    let store =
        TranslationStore::init(Box::new(TomlFileStorage::new(dir.path().join("none.toml")))).await;
    assert_eq!(store.active_language(), LanguageCode::En);
}

#[tokio::test]
async fn corrupt_file_starts_in_english() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.toml");
    std::fs::write(&path, "[language\ncurrent = ").unwrap();

    let store = TranslationStore::init(Box::new(TomlFileStorage::new(&path))).await;
    assert_eq!(store.active_language(), LanguageCode::En);
}

#[tokio::test]
async fn language_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.toml");
    std::fs::write(&path, "# user config\n[api]\ntimeout_ms = 500\n").unwrap();

    let store = TranslationStore::init(Box::new(TomlFileStorage::new(&path))).await;
    store.set_language(LanguageCode::Fr).await;
    drop(store);

    let store = TranslationStore::init(Box::new(TomlFileStorage::new(&path))).await;
    assert_eq!(store.active_language(), LanguageCode::Fr);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# user config\n[api]\ntimeout_ms = 500"));
}

#[tokio::test]
async fn unwritable_slot_does_not_fail_the_switch() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "a file, not a directory").unwrap();
    let storage = TomlFileStorage::new(blocker.join("dashboard.toml"));
    assert!(storage.save(LanguageCode::Es).await.is_err());

    let store = TranslationStore::init(Box::new(storage)).await;
    store.set_language(LanguageCode::Es).await;
    assert_eq!(store.active_language(), LanguageCode::Es);
}

#[tokio::test]
async fn invalid_codes_leave_language_unchanged() {
    let store = store_with(Some("fr")).await;
    for bad in ["", "it", "english", "e n"] {
        let result = store.set_language_str(bad).await;
        assert!(matches!(result, Err(AppError::InvalidArgument(_))), "{:?}", bad);
        assert_eq!(store.active_language(), LanguageCode::Fr);
    }
}

#[tokio::test]
async fn valid_codes_round_trip() {
    let store = store_with(None).await;
    for lang in LanguageCode::ALL {
        assert_eq!(store.set_language_str(lang.code()).await.unwrap(), lang);
        assert_eq!(store.active_language(), lang);
    }
}

#[tokio::test]
async fn missing_keys_fall_back_to_english_value() {
    let catalog = Catalog::embedded();
    let en = catalog.dictionary(LanguageCode::En);
    let store = store_with(None).await;

    for lang in LanguageCode::ALL {
        store.set_language(lang).await;
        let dict = catalog.dictionary(lang);
        for key in en.keys() {
            let expected = dict.get(key).or_else(|| en.get(key)).unwrap();
            assert_eq!(store.translate(key), expected, "{} / {}", lang, key);
            assert!(!store.translate(key).is_empty());
        }
    }
}

#[tokio::test]
async fn unknown_keys_are_returned_as_is() {
    let store = store_with(Some("es")).await;
    for key in ["x", "nav.nowhere", "ünïcødé.key", "with space"] {
        assert_eq!(store.translate(key), key);
    }
}

#[tokio::test]
async fn labels_follow_active_language() {
    let store = store_with(None).await;
    assert_eq!(store.language_label(LanguageCode::De), "German");
    store.set_language(LanguageCode::De).await;
    assert_eq!(store.language_label(LanguageCode::De), "Deutsch");
}

const KEY_SOURCES: &[(&str, &str)] = &[
    ("commands/handler.rs", include_str!("../src/commands/handler.rs")),
    ("commands/exit", include_str!("../src/commands/exit/command.rs")),
    ("commands/health", include_str!("../src/commands/health/command.rs")),
    ("commands/help", include_str!("../src/commands/help/command.rs")),
    ("commands/lang", include_str!("../src/commands/lang/command.rs")),
    ("commands/version", include_str!("../src/commands/version/command.rs")),
    ("health/types.rs", include_str!("../src/health/types.rs")),
    ("i18n/types.rs", include_str!("../src/i18n/types.rs")),
    ("main.rs", include_str!("../src/main.rs")),
];

const KEY_NAMESPACES: &[&str] = &["nav.", "health.", "status.", "language.", "commands."];

/// Every `"namespace.key"` string literal in `source`.
fn key_literals(source: &str) -> Vec<&str> {
    let mut keys = Vec::new();
    for namespace in KEY_NAMESPACES {
        let opening = format!("\"{}", namespace);
        for (start, _) in source.match_indices(&opening) {
            let rest = &source[start + 1..];
            if let Some(end) = rest.find('"') {
                let literal = &rest[..end];
                if literal
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '.' || c == '_')
                {
                    keys.push(literal);
                }
            }
        }
    }
    keys
}

#[test]
fn every_looked_up_key_has_an_english_entry() {
    let en = Catalog::embedded().dictionary(LanguageCode::En);

    let mut checked = 0;
    for (file, source) in KEY_SOURCES {
        for key in key_literals(source) {
            assert!(en.contains(key), "'{}' used in {} missing in en", key, file);
            checked += 1;
        }
    }
    assert!(checked >= 20, "only {} keys found", checked);

    for lang in LanguageCode::ALL {
        assert!(en.contains(lang.label_key()));
    }
    for status in ["healthy", "unhealthy", "degraded"] {
        let status = wordtrainer_dashboard::health::HealthStatus::from(status.to_string());
        assert!(en.contains(status.label_key()));
    }
}
