// src/i18n/lookup.rs
use super::types::Dictionary;

/// Resolves `key` through active dictionary, then fallback, then the key itself.
pub fn resolve<'a>(active: &'a Dictionary, fallback: &'a Dictionary, key: &'a str) -> &'a str {
    active
        .get(key)
        .or_else(|| fallback.get(key))
        .unwrap_or(key)
}

/// Replaces `{}` placeholders left to right. Surplus params are ignored and
/// placeholders without a param stay as they are. Params are inserted verbatim.
pub fn format(template: &str, params: &[&str]) -> String {
    let mut pieces = template.split("{}");
    let mut params = params.iter();
    let mut text = String::with_capacity(template.len());
    text.push_str(pieces.next().unwrap_or_default());
    for piece in pieces {
        text.push_str(params.next().copied().unwrap_or("{}"));
        text.push_str(piece);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dicts() -> (Dictionary, Dictionary) {
        let en = Dictionary::from_entries([("greeting", "Hello"), ("only.en", "English only")]);
        let de = Dictionary::from_entries([("greeting", "Hallo")]);
        (de, en)
    }

    #[test]
    fn active_dictionary_wins() {
        let (de, en) = dicts();
        assert_eq!(resolve(&de, &en, "greeting"), "Hallo");
    }

    #[test]
    fn falls_back_to_default_dictionary() {
        let (de, en) = dicts();
        assert_eq!(resolve(&de, &en, "only.en"), "English only");
    }

    #[test]
    fn unknown_key_is_returned_unchanged() {
        let (de, en) = dicts();
        assert_eq!(resolve(&de, &en, "nope.missing"), "nope.missing");
        assert_eq!(resolve(&de, &en, ""), "");
    }

    #[test]
    fn result_borrows_from_inputs() {
        let (de, en) = dicts();
        let key = String::from("greeting");
        let value = resolve(&de, &en, &key);
        assert!(std::ptr::eq(value, de.get("greeting").unwrap()));
    }

    #[test]
    fn format_fills_placeholders_in_order() {
        assert_eq!(format("{} v{}", &["app", "1.0"]), "app v1.0");
        assert_eq!(format("no params", &["x"]), "no params");
        assert_eq!(format("{} and {}", &["one"]), "one and {}");
    }

    #[test]
    fn params_containing_placeholders_are_not_expanded() {
        assert_eq!(format("{} v{}", &["a{}", "b"]), "a{} vb");
        assert_eq!(format("Unknown command: {}", &["{}{}"]), "Unknown command: {}{}");
        assert_eq!(format("{}", &[]), "{}");
    }
}
