// src/i18n/langs/mod.rs

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "src/i18n/langs/"]
pub struct Langs;

/// Raw JSON for one language, embedded at compile time.
pub fn get_language_file(code: &str) -> Option<std::borrow::Cow<'static, [u8]>> {
    Langs::get(&format!("{}.json", code.to_lowercase())).map(|file| file.data)
}
