//! Language codes.
//!
//! [`LanguageCode`] is an opaque, trimmed code string.  The core never
//! validates it: an empty code means "unspecified" and anything else is passed
//! through to the external services, which decide whether they support it.
//! The HTTP backends use [`resolve`] for that decision.

use std::fmt;

use isolang::Language;

/// Codes suggested to users, with their English names.
pub const LANGUAGE_REFERENCE: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("hi", "Hindi"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ar", "Arabic"),
];

// ---------------------------------------------------------------------------
// LanguageCode
// ---------------------------------------------------------------------------

/// A short ISO-style language token such as `"es"` or `"fr"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Wrap `code`, trimming surrounding whitespace.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_string())
    }

    /// `true` when no language was given.
    pub fn is_unspecified(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl From<Option<String>> for LanguageCode {
    fn from(code: Option<String>) -> Self {
        code.map(Self::new).unwrap_or_default()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve an ISO 639-1 or 639-3 code (optionally with a region suffix such
/// as `"zh-CN"` or `"pt_BR"`) to a known language.
pub fn resolve(code: &str) -> Option<Language> {
    let primary = code
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase();

    match primary.len() {
        2 => Language::from_639_1(&primary),
        3 => Language::from_639_3(&primary),
        _ => None,
    }
}

/// English display name for `code`, if it resolves.
pub fn english_name(code: &str) -> Option<&'static str> {
    resolve(code).map(|lang| lang.to_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_trimmed() {
        assert_eq!(LanguageCode::new("  es ").as_str(), "es");
        assert!(LanguageCode::new("   ").is_unspecified());
        assert!(LanguageCode::from(None::<String>).is_unspecified());
    }

    #[test]
    fn resolves_two_and_three_letter_codes() {
        assert_eq!(english_name("es"), Some("Spanish"));
        assert_eq!(english_name("FR"), Some("French"));
        assert_eq!(english_name("deu"), Some("German"));
        assert_eq!(english_name("pt-BR"), Some("Portuguese"));
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!(resolve("xx").is_none());
        assert!(resolve("").is_none());
        assert!(resolve("spanish").is_none());
    }

    #[test]
    fn reference_codes_all_resolve() {
        for (code, _) in LANGUAGE_REFERENCE {
            assert!(resolve(code).is_some(), "{code} should resolve");
        }
    }
}
