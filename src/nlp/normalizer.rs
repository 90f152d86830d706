//! Text normalizer: lowercase → tokenize → filter → lemmatize.
//!
//! [`TextNormalizer::normalize`] turns free text into a canonical token
//! sequence ([`NormalizedText`]) used for command matching and the
//! transcription display:
//!
//! ```text
//! "The quick brown fox jumps over the lazy dog."
//!   └─▶ lowercase             "the quick brown fox jumps over the lazy dog."
//!   └─▶ UAX #29 word split    [the, quick, brown, fox, jumps, over, the, lazy, dog]
//!   └─▶ split at apostrophes  ("dog's" → dog, s)
//!   └─▶ drop stopwords and    [quick, brown, fox, jumps, lazy, dog]
//!       non-alphabetic tokens
//!   └─▶ lemmatize             [quick, brown, fox, jump, lazy, dog]
//!   └─▶ join                  "quick brown fox jump lazy dog"
//! ```
//!
//! The transformation is lossy and order-preserving.  It never fails: input
//! whose tokens are all filtered out yields an empty [`NormalizedText`].

use std::collections::HashSet;
use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use crate::nlp::lemmatizer::Lemmatizer;
use crate::nlp::stopwords;

// ---------------------------------------------------------------------------
// NormalizedText
// ---------------------------------------------------------------------------

/// Canonical, space-joined token sequence derived from some original text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the individual tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ').filter(|t| !t.is_empty())
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// TextNormalizer
// ---------------------------------------------------------------------------

/// Stateless normalizer.  The stopword set is process-wide and read-only, so
/// one instance can be shared freely across concurrent requests.
///
/// # Example
/// ```rust
/// use polyglot_assistant::nlp::TextNormalizer;
///
/// let normalizer = TextNormalizer::new();
/// assert_eq!(normalizer.normalize("What time is it?").as_str(), "time");
/// ```
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stopwords: &'static HashSet<&'static str>,
    lemmatizer: Lemmatizer,
}

impl TextNormalizer {
    /// English normalizer.
    pub fn new() -> Self {
        Self {
            stopwords: &stopwords::ENGLISH,
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Normalizer for `language`; falls back to English when no stopword
    /// list exists for it.
    pub fn for_language(language: &str) -> Self {
        let stopwords = stopwords::for_language(language).unwrap_or_else(|| {
            log::warn!("normalizer: no stopword list for {language:?}, using English");
            &*stopwords::ENGLISH
        });
        Self {
            stopwords,
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Normalize `text`.  Pure and deterministic.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        let lowered = text.to_lowercase();
        let tokens: Vec<String> = lowered
            .unicode_words()
            .flat_map(split_clitics)
            .filter(|token| self.keep(token))
            .map(|token| self.lemmatizer.lemmatize(token))
            .collect();
        NormalizedText(tokens.join(" "))
    }

    fn keep(&self, token: &str) -> bool {
        !self.stopwords.contains(token) && token.chars().all(char::is_alphabetic)
    }
}

/// Split a word at its apostrophes: `"weather's"` → `["weather", "s"]`,
/// `"don't"` → `["don", "t"]`.  The fragments left behind are stopwords.
fn split_clitics(word: &str) -> impl Iterator<Item = &str> {
    word.split(APOSTROPHES).filter(|part| !part.is_empty())
}

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
