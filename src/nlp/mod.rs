//! Text normalization.
//!
//! This module provides:
//! * [`TextNormalizer`]: lowercases, tokenizes, filters and lemmatizes text.
//! * [`NormalizedText`]: the canonical token sequence it produces.
//! * [`Lemmatizer`]: rule-based noun lemmatizer.
//! * [`stopwords`]: process-wide, read-only stopword sets.

pub mod lemmatizer;
pub mod normalizer;
pub mod stopwords;

pub use lemmatizer::Lemmatizer;
pub use normalizer::{NormalizedText, TextNormalizer};
