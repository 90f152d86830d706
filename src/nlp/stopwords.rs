//! Stopword tables.
//!
//! The English list is the classic 179-entry list used by most NLP toolkits,
//! including the contraction fragments (`"don"`, `"ll"`, `"ve"` …) that a word
//! tokenizer leaves behind.  Lookups go through [`for_language`].

use std::collections::HashSet;

use once_cell::sync::Lazy;

const ENGLISH_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// English stopword set, built once on first use and shared read-only.
pub static ENGLISH: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_WORDS.iter().copied().collect());

/// Return the stopword set for `language`, or `None` when no list exists.
pub fn for_language(language: &str) -> Option<&'static HashSet<&'static str>> {
    match language.trim().to_lowercase().as_str() {
        "en" | "eng" | "english" => Some(&*ENGLISH),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_has_no_duplicates() {
        assert_eq!(ENGLISH.len(), ENGLISH_WORDS.len());
        assert_eq!(ENGLISH.len(), 179);
    }

    #[test]
    fn common_function_words_are_listed() {
        for w in ["the", "is", "what", "how", "over", "you", "it"] {
            assert!(ENGLISH.contains(w), "{w} should be a stopword");
        }
    }

    #[test]
    fn command_keywords_are_not_stopwords() {
        for w in ["hello", "hi", "time", "date", "weather"] {
            assert!(!ENGLISH.contains(w), "{w} must survive filtering");
        }
    }

    #[test]
    fn language_lookup() {
        assert!(for_language("en").is_some());
        assert!(for_language(" EN ").is_some());
        assert!(for_language("th").is_none());
    }
}
