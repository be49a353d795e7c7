//! Keyword extraction: lowercases, strips punctuation, and drops stop
//! words so the ranker only sees meaningful tokens.

use std::collections::HashSet;

/// Common English function words excluded from keyword matching.
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    "what", "which", "who", "whom", "this", "that", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
    "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "through", "during", "before", "after",
    "above", "below", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "to", "very", "can", "will", "just", "should", "now",
];

/// Terms that boost a document when they appear in both the query and the
/// document's title or content.
pub const MENTAL_HEALTH_TERMS: &[&str] = &[
    "anxiety", "stress", "depression", "overwhelm", "burnout", "worry", "panic",
    "sleep", "insomnia", "tired", "exhausted", "motivation", "focus", "concentrate",
];

/// The word lists driving extraction and scoring. Injected rather than
/// hard-coded so tests can substitute small fixtures.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    mental_health_terms: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(STOP_WORDS, MENTAL_HEALTH_TERMS)
    }
}

impl Lexicon {
    pub fn new(stop_words: &[&str], mental_health_terms: &[&str]) -> Self {
        Self {
            stop_words: stop_words.iter().map(|w| w.to_string()).collect(),
            mental_health_terms: mental_health_terms.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn mental_health_terms(&self) -> &[String] {
        &self.mental_health_terms
    }

    /// Extract lowercase keywords from raw text.
    ///
    /// Punctuation is stripped, tokens of length <= 2 and stop words are
    /// dropped. No stemming, no deduplication; duplicate tokens are
    /// harmless since the scorer iterates them independently. Empty input
    /// (or input made entirely of stop words) yields an empty list.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
            .collect();

        cleaned
            .split_whitespace()
            .filter(|word| word.len() > 2 && !self.is_stop_word(word))
            .map(String::from)
            .collect()
    }
}
