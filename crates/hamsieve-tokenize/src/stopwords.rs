//! Stopword filtering for feature extraction.
//!
//! Common words ("the", "and", "is") carry almost no spam signal but
//! dominate raw term counts, so they are dropped before features are
//! emitted. The list comes from the `stop-words` crate (~500 English
//! words) and can be extended with custom stopwords or punched through
//! with an allowlist.
//!
//! The allowlist check is case-sensitive against the token as written:
//! corpora sometimes contain meaningful short uppercase terms (ticker
//! symbols, "RE", "FW") that the lowercase stopword list would eat.

use std::collections::HashSet;
use stop_words::{get, LANGUAGE};

use crate::TokenizerConfig;

/// Stopword filter applied to the token stream before feature emission.
pub struct StopwordFilter {
    stopwords: HashSet<String>,
    allowlist: HashSet<String>,
    enabled: bool,
}

impl StopwordFilter {
    /// Build a filter from the tokenizer configuration.
    pub fn new(config: &TokenizerConfig) -> Self {
        let mut stopwords: HashSet<String> = get(LANGUAGE::English)
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        for word in &config.custom_stopwords {
            stopwords.insert(word.to_lowercase());
        }

        Self {
            stopwords,
            allowlist: config.allowlist.iter().cloned().collect(),
            enabled: config.stopwords_enabled,
        }
    }

    /// A filter that passes every token through.
    pub fn disabled() -> Self {
        Self {
            stopwords: HashSet::new(),
            allowlist: HashSet::new(),
            enabled: false,
        }
    }

    /// Whether a token should be dropped.
    ///
    /// `raw` is the token as written (checked case-sensitively against the
    /// allowlist); `lower` is its lowercased form (checked against the
    /// stopword list).
    pub fn is_stopword(&self, raw: &str, lower: &str) -> bool {
        if !self.enabled {
            return false;
        }
        if self.allowlist.contains(raw) {
            return false;
        }
        self.stopwords.contains(lower)
    }

    /// Number of stopwords in the active list.
    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Whether filtering is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl std::fmt::Debug for StopwordFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopwordFilter")
            .field("enabled", &self.enabled)
            .field("stopword_count", &self.stopwords.len())
            .field("allowlist_count", &self.allowlist.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
