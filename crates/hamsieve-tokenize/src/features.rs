//! Feature extraction.
//!
//! Turns a document into the flat list of feature strings the classifier
//! counts. Feature classes, in emission order:
//!
//! 1. Word features: lowercased surviving tokens, duplicates preserved
//!    (each occurrence counts once during training)
//! 2. `caps:<word>` markers for ALL-CAPS tokens
//! 3. Bigrams `"w1 w2"` over adjacent surviving tokens
//! 4. Document flags: `doc:has-link`, `doc:shouting` (at most once each)
//!
//! Stopwords are removed before bigrams are formed, so `"free the money"`
//! yields the bigram `"free money"`.

use crate::{tokenize, StopwordFilter, Token, TokenizerConfig};

/// Document flag emitted when the text contains a hyperlink.
pub const FEATURE_HAS_LINK: &str = "doc:has-link";

/// Document flag emitted when a large share of tokens is ALL-CAPS.
pub const FEATURE_SHOUTING: &str = "doc:shouting";

/// Prefix for capitalization features.
pub const CAPS_PREFIX: &str = "caps:";

// Shouting thresholds: at least 5 alphabetic tokens, 30% of them ALL-CAPS.
const SHOUTING_MIN_ALPHA_TOKENS: usize = 5;
const SHOUTING_RATIO: f64 = 0.30;

/// Extracts classifier features from document text.
///
/// Construction builds the stopword list once; extraction is then
/// allocation-bound per document.
#[derive(Debug)]
pub struct FeatureExtractor {
    config: TokenizerConfig,
    stopwords: StopwordFilter,
}

impl FeatureExtractor {
    /// Create an extractor for the given configuration.
    pub fn new(config: TokenizerConfig) -> Self {
        let stopwords = StopwordFilter::new(&config);
        Self { config, stopwords }
    }

    /// The configuration this extractor was built with.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Extract all features from `text`.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text, &self.config);

        let surviving: Vec<&Token> = tokens
            .iter()
            .filter(|t| !self.stopwords.is_stopword(&t.raw, &t.lower))
            .collect();

        let mut features: Vec<String> = Vec::with_capacity(surviving.len() * 2);

        for token in &surviving {
            features.push(token.lower.clone());
            if self.config.capitalization_enabled && token.is_all_caps() {
                features.push(format!("{CAPS_PREFIX}{}", token.lower));
            }
        }

        if self.config.bigrams_enabled {
            for pair in surviving.windows(2) {
                features.push(format!("{} {}", pair[0].lower, pair[1].lower));
            }
        }

        if self.config.document_flags_enabled {
            if has_link(text) {
                features.push(FEATURE_HAS_LINK.to_string());
            }
            if is_shouting(&tokens) {
                features.push(FEATURE_SHOUTING.to_string());
            }
        }

        features
    }
}

/// Whether the text contains an obvious hyperlink.
fn has_link(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("http://") || lower.contains("https://") || lower.contains("www.")
}

/// Whether the token stream reads as shouting.
///
/// Measured over all length-bounded tokens containing a letter, before
/// stopword removal: stopwords written in caps are still shouting.
fn is_shouting(tokens: &[Token]) -> bool {
    let alpha: Vec<&Token> = tokens
        .iter()
        .filter(|t| t.raw.chars().any(|c| c.is_alphabetic()))
        .collect();
    if alpha.len() < SHOUTING_MIN_ALPHA_TOKENS {
        return false;
    }
    let caps = alpha.iter().filter(|t| t.is_all_caps()).count();
    caps as f64 / alpha.len() as f64 >= SHOUTING_RATIO
}

// ============================================================================
// Tests
// ============================================================================
