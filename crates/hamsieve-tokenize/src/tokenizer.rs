//! Whitespace tokenizer with length bounds.
//!
//! Splits text on whitespace, strips punctuation from token edges, and
//! keeps tokens whose character length is strictly between the configured
//! bounds. The bounds are exclusive on both ends: with the defaults
//! (2 and 20) a token survives when `2 < len < 20`, so two-character
//! tokens and twenty-character tokens are both dropped.

use crate::TokenizerConfig;

/// A single surviving token.
///
/// Keeps both the form as written (for capitalization and allowlist
/// checks) and the lowercased form (the word feature itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token as it appeared in the text, edge punctuation stripped.
    pub raw: String,
    /// Lowercased form, used as the word feature.
    pub lower: String,
}

impl Token {
    /// Whether the raw form is ALL-CAPS: at least one letter, no
    /// lowercase letters, and at least two characters.
    pub fn is_all_caps(&self) -> bool {
        self.raw.chars().count() >= 2
            && self.raw.chars().any(|c| c.is_alphabetic())
            && !self.raw.chars().any(|c| c.is_lowercase())
    }
}

/// Tokenize text into length-bounded tokens.
///
/// # Examples
///
/// ```
/// use hamsieve_tokenize::{tokenize, TokenizerConfig};
///
/// let tokens = tokenize("Win a FREE prize!!!", &TokenizerConfig::default());
/// let words: Vec<&str> = tokens.iter().map(|t| t.lower.as_str()).collect();
///
/// // "a" is too short (bounds are exclusive); "prize!!!" is trimmed.
/// assert_eq!(words, vec!["win", "free", "prize"]);
/// ```
pub fn tokenize(text: &str, config: &TokenizerConfig) -> Vec<Token> {
    text.split_whitespace()
        .filter_map(|piece| {
            let raw = piece.trim_matches(|c: char| !c.is_alphanumeric());
            if raw.is_empty() {
                return None;
            }
            let len = raw.chars().count();
            if len <= config.min_token_len || len >= config.max_token_len {
                return None;
            }
            Some(Token {
                raw: raw.to_string(),
                lower: raw.to_lowercase(),
            })
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
