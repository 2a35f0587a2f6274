//! Tokenizer configuration.

use serde::{Deserialize, Serialize};

use hamsieve_core::{Error, Result};

/// Feature extraction configuration.
///
/// Controls which feature classes are emitted and how tokens are filtered.
/// All fields have serde defaults so partial configuration files work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Minimum token length, exclusive: tokens must be strictly longer.
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,

    /// Maximum token length, exclusive: tokens must be strictly shorter.
    #[serde(default = "default_max_token_len")]
    pub max_token_len: usize,

    /// Enable stopword filtering.
    #[serde(default = "default_true")]
    pub stopwords_enabled: bool,

    /// Additional words to treat as stopwords.
    #[serde(default)]
    pub custom_stopwords: Vec<String>,

    /// Words to preserve even if they appear in the stopword list.
    #[serde(default)]
    pub allowlist: Vec<String>,

    /// Emit bigram features over adjacent surviving tokens.
    #[serde(default = "default_true")]
    pub bigrams_enabled: bool,

    /// Emit `caps:<word>` features for ALL-CAPS tokens.
    #[serde(default = "default_true")]
    pub capitalization_enabled: bool,

    /// Emit document-level boolean features (`doc:has-link`, `doc:shouting`).
    #[serde(default = "default_true")]
    pub document_flags_enabled: bool,
}

fn default_min_token_len() -> usize {
    2
}

fn default_max_token_len() -> usize {
    20
}

fn default_true() -> bool {
    true
}

impl TokenizerConfig {
    /// Check that the exclusive length bounds admit at least one token
    /// length: `min < len < max` is satisfiable only when the bounds are
    /// at least two apart.
    pub fn validate(&self) -> Result<()> {
        if self.max_token_len.saturating_sub(self.min_token_len) < 2 {
            return Err(Error::config(format!(
                "token length bounds ({}, {}) admit no tokens",
                self.min_token_len, self.max_token_len
            )));
        }
        Ok(())
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            min_token_len: default_min_token_len(),
            max_token_len: default_max_token_len(),
            stopwords_enabled: default_true(),
            custom_stopwords: Vec::new(),
            allowlist: Vec::new(),
            bigrams_enabled: default_true(),
            capitalization_enabled: default_true(),
            document_flags_enabled: default_true(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = TokenizerConfig::default();
        assert_eq!(config.min_token_len, 2);
        assert_eq!(config.max_token_len, 20);
        assert!(config.stopwords_enabled);
        assert!(config.bigrams_enabled);
        assert!(config.capitalization_enabled);
        assert!(config.document_flags_enabled);
        assert!(config.custom_stopwords.is_empty());
        assert!(config.allowlist.is_empty());
    }

    #[test]
    fn test_config_deserialization_with_defaults() {
        let json = r#"{"bigrams_enabled": false}"#;
        let config: TokenizerConfig = serde_json::from_str(json).unwrap();

        assert!(!config.bigrams_enabled);
        assert_eq!(config.min_token_len, 2);
        assert!(config.stopwords_enabled);
    }

    #[test]
    fn test_validate_default_config() {
        assert!(TokenizerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_length_window() {
        // Exclusive bounds: (5, 6) admits nothing, (5, 7) admits len 6.
        let config = TokenizerConfig {
            min_token_len: 5,
            max_token_len: 6,
            ..Default::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            Error::Config { .. }
        ));

        let config = TokenizerConfig {
            min_token_len: 5,
            max_token_len: 7,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let config = TokenizerConfig {
            min_token_len: 20,
            max_token_len: 2,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = TokenizerConfig {
            custom_stopwords: vec!["enron".to_string()],
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"custom_stopwords\":[\"enron\"]"));
        assert!(json.contains("\"max_token_len\":20"));
    }
}
