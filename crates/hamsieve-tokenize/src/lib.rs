//! Tokenization and feature extraction for Hamsieve.
//!
//! This crate turns raw email text into the feature strings the classifier
//! counts. Beyond plain word features it produces the signals that matter
//! for spam detection:
//!
//! - Word features: lowercased tokens within configurable length bounds
//! - Stopword removal: common English words are dropped (`stop-words` crate)
//! - Bigram features: adjacent word pairs (`"free money"`)
//! - Capitalization features: `caps:<word>` markers for ALL-CAPS tokens
//! - Document flags: `doc:has-link` and `doc:shouting` booleans
//!
//! # Example
//!
//! ```
//! use hamsieve_tokenize::{FeatureExtractor, TokenizerConfig};
//!
//! let extractor = FeatureExtractor::new(TokenizerConfig::default());
//! let features = extractor.extract("Claim your FREE prize at http://win.example");
//!
//! assert!(features.iter().any(|f| f == "free"));
//! assert!(features.iter().any(|f| f == "caps:free"));
//! assert!(features.iter().any(|f| f == "doc:has-link"));
//! ```

pub mod config;
pub mod features;
pub mod stopwords;
pub mod tokenizer;

// Re-exports
pub use config::TokenizerConfig;
pub use features::FeatureExtractor;
pub use stopwords::StopwordFilter;
pub use tokenizer::{tokenize, Token};
