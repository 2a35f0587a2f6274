//! Hamsieve — umbrella crate.
//!
//! Re-exports all Hamsieve components for convenience:
//!
//! - [`core`]: errors, Result alias, the [`core::Label`] type
//! - [`tokenize`]: feature extraction (words, bigrams, capitalization,
//!   stopwords, document flags)
//! - [`store`]: persistent feature/label counters (redb)
//! - [`bayes`]: the Naive Bayes classifier
//! - [`corpus`]: directory-corpus training and evaluation

pub use hamsieve_bayes as bayes;
pub use hamsieve_core as core;
pub use hamsieve_corpus as corpus;
pub use hamsieve_store as store;
pub use hamsieve_tokenize as tokenize;

// The types most callers want, at the root.
pub use hamsieve_bayes::{Classifier, Scored};
pub use hamsieve_core::{Error, Label, Result};
pub use hamsieve_corpus::{evaluate, train_corpus, EvalReport, TrainReport};
pub use hamsieve_store::CountStore;
pub use hamsieve_tokenize::{FeatureExtractor, TokenizerConfig};
