//! Naive Bayes classification over persistent counts.
//!
//! The model is the classic weighted Naive Bayes used by trainable spam
//! filters: per-feature conditional probabilities are smoothed toward an
//! assumed prior of 0.5 so rare features do not swing a document on a
//! single observation, document probability is the product of feature
//! probabilities (conditional independence), and the posterior weights in
//! the label's share of the training corpus.
//!
//! # Example
//!
//! ```no_run
//! use hamsieve_bayes::Classifier;
//! use hamsieve_core::Label;
//! use hamsieve_store::CountStore;
//!
//! # fn main() -> hamsieve_core::Result<()> {
//! let classifier = Classifier::new(CountStore::create("model.redb")?);
//!
//! classifier.train(&["free".into(), "money".into()], &Label::spam())?;
//! classifier.train(&["staff".into(), "meeting".into()], &Label::ham())?;
//!
//! let ranked = classifier.classify(&["free".into()], None)?;
//! assert_eq!(ranked[0].label, Label::spam());
//! # Ok(())
//! # }
//! ```

pub mod classifier;

pub use classifier::{Classifier, Scored, DEFAULT_ASSUMED_PROBABILITY, DEFAULT_LIMIT, DEFAULT_WEIGHT};
