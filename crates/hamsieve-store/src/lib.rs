//! Persistent count storage for Hamsieve.
//!
//! The Naive Bayes model is nothing but counters: how many documents each
//! label has seen, how often each feature appeared under each label, and
//! the overall document total. This crate persists those counters in a
//! single-file embedded [`redb`] database so a model trained once can be
//! reopened for classification without retraining.
//!
//! # Layout
//!
//! | Table | Key | Value |
//! |-------|-----|-------|
//! | `labels` | label | documents trained under the label |
//! | `feature_counts` | (feature, label) | occurrences of feature under label |
//! | `meta` | `"total-count"` | total documents trained |
//!
//! Missing keys read as zero everywhere.

pub mod count_store;

pub use count_store::CountStore;
