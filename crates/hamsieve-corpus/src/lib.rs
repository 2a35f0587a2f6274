//! Directory-corpus training and evaluation.
//!
//! A corpus is a directory whose immediate subdirectories are labels and
//! whose files are documents, the layout the Enron spam corpus ships in:
//!
//! ```text
//! corpus/
//!   spam/   0001.msg  0002.msg  ...
//!   ham/    0001.msg  0002.msg  ...
//! ```
//!
//! [`train_corpus`] walks every label directory and trains the classifier
//! on each file; [`evaluate`] classifies every file of a (held-out) corpus
//! and reports accuracy against the directory labels.

pub mod eval;
pub mod layout;
pub mod report;
pub mod train;

pub use eval::evaluate;
pub use layout::{corpus_files, label_dirs, read_document};
pub use report::{EvalReport, LabelCount, LabelStats, TrainReport};
pub use train::train_corpus;
