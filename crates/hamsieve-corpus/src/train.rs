//! Corpus training.

use std::path::Path;

use hamsieve_bayes::Classifier;
use hamsieve_core::Result;
use hamsieve_tokenize::FeatureExtractor;

use crate::layout::{corpus_files, label_dirs, read_document};
use crate::report::{LabelCount, TrainReport};

/// Train the classifier on every document of a directory corpus.
///
/// Each label directory is trained as one store transaction, so a crash
/// mid-run leaves whole labels either trained or untrained rather than a
/// partially counted directory.
pub fn train_corpus(
    classifier: &Classifier,
    root: &Path,
    extractor: &FeatureExtractor,
) -> Result<TrainReport> {
    let mut per_label = Vec::new();

    for (label, dir) in label_dirs(root)? {
        let files = corpus_files(&dir);
        log::info!("preparing to train {} {label} files", files.len());

        let mut docs = Vec::with_capacity(files.len());
        for path in &files {
            let text = read_document(path)?;
            docs.push((extractor.extract(&text), label.clone()));
        }

        let trained = classifier.train_all(docs)?;
        log::info!("trained {trained} {label} files");
        per_label.push(LabelCount {
            label,
            documents: trained,
        });
    }

    Ok(TrainReport { per_label })
}

// ============================================================================
// Tests
// ============================================================================
