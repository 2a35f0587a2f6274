//! Corpus evaluation.

use std::path::Path;

use hamsieve_bayes::Classifier;
use hamsieve_core::Result;
use hamsieve_tokenize::FeatureExtractor;

use crate::layout::{corpus_files, label_dirs, read_document};
use crate::report::{EvalReport, LabelStats};

/// Evaluate the classifier against a labeled corpus.
///
/// Every document is classified and its top-ranked label compared to the
/// directory it came from. A document for which the model returns no
/// ranking (untrained model) counts as incorrect.
pub fn evaluate(
    classifier: &Classifier,
    root: &Path,
    extractor: &FeatureExtractor,
) -> Result<EvalReport> {
    let mut per_label = Vec::new();
    let mut total = 0u64;
    let mut correct = 0u64;

    for (label, dir) in label_dirs(root)? {
        let files = corpus_files(&dir);
        log::info!("preparing to test {} {label} files", files.len());

        let mut stats = LabelStats {
            label: label.clone(),
            total: 0,
            correct: 0,
        };

        for path in &files {
            let text = read_document(path)?;
            let features = extractor.extract(&text);
            let ranked = classifier.classify(&features, Some(1))?;

            stats.total += 1;
            if ranked.first().map(|s| s.label == label).unwrap_or(false) {
                stats.correct += 1;
            }
        }

        log::info!(
            "tested {} {label} files, {:.2}% accurate",
            stats.total,
            stats.accuracy()
        );
        total += stats.total;
        correct += stats.correct;
        per_label.push(stats);
    }

    Ok(EvalReport {
        total,
        correct,
        per_label,
    })
}

// ============================================================================
// Tests
// ============================================================================
