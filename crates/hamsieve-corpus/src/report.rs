//! Training and evaluation reports.

use serde::Serialize;
use std::fmt;

use hamsieve_core::Label;

/// Documents trained for one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    /// The label.
    pub label: Label,
    /// Documents trained under it.
    pub documents: u64,
}

/// Outcome of [`train_corpus`](crate::train_corpus).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainReport {
    /// Per-label document counts, sorted by label.
    pub per_label: Vec<LabelCount>,
}

impl TrainReport {
    /// Total documents trained across all labels.
    pub fn total(&self) -> u64 {
        self.per_label.iter().map(|c| c.documents).sum()
    }
}

impl fmt::Display for TrainReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for count in &self.per_label {
            writeln!(f, "{}: {} documents", count.label, count.documents)?;
        }
        write!(f, "total: {} documents", self.total())
    }
}

/// Per-label evaluation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelStats {
    /// The directory label the documents were expected to receive.
    pub label: Label,
    /// Documents evaluated.
    pub total: u64,
    /// Documents whose top-ranked label matched.
    pub correct: u64,
}

impl LabelStats {
    /// Per-label accuracy as a percentage (0.0 for an empty label).
    pub fn accuracy(&self) -> f64 {
        percentage(self.correct, self.total)
    }
}

/// Outcome of [`evaluate`](crate::evaluate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalReport {
    /// Documents evaluated.
    pub total: u64,
    /// Documents classified correctly.
    pub correct: u64,
    /// Per-label breakdown, sorted by label.
    pub per_label: Vec<LabelStats>,
}

impl EvalReport {
    /// Overall accuracy as a percentage (0.0 for an empty corpus).
    pub fn accuracy(&self) -> f64 {
        percentage(self.correct, self.total)
    }
}

impl fmt::Display for EvalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stats in &self.per_label {
            writeln!(
                f,
                "{}: {}/{} correct ({:.2}%)",
                stats.label,
                stats.correct,
                stats.total,
                stats.accuracy()
            )?;
        }
        write!(
            f,
            "processed {} documents, {:.2}% accurate",
            self.total,
            self.accuracy()
        )
    }
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    100.0 * part as f64 / whole as f64
}

// ============================================================================
// Tests
// ============================================================================
