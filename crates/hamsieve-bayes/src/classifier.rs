//! The Naive Bayes classifier.

use serde::Serialize;

use hamsieve_core::{Label, Result};
use hamsieve_store::CountStore;

/// Weight given to the assumed probability for unseen features.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Assumed probability for a feature with no observations.
pub const DEFAULT_ASSUMED_PROBABILITY: f64 = 0.5;

/// Default number of ranked labels returned by [`Classifier::classify`].
pub const DEFAULT_LIMIT: usize = 5;

/// A label with its posterior score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scored {
    /// The candidate label.
    pub label: Label,
    /// Unnormalized posterior: prior × product of feature probabilities.
    pub score: f64,
}

/// Naive Bayes classifier over a [`CountStore`].
///
/// Training increments counters; classification derives probabilities from
/// them on the fly, so a classifier handle is always consistent with the
/// underlying store.
#[derive(Debug)]
pub struct Classifier {
    store: CountStore,
    weight: f64,
    assumed: f64,
}

impl Classifier {
    /// Create a classifier with the default smoothing parameters.
    pub fn new(store: CountStore) -> Self {
        Self {
            store,
            weight: DEFAULT_WEIGHT,
            assumed: DEFAULT_ASSUMED_PROBABILITY,
        }
    }

    /// Create a classifier with custom smoothing: `weight` observations of
    /// an `assumed` probability are mixed into every feature estimate.
    pub fn with_smoothing(store: CountStore, weight: f64, assumed: f64) -> Self {
        Self {
            store,
            weight,
            assumed,
        }
    }

    /// The underlying count store.
    pub fn store(&self) -> &CountStore {
        &self.store
    }

    /// Consume the classifier, returning the store.
    pub fn into_store(self) -> CountStore {
        self.store
    }

    /// Train one document: count every feature occurrence under `label`.
    pub fn train(&self, features: &[String], label: &Label) -> Result<()> {
        self.store.record_document(features, label)
    }

    /// Train a batch of documents in a single store transaction.
    ///
    /// Returns the number of documents trained.
    pub fn train_all<I>(&self, docs: I) -> Result<u64>
    where
        I: IntoIterator<Item = (Vec<String>, Label)>,
    {
        self.store.record_documents(docs)
    }

    /// P(feature | label): occurrences of the feature under the label,
    /// relative to the label's document count. Zero when unobserved.
    pub fn feature_probability(&self, feature: &str, label: &Label) -> Result<f64> {
        let feature_count = self.store.feature_label_count(feature, label)?;
        if feature_count == 0 {
            return Ok(0.0);
        }
        let label_count = self.store.label_count(label)?;
        if label_count == 0 {
            return Ok(0.0);
        }
        Ok(feature_count as f64 / label_count as f64)
    }

    /// Smoothed P(feature | label).
    ///
    /// Mixes the raw estimate with the assumed probability, weighted by how
    /// often the feature has been seen across all labels:
    ///
    /// `(weight × assumed + total × raw) / (weight + total)`
    ///
    /// A never-seen feature yields exactly the assumed probability.
    pub fn weighted_probability(&self, feature: &str, label: &Label) -> Result<f64> {
        let raw = self.feature_probability(feature, label)?;
        let total = self.store.feature_count(feature)? as f64;
        Ok((self.weight * self.assumed + total * raw) / (self.weight + total))
    }

    /// P(document | label): product of smoothed feature probabilities,
    /// under the naive conditional-independence assumption.
    pub fn document_probability(&self, features: &[String], label: &Label) -> Result<f64> {
        let mut probability = 1.0;
        for feature in features {
            probability *= self.weighted_probability(feature, label)?;
        }
        Ok(probability)
    }

    /// Unnormalized posterior: P(label) × P(document | label).
    ///
    /// Returns 0.0 on an empty model (no trained documents).
    pub fn posterior(&self, features: &[String], label: &Label) -> Result<f64> {
        let total = self.store.total_count()?;
        if total == 0 {
            return Ok(0.0);
        }
        let prior = self.store.label_count(label)? as f64 / total as f64;
        let document = self.document_probability(features, label)?;
        Ok(prior * document)
    }

    /// Rank all observed labels by posterior score, highest first.
    ///
    /// `limit` defaults to [`DEFAULT_LIMIT`]. Ties are broken by label
    /// name so the ranking is deterministic. An untrained model yields an
    /// empty ranking.
    pub fn classify(&self, features: &[String], limit: Option<usize>) -> Result<Vec<Scored>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        let mut ranked = Vec::new();
        for label in self.store.labels()? {
            let score = self.posterior(features, &label)?;
            ranked.push(Scored { label, score });
        }

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.label.cmp(&b.label))
        });
        ranked.truncate(limit);

        log::debug!(
            "classified {} features against {} labels",
            features.len(),
            ranked.len()
        );
        Ok(ranked)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_classifier(dir: &TempDir) -> Classifier {
        Classifier::new(CountStore::create(dir.path().join("model.redb")).unwrap())
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    /// Train a tiny, unambiguous corpus: spam talks about free money,
    /// ham talks about meetings.
    fn trained(dir: &TempDir) -> Classifier {
        let classifier = temp_classifier(dir);
        classifier
            .train_all(vec![
                (strings(&["free", "money", "winner"]), Label::spam()),
                (strings(&["free", "viagra", "money"]), Label::spam()),
                (strings(&["winner", "free", "prize"]), Label::spam()),
                (strings(&["staff", "meeting", "agenda"]), Label::ham()),
                (strings(&["quarterly", "report", "meeting"]), Label::ham()),
                (strings(&["lunch", "meeting", "schedule"]), Label::ham()),
            ])
            .unwrap();
        classifier
    }

    // ------------------------------------------------------------------------
    // Probability math
    // ------------------------------------------------------------------------

    #[test]
    fn test_feature_probability() {
        let dir = TempDir::new().unwrap();
        let classifier = trained(&dir);

        // "free" appears in all 3 spam documents.
        let p = classifier
            .feature_probability("free", &Label::spam())
            .unwrap();
        assert!((p - 1.0).abs() < f64::EPSILON);

        // "winner" appears in 2 of 3 spam documents.
        let p = classifier
            .feature_probability("winner", &Label::spam())
            .unwrap();
        assert!((p - 2.0 / 3.0).abs() < 1e-12);

        // Never seen under ham.
        let p = classifier.feature_probability("free", &Label::ham()).unwrap();
        assert_eq!(p, 0.0);
    }

    #[test]
    fn test_feature_probability_unknown_label() {
        let dir = TempDir::new().unwrap();
        let classifier = trained(&dir);
        let p = classifier
            .feature_probability("free", &Label::new("phishing"))
            .unwrap();
        assert_eq!(p, 0.0);
    }

    #[test]
    fn test_weighted_probability_unseen_feature_is_assumed() {
        let dir = TempDir::new().unwrap();
        let classifier = trained(&dir);

        let p = classifier
            .weighted_probability("zebra", &Label::spam())
            .unwrap();
        assert!((p - DEFAULT_ASSUMED_PROBABILITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weighted_probability_formula() {
        let dir = TempDir::new().unwrap();
        let classifier = trained(&dir);

        // "free": raw P = 1.0 under spam, seen 3 times overall.
        // (1.0 * 0.5 + 3 * 1.0) / (1.0 + 3) = 3.5 / 4
        let p = classifier
            .weighted_probability("free", &Label::spam())
            .unwrap();
        assert!((p - 3.5 / 4.0).abs() < 1e-12);

        // Under ham: raw 0, so (0.5 + 0) / 4 = 0.125.
        let p = classifier.weighted_probability("free", &Label::ham()).unwrap();
        assert!((p - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_document_probability_is_product() {
        let dir = TempDir::new().unwrap();
        let classifier = trained(&dir);

        let features = strings(&["free", "money"]);
        let expected = classifier.weighted_probability("free", &Label::spam()).unwrap()
            * classifier.weighted_probability("money", &Label::spam()).unwrap();
        let actual = classifier
            .document_probability(&features, &Label::spam())
            .unwrap();
        assert!((actual - expected).abs() < 1e-12);
    }

    #[test]
    fn test_document_probability_empty_features_is_one() {
        let dir = TempDir::new().unwrap();
        let classifier = trained(&dir);
        let p = classifier.document_probability(&[], &Label::spam()).unwrap();
        assert_eq!(p, 1.0);
    }

    #[test]
    fn test_posterior_weights_prior() {
        let dir = TempDir::new().unwrap();
        let classifier = temp_classifier(&dir);

        // Imbalanced corpus: 3 ham, 1 spam, sharing one feature.
        classifier
            .train_all(vec![
                (strings(&["hello"]), Label::ham()),
                (strings(&["hello"]), Label::ham()),
                (strings(&["hello"]), Label::ham()),
                (strings(&["hello"]), Label::spam()),
            ])
            .unwrap();

        let ham = classifier.posterior(&strings(&["hello"]), &Label::ham()).unwrap();
        let spam = classifier.posterior(&strings(&["hello"]), &Label::spam()).unwrap();
        assert!(ham > spam);
    }

    // ------------------------------------------------------------------------
    // classify
    // ------------------------------------------------------------------------

    #[test]
    fn test_classify_obvious_spam() {
        let dir = TempDir::new().unwrap();
        let classifier = trained(&dir);

        let ranked = classifier
            .classify(&strings(&["free", "money"]), None)
            .unwrap();
        assert_eq!(ranked[0].label, Label::spam());
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_classify_obvious_ham() {
        let dir = TempDir::new().unwrap();
        let classifier = trained(&dir);

        let ranked = classifier
            .classify(&strings(&["meeting", "agenda"]), None)
            .unwrap();
        assert_eq!(ranked[0].label, Label::ham());
    }

    #[test]
    fn test_classify_empty_model() {
        let dir = TempDir::new().unwrap();
        let classifier = temp_classifier(&dir);

        let ranked = classifier.classify(&strings(&["anything"]), None).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_classify_respects_limit() {
        let dir = TempDir::new().unwrap();
        let classifier = temp_classifier(&dir);

        for name in ["alpha", "beta", "gamma"] {
            classifier
                .train(&strings(&["word-1"]), &Label::new(name))
                .unwrap();
        }

        let ranked = classifier.classify(&strings(&["word-1"]), Some(2)).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_classify_ties_broken_by_label_name() {
        let dir = TempDir::new().unwrap();
        let classifier = temp_classifier(&dir);

        // Perfectly symmetric training: identical scores for both labels.
        classifier.train(&strings(&["word-1"]), &Label::new("beta")).unwrap();
        classifier.train(&strings(&["word-1"]), &Label::new("alpha")).unwrap();

        let ranked = classifier.classify(&strings(&["word-1"]), None).unwrap();
        assert_eq!(ranked[0].label, Label::new("alpha"));
        assert_eq!(ranked[1].label, Label::new("beta"));
        assert_eq!(ranked[0].score, ranked[1].score);
    }

    #[test]
    fn test_classify_unseen_features_falls_back_to_prior() {
        let dir = TempDir::new().unwrap();
        let classifier = temp_classifier(&dir);

        classifier.train(&strings(&["word-1"]), &Label::ham()).unwrap();
        classifier.train(&strings(&["word-2"]), &Label::ham()).unwrap();
        classifier.train(&strings(&["word-3"]), &Label::spam()).unwrap();

        // "zebra" is unseen: both labels get assumed 0.5; the prior decides.
        let ranked = classifier.classify(&strings(&["zebra"]), None).unwrap();
        assert_eq!(ranked[0].label, Label::ham());
    }

    #[test]
    fn test_scored_serializes() {
        let scored = Scored {
            label: Label::spam(),
            score: 0.75,
        };
        let json = serde_json::to_string(&scored).unwrap();
        assert!(json.contains("\"label\":\"spam\""));
        assert!(json.contains("\"score\":0.75"));
    }
}
