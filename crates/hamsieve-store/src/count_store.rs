//! The redb-backed count store.

use std::path::{Path, PathBuf};

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};

use hamsieve_core::{Error, Label, Result};

/// Documents trained per label.
const LABELS: TableDefinition<&str, u64> = TableDefinition::new("labels");

/// Feature occurrences per (feature, label) pair.
const FEATURE_COUNTS: TableDefinition<(&str, &str), u64> =
    TableDefinition::new("feature_counts");

/// Model-wide counters.
const META: TableDefinition<&str, u64> = TableDefinition::new("meta");

/// Key in [`META`] holding the total trained document count.
const TOTAL_COUNT_KEY: &str = "total-count";

/// Required extension for model database files.
const DB_EXTENSION: &str = "redb";

/// Persistent feature/label counters backing the classifier.
///
/// Open with [`CountStore::create`] for training (creates the file if
/// needed, reopens it otherwise) or [`CountStore::open_read_only`] for
/// classification of an already trained model. Read-only handles reject
/// writes with [`Error::ReadOnlyStore`].
pub struct CountStore {
    db: Database,
    path: PathBuf,
    read_only: bool,
}

impl CountStore {
    /// Open a model database read-write, creating it if it does not exist.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = validate_path(path.as_ref())?;
        let db = Database::create(&path).map_err(Error::store)?;

        // Initialize all tables up front so later read transactions never
        // observe a missing table.
        let txn = db.begin_write().map_err(Error::store)?;
        {
            txn.open_table(LABELS).map_err(Error::store)?;
            txn.open_table(FEATURE_COUNTS).map_err(Error::store)?;
            txn.open_table(META).map_err(Error::store)?;
        }
        txn.commit().map_err(Error::store)?;

        log::debug!("opened count store read-write at {}", path.display());
        Ok(Self {
            db,
            path,
            read_only: false,
        })
    }

    /// Open an existing model database for classification only.
    ///
    /// Fails if the file does not exist. Any write through this handle
    /// returns [`Error::ReadOnlyStore`].
    pub fn open_read_only<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = validate_path(path.as_ref())?;
        if !path.exists() {
            return Err(Error::store(format!(
                "model database not found: {}",
                path.display()
            )));
        }
        let db = Database::open(&path).map_err(Error::store)?;

        log::debug!("opened count store read-only at {}", path.display());
        Ok(Self {
            db,
            path,
            read_only: true,
        })
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this handle rejects writes.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Record one trained document: every feature occurrence is counted
    /// under `label`, and the label and total document counts advance by
    /// one. All increments commit in a single transaction.
    pub fn record_document(&self, features: &[String], label: &Label) -> Result<()> {
        self.record_documents(std::iter::once((features.to_vec(), label.clone())))?;
        Ok(())
    }

    /// Record a batch of trained documents in one transaction.
    ///
    /// Returns the number of documents recorded. Batching matters when
    /// training corpora of tens of thousands of files: one commit per
    /// document means one fsync per document.
    pub fn record_documents<I>(&self, docs: I) -> Result<u64>
    where
        I: IntoIterator<Item = (Vec<String>, Label)>,
    {
        if self.read_only {
            return Err(Error::ReadOnlyStore);
        }

        let txn = self.db.begin_write().map_err(Error::store)?;
        let mut recorded = 0u64;
        {
            let mut feature_counts = txn.open_table(FEATURE_COUNTS).map_err(Error::store)?;
            let mut labels = txn.open_table(LABELS).map_err(Error::store)?;
            let mut meta = txn.open_table(META).map_err(Error::store)?;

            for (features, label) in docs {
                for feature in &features {
                    let key = (feature.as_str(), label.as_str());
                    let current = feature_counts
                        .get(key)
                        .map_err(Error::store)?
                        .map(|guard| guard.value())
                        .unwrap_or(0);
                    feature_counts
                        .insert(key, current.saturating_add(1))
                        .map_err(Error::store)?;
                }

                let current = labels
                    .get(label.as_str())
                    .map_err(Error::store)?
                    .map(|guard| guard.value())
                    .unwrap_or(0);
                labels
                    .insert(label.as_str(), current.saturating_add(1))
                    .map_err(Error::store)?;

                let total = meta
                    .get(TOTAL_COUNT_KEY)
                    .map_err(Error::store)?
                    .map(|guard| guard.value())
                    .unwrap_or(0);
                meta.insert(TOTAL_COUNT_KEY, total.saturating_add(1))
                    .map_err(Error::store)?;

                recorded += 1;
            }
        }
        txn.commit().map_err(Error::store)?;

        log::debug!("recorded {recorded} documents");
        Ok(recorded)
    }

    /// Number of documents trained under `label`.
    pub fn label_count(&self, label: &Label) -> Result<u64> {
        let txn = self.db.begin_read().map_err(Error::store)?;
        let table = txn.open_table(LABELS).map_err(Error::store)?;
        Ok(table
            .get(label.as_str())
            .map_err(Error::store)?
            .map(|guard| guard.value())
            .unwrap_or(0))
    }

    /// Total number of documents trained.
    pub fn total_count(&self) -> Result<u64> {
        let txn = self.db.begin_read().map_err(Error::store)?;
        let table = txn.open_table(META).map_err(Error::store)?;
        Ok(table
            .get(TOTAL_COUNT_KEY)
            .map_err(Error::store)?
            .map(|guard| guard.value())
            .unwrap_or(0))
    }

    /// Occurrences of `feature` under `label`.
    pub fn feature_label_count(&self, feature: &str, label: &Label) -> Result<u64> {
        let txn = self.db.begin_read().map_err(Error::store)?;
        let table = txn.open_table(FEATURE_COUNTS).map_err(Error::store)?;
        Ok(table
            .get((feature, label.as_str()))
            .map_err(Error::store)?
            .map(|guard| guard.value())
            .unwrap_or(0))
    }

    /// Occurrences of `feature` across all labels.
    pub fn feature_count(&self, feature: &str) -> Result<u64> {
        let labels = self.labels()?;
        let txn = self.db.begin_read().map_err(Error::store)?;
        let table = txn.open_table(FEATURE_COUNTS).map_err(Error::store)?;

        let mut total = 0u64;
        for label in &labels {
            let count = table
                .get((feature, label.as_str()))
                .map_err(Error::store)?
                .map(|guard| guard.value())
                .unwrap_or(0);
            total = total.saturating_add(count);
        }
        Ok(total)
    }

    /// All labels that have been observed, sorted by name.
    pub fn labels(&self) -> Result<Vec<Label>> {
        let txn = self.db.begin_read().map_err(Error::store)?;
        let table = txn.open_table(LABELS).map_err(Error::store)?;

        let mut labels = Vec::new();
        for entry in table.iter().map_err(Error::store)? {
            let (key, value) = entry.map_err(Error::store)?;
            if value.value() > 0 {
                labels.push(Label::new(key.value()));
            }
        }
        labels.sort();
        Ok(labels)
    }
}

impl std::fmt::Debug for CountStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountStore")
            .field("path", &self.path)
            .field("read_only", &self.read_only)
            .finish()
    }
}

/// Reject paths without the `.redb` extension. Model files are easy to
/// mistake for corpus files otherwise.
fn validate_path(path: &Path) -> Result<PathBuf> {
    if path.extension().and_then(|e| e.to_str()) != Some(DB_EXTENSION) {
        return Err(Error::InvalidDatabasePath {
            path: path.to_path_buf(),
        });
    }
    Ok(path.to_path_buf())
}

// ============================================================================
// Tests
// ============================================================================
