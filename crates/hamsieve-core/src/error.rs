//! Error types for the Hamsieve crates.

use std::path::PathBuf;

/// Errors that can occur while training or classifying.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error (corpus reads, database file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Count store error (open, transaction, or table failures)
    #[error("Store error: {message}")]
    Store {
        /// Human-readable description of the storage failure
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// The model database must use the `.redb` extension
    #[error("Database path must have a \".redb\" extension: {path}")]
    InvalidDatabasePath {
        /// Path that was rejected
        path: PathBuf,
    },

    /// Write attempted on a store opened read-only
    #[error("Store is opened read-only")]
    ReadOnlyStore,

    /// The model contains no trained documents
    #[error("Model is empty: no documents have been trained")]
    EmptyModel,

    /// Corpus layout error (missing label directories, unreadable root)
    #[error("Corpus error: {message}")]
    Corpus {
        /// What is wrong with the corpus
        message: String,
    },
}

/// Convenience `Result` type alias for Hamsieve operations.
///
/// This is the standard Result type used throughout the Hamsieve codebase.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new store error from any displayable source.
    pub fn store<S: ToString>(source: S) -> Self {
        Error::Store {
            message: source.to_string(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new corpus error.
    pub fn corpus<S: Into<String>>(message: S) -> Self {
        Error::Corpus {
            message: message.into(),
        }
    }
}
