//! Classification label newtype.
//!
//! Labels name the categories a document can belong to. For the Enron spam
//! corpus these are `spam` and `ham`, but the label set is open-ended: a
//! corpus with other subdirectory names produces other labels.
//!
//! Labels are normalized on construction: trimmed and lowercased, so that
//! `"Spam"`, `" SPAM "`, and `"spam"` all compare equal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized classification label.
///
/// # Examples
///
/// ```
/// use hamsieve_core::Label;
///
/// assert_eq!(Label::new(" SPAM "), Label::spam());
/// assert_eq!(Label::new("Ham").as_str(), "ham");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Label(String);

impl Label {
    /// Create a label, trimming whitespace and lowercasing.
    pub fn new<S: AsRef<str>>(name: S) -> Self {
        Label(name.as_ref().trim().to_lowercase())
    }

    /// The `spam` label (unwanted mail).
    pub fn spam() -> Self {
        Label("spam".to_string())
    }

    /// The `ham` label (legitimate mail).
    pub fn ham() -> Self {
        Label("ham".to_string())
    }

    /// The normalized label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Label::new(name)
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Label::new(name)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.0
    }
}

// ============================================================================
// Tests
// ============================================================================
