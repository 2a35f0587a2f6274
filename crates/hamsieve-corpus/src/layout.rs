//! Corpus directory layout.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use hamsieve_core::{Error, Label, Result};

/// Discover the label directories of a corpus root.
///
/// Every immediate subdirectory is a label; the returned list is sorted by
/// label name. Fails if the root is not a directory or contains no
/// subdirectories.
pub fn label_dirs(root: &Path) -> Result<Vec<(Label, PathBuf)>> {
    if !root.is_dir() {
        return Err(Error::corpus(format!(
            "corpus root is not a directory: {}",
            root.display()
        )));
    }

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            log::warn!("skipping non-UTF-8 directory name under {}", root.display());
            continue;
        };
        dirs.push((Label::new(name), entry.path()));
    }

    if dirs.is_empty() {
        return Err(Error::corpus(format!(
            "no label directories under {}",
            root.display()
        )));
    }

    dirs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(dirs)
}

/// Collect the document files under a label directory, recursively.
///
/// Unreadable entries are logged and skipped rather than aborting a long
/// training run. The list is sorted for deterministic processing order.
pub fn corpus_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(err) => log::warn!("skipping unreadable entry under {}: {err}", dir.display()),
        }
    }
    files.sort();
    files
}

/// Read a document as text.
///
/// Mail bodies in the Enron corpus are not reliably valid UTF-8, so the
/// read is lossy: invalid sequences become replacement characters instead
/// of failing the whole run.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn make_corpus(dir: &TempDir) -> PathBuf {
        let root = dir.path().join("corpus");
        for (label, files) in [("spam", 2), ("ham", 3)] {
            let label_dir = root.join(label);
            fs::create_dir_all(&label_dir).unwrap();
            for i in 0..files {
                fs::write(label_dir.join(format!("{i:04}.msg")), "body").unwrap();
            }
        }
        root
    }

    #[test]
    fn test_label_dirs_sorted() {
        let dir = TempDir::new().unwrap();
        let root = make_corpus(&dir);

        let dirs = label_dirs(&root).unwrap();
        let labels: Vec<&str> = dirs.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["ham", "spam"]);
    }

    #[test]
    fn test_label_dirs_ignores_plain_files() {
        let dir = TempDir::new().unwrap();
        let root = make_corpus(&dir);
        fs::write(root.join("README"), "not a label").unwrap();

        let dirs = label_dirs(&root).unwrap();
        assert_eq!(dirs.len(), 2);
    }

    #[test]
    fn test_label_dirs_missing_root() {
        let dir = TempDir::new().unwrap();
        let err = label_dirs(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::Corpus { .. }));
    }

    #[test]
    fn test_label_dirs_empty_root() {
        let dir = TempDir::new().unwrap();
        let err = label_dirs(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Corpus { .. }));
    }

    #[test]
    fn test_corpus_files_recursive_and_sorted() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("spam");
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("b.msg"), "b").unwrap();
        fs::write(root.join("a.msg"), "a").unwrap();
        fs::write(root.join("nested/c.msg"), "c").unwrap();

        let files = corpus_files(&root);
        assert_eq!(files.len(), 3);
        assert!(files[0].ends_with("a.msg"));
        assert!(files[1].ends_with("b.msg"));
        assert!(files[2].ends_with("nested/c.msg"));
    }

    #[test]
    fn test_read_document_lossy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mail.msg");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"subject: caf\xe9 offer\n").unwrap();

        let text = read_document(&path).unwrap();
        assert!(text.starts_with("subject: caf"));
        assert!(text.contains('\u{FFFD}'));
    }
}
