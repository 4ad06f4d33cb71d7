//! Read-only providers of corpus files.
//!
//! A [`CorpusSource`] can list the names under its root and read one file by
//! name. Parsing and selection only ever go through this trait, so the
//! embedded bundle, a directory on disk, and an in-memory set are
//! interchangeable.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{CorpusError, CorpusResult};

/// A read-only collection of named text files.
pub trait CorpusSource: Send + Sync {
    /// List every entry name directly under the root.
    fn names(&self) -> CorpusResult<Vec<String>>;

    /// Read the full text of the named entry.
    fn read(&self, name: &str) -> CorpusResult<String>;
}

/// Corpus files read from a directory on disk.
///
/// Entries are listed in sorted order so a seeded pick is reproducible
/// regardless of the platform's directory iteration order.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Create a source rooted at `root`. The directory is not touched until
    /// the first call.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CorpusSource for DirSource {
    fn names(&self) -> CorpusResult<Vec<String>> {
        let unreadable = |source| CorpusError::RootUnreadable {
            root: self.root.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            // Follows symlinks, matching what `read` will open.
            if !entry.path().is_file() {
                continue;
            }
            // Names that aren't UTF-8 can't be addressed through `read` anyway.
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn read(&self, name: &str) -> CorpusResult<String> {
        if name.is_empty() || name.contains(['/', '\\']) || name == ".." {
            return Err(CorpusError::FileNotFound(name.to_string()));
        }

        std::fs::read_to_string(self.root.join(name)).map_err(|source| match source.kind() {
            ErrorKind::NotFound => CorpusError::FileNotFound(name.to_string()),
            ErrorKind::InvalidData => CorpusError::NotUtf8(name.to_string()),
            _ => CorpusError::ReadFile {
                name: name.to_string(),
                source,
            },
        })
    }
}

/// Corpus files held in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: Vec<(String, String)>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any existing file with the same name.
    pub fn with_file(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        let name = name.into();
        let text = text.into();
        match self.files.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = text,
            None => self.files.push((name, text)),
        }
        self
    }

    /// Number of files held.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no files are held.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl CorpusSource for MemorySource {
    fn names(&self) -> CorpusResult<Vec<String>> {
        Ok(self.files.iter().map(|(name, _)| name.clone()).collect())
    }

    fn read(&self, name: &str) -> CorpusResult<String> {
        self.files
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| CorpusError::FileNotFound(name.to_string()))
    }
}
