//! Error types for corpus loading and fortune selection.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;

/// Result type for fortune selection.
pub type FortuneResult<T> = Result<T, FortuneError>;

/// Errors raised while reading from a corpus source.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus root could not be listed.
    #[error("cannot read corpus root {}: {source}", root.display())]
    RootUnreadable {
        /// The root that failed to list.
        root: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// No file with this name exists in the corpus.
    #[error("fortune file not found: {0}")]
    FileNotFound(String),

    /// The file exists but reading it failed.
    #[error("cannot read fortune file {name}: {source}")]
    ReadFile {
        /// The file being read.
        name: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8 text.
    #[error("fortune file {0} is not valid UTF-8")]
    NotUtf8(String),
}

/// Errors surfaced by the random picker.
///
/// Every variant renders as `fortune unavailable: ...`, so front ends can
/// report one error kind while keeping the cause available via
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum FortuneError {
    /// The corpus source failed.
    #[error("fortune unavailable: {0}")]
    Corpus(#[from] CorpusError),

    /// The corpus holds no `.fortune` files.
    #[error("fortune unavailable: no fortune files in corpus")]
    NoFortuneFiles,

    /// The chosen file parsed to zero records.
    #[error("fortune unavailable: {file} contains no fortunes")]
    EmptyFile {
        /// Name of the empty file, including extension.
        file: String,
    },
}
