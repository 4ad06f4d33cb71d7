//! Corpus loading and random selection for fortune.
//!
//! A corpus is a flat set of `.fortune` text files whose records are
//! separated by `%` lines. [`pick`] chooses a file uniformly, then a record
//! in it uniformly. Both the CLI and the HTTP server go through this crate.

/// The fortune files compiled into the binary.
pub mod bundled;
/// Configuration for corpus location and RNG seeding.
pub mod config;
/// File enumeration, loading, and parsing over a source.
pub mod corpus;
/// Error types used throughout the crate.
pub mod error;
/// Uniform random selection of a fortune.
pub mod picker;
/// Splitting file text into records.
pub mod record;
/// Read-only providers of corpus files.
pub mod source;

/// Re-export the bundled source.
pub use bundled::Bundled;
/// Re-export configuration.
pub use config::FortuneConfig;
/// Re-export the corpus loader.
pub use corpus::{Corpus, FORTUNE_EXTENSION, display_name};
/// Re-export error types.
pub use error::{CorpusError, CorpusResult, FortuneError, FortuneResult};
/// Re-export the picker.
pub use picker::{Fortune, pick};
/// Re-export the record parser.
pub use record::{DELIMITER, parse_records};
/// Re-export corpus sources.
pub use source::{CorpusSource, DirSource, MemorySource};
