//! The fortune files compiled into the binary.

use crate::error::{CorpusError, CorpusResult};
use crate::source::CorpusSource;

/// Every bundled file as `(name, text)`, sorted by name.
pub const FILES: &[(&str, &str)] = &[
    (
        "computers.fortune",
        include_str!("../fortunes/computers.fortune"),
    ),
    (
        "fortunes.fortune",
        include_str!("../fortunes/fortunes.fortune"),
    ),
    ("wisdom.fortune", include_str!("../fortunes/wisdom.fortune")),
];

/// The corpus embedded at build time. Needs no filesystem at runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bundled;

impl CorpusSource for Bundled {
    fn names(&self) -> CorpusResult<Vec<String>> {
        Ok(FILES.iter().map(|(name, _)| (*name).to_string()).collect())
    }

    fn read(&self, name: &str) -> CorpusResult<String> {
        FILES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, text)| (*text).to_string())
            .ok_or_else(|| CorpusError::FileNotFound(name.to_string()))
    }
}
