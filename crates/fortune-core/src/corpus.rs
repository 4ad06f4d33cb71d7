//! The corpus loader: file enumeration, content loading, and parsing.

use tracing::trace;

use crate::bundled::Bundled;
use crate::error::CorpusResult;
use crate::record::parse_records;
use crate::source::CorpusSource;

/// File extension that marks an entry as a fortune file.
pub const FORTUNE_EXTENSION: &str = ".fortune";

/// Strip the fortune extension from a file name, for display.
///
/// Names without the extension are returned unchanged.
pub fn display_name(file: &str) -> &str {
    file.strip_suffix(FORTUNE_EXTENSION).unwrap_or(file)
}

/// A read-only set of fortune files backed by a [`CorpusSource`].
pub struct Corpus {
    source: Box<dyn CorpusSource>,
}

impl Corpus {
    /// Create a corpus over any source.
    pub fn new(source: impl CorpusSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// The corpus compiled into the binary.
    pub fn bundled() -> Self {
        Self::new(Bundled)
    }

    /// Names of every fortune file under the root, in source order.
    pub fn fortune_files(&self) -> CorpusResult<Vec<String>> {
        let names = self.source.names()?;
        let files: Vec<String> = names
            .into_iter()
            .filter(|name| {
                name.len() > FORTUNE_EXTENSION.len() && name.ends_with(FORTUNE_EXTENSION)
            })
            .collect();
        trace!(count = files.len(), "enumerated fortune files");
        Ok(files)
    }

    /// Read a file's text with at most one trailing newline removed.
    pub fn load(&self, name: &str) -> CorpusResult<String> {
        let mut text = self.source.read(name)?;
        if text.ends_with('\n') {
            text.pop();
        }
        Ok(text)
    }

    /// Load a file and split it into records.
    pub fn records(&self, name: &str) -> CorpusResult<Vec<String>> {
        let records = parse_records(&self.load(name)?);
        trace!(file = name, count = records.len(), "parsed fortune file");
        Ok(records)
    }
}

impl std::fmt::Debug for Corpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Corpus").finish_non_exhaustive()
    }
}
