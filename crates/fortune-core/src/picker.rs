//! Uniform random selection of a fortune.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::corpus::Corpus;
use crate::error::{FortuneError, FortuneResult};

/// A selected record and the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fortune {
    /// Name of the source file, including extension.
    pub file: String,
    /// The record text, without a trailing newline.
    pub text: String,
}

impl Fortune {
    /// The record as printed or served: its text plus one newline.
    pub fn served(&self) -> String {
        format!("{}\n", self.text)
    }
}

impl fmt::Display for Fortune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text)
    }
}

/// Pick a file uniformly from the corpus, then a record uniformly from
/// that file.
///
/// An empty corpus or an empty file is an error rather than an
/// out-of-range index.
pub fn pick(corpus: &Corpus, rng: &mut StdRng) -> FortuneResult<Fortune> {
    let files = corpus.fortune_files()?;
    if files.is_empty() {
        return Err(FortuneError::NoFortuneFiles);
    }
    let file = files[rng.random_range(0..files.len())].clone();

    let mut records = corpus.records(&file)?;
    if records.is_empty() {
        return Err(FortuneError::EmptyFile { file });
    }
    let index = rng.random_range(0..records.len());
    debug!(file = %file, index, of = records.len(), "picked fortune");

    Ok(Fortune {
        text: records.swap_remove(index),
        file,
    })
}
