//! Configuration shared by the front ends.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::corpus::Corpus;
use crate::source::DirSource;

/// Where fortunes come from and how the generator is seeded.
#[derive(Debug, Clone, Default)]
pub struct FortuneConfig {
    /// RNG seed for reproducible picks. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Directory to read fortune files from. `None` uses the bundled corpus.
    pub corpus_dir: Option<PathBuf>,
}

impl FortuneConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Read fortunes from a directory instead of the bundle.
    pub fn with_corpus_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.corpus_dir = Some(dir.into());
        self
    }

    /// Open the configured corpus.
    pub fn corpus(&self) -> Corpus {
        match &self.corpus_dir {
            Some(dir) => {
                info!(dir = %dir.display(), "reading fortunes from directory");
                Corpus::new(DirSource::new(dir.clone()))
            }
            None => Corpus::bundled(),
        }
    }

    /// Create the process generator. Call once per process.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
