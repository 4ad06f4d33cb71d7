use std::io::{self, Write};

use fortune_core::{Corpus, Fortune};
use rand::rngs::StdRng;
use tracing::debug;

pub fn run(corpus: &Corpus, rng: &mut StdRng, show_file: bool) -> Result<(), String> {
    let fortune = fortune_core::pick(corpus, rng).map_err(|e| e.to_string())?;

    debug!(file = %fortune.file, "printing fortune");

    write_fortune(&mut io::stdout().lock(), &fortune, show_file)
        .map_err(|e| format!("cannot write output: {e}"))
}

fn write_fortune(out: &mut impl Write, fortune: &Fortune, show_file: bool) -> io::Result<()> {
    if show_file {
        writeln!(out, "\nsource: {}\n", fortune.file)?;
    }
    write!(out, "{fortune}")?;
    out.flush()
}
