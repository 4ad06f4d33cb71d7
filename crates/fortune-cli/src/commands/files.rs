use std::io::{self, Write};

use fortune_core::{Corpus, display_name};

/// List the fortune files that a pick would choose from.
pub fn run(corpus: &Corpus) -> Result<(), String> {
    let files = corpus
        .fortune_files()
        .map_err(|e| format!("cannot list fortune files: {e}"))?;

    write_list(&mut io::stdout().lock(), &files).map_err(|e| format!("cannot write output: {e}"))
}

fn write_list(out: &mut impl Write, files: &[String]) -> io::Result<()> {
    for file in files {
        writeln!(out, "- {}", display_name(file))?;
    }
    out.flush()
}
