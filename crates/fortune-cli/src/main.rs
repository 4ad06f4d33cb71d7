//! Command-line front end: print a random fortune.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;
use fortune_core::FortuneConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fortune",
    about = "Print a random, hopefully interesting, adage",
    version
)]
struct Cli {
    /// Print out the list of files which would be searched, but don't print a fortune
    #[arg(short = 'f', long = "files")]
    list_files: bool,

    /// Show the cookie file from which the fortune came
    #[arg(short = 'c', long = "cookie")]
    show_file: bool,

    /// Read fortune files from this directory instead of the bundled set
    #[arg(short, long, env = "FORTUNE_DIR")]
    dir: Option<PathBuf>,

    /// RNG seed for a reproducible pick
    #[arg(long, env = "FORTUNE_SEED")]
    seed: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> FortuneConfig {
        let mut config = FortuneConfig::default();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(dir) = &self.dir {
            config = config.with_corpus_dir(dir);
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    let corpus = config.corpus();

    let result = if cli.list_files {
        commands::files::run(&corpus)
    } else {
        commands::pick::run(&corpus, &mut config.rng(), cli.show_file)
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
