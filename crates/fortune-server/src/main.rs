//! HTTP server answering every GET with a random fortune.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use fortune_core::FortuneConfig;
use fortune_server::{AppState, DEFAULT_BIND, ServerConfig};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fortune-server",
    about = "Serve random fortunes over HTTP",
    version
)]
struct Args {
    /// Address to listen on
    #[arg(short, long, env = "FORTUNE_BIND", default_value = DEFAULT_BIND)]
    bind: SocketAddr,

    /// Read fortune files from this directory instead of the bundled set
    #[arg(short, long, env = "FORTUNE_DIR")]
    dir: Option<PathBuf>,

    /// RNG seed for reproducible picks
    #[arg(long, env = "FORTUNE_SEED")]
    seed: Option<u64>,

    /// Seconds a client may take to send its request
    #[arg(long, env = "FORTUNE_READ_TIMEOUT", default_value = "10")]
    read_timeout: u64,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> ServerConfig {
        let mut fortune = FortuneConfig::default();
        if let Some(seed) = self.seed {
            fortune = fortune.with_seed(seed);
        }
        if let Some(dir) = &self.dir {
            fortune = fortune.with_corpus_dir(dir);
        }
        ServerConfig::default()
            .with_bind(self.bind)
            .with_read_timeout(Duration::from_secs(self.read_timeout))
            .with_fortune(fortune)
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.config();
    let state = AppState::new(config.fortune.corpus(), config.fortune.rng());

    let listener = match TcpListener::bind(config.bind).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(bind = %config.bind, error = %e, "cannot bind");
            process::exit(1);
        }
    };

    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_err() {
            // No signal handler; run until killed.
            std::future::pending::<()>().await;
        }
    };

    if let Err(e) = fortune_server::serve(listener, state, config.read_timeout, shutdown).await {
        error!(error = %e, "server failed");
        process::exit(1);
    }
    info!("stopped");
}
