//! Configuration for the HTTP server.

use std::net::SocketAddr;
use std::time::Duration;

use fortune_core::FortuneConfig;

/// Address the server binds when none is given.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind: SocketAddr,
    /// How long a client may take to send its request head.
    pub read_timeout: Duration,
    /// Corpus and generator settings.
    pub fortune: FortuneConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            read_timeout: Duration::from_secs(10),
            fortune: FortuneConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Set the listen address.
    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    /// Set the request read timeout.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Set the corpus and generator settings.
    pub fn with_fortune(mut self, fortune: FortuneConfig) -> Self {
        self.fortune = fortune;
        self
    }
}
