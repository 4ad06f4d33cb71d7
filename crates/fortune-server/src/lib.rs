//! Minimal HTTP front end serving random fortunes.
//!
//! Every `GET` request, whatever its path, gets one fortune as a plain-text
//! body. Each connection runs on its own task; the corpus is shared
//! read-only and the generator sits behind a mutex held only for a pick.

/// Shared state and request handling.
pub mod app;
/// Server configuration.
pub mod config;
/// Request parsing and response encoding.
pub mod http;

use std::future::Future;
use std::time::Duration;

use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

pub use app::AppState;
pub use config::{DEFAULT_BIND, ServerConfig};

use crate::http::{ReadError, Response, Status, read_request};

/// Accept connections until `shutdown` resolves.
///
/// Connections already accepted finish on their own tasks.
pub async fn serve<F>(
    listener: TcpListener,
    state: AppState,
    read_timeout: Duration,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()>,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "serving fortunes");
    }
    let mut shutdown = std::pin::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("shutting down");
                return Ok(());
            }
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "accept failed");
                        continue;
                    }
                };
                debug!(%peer, "connection accepted");
                let state = state.clone();
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, &state, read_timeout).await {
                        debug!(%peer, error = %e, "connection error");
                    }
                });
            }
        }
    }
}

async fn handle_connection(
    stream: TcpStream,
    state: &AppState,
    read_timeout: Duration,
) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream);

    let response = match tokio::time::timeout(read_timeout, read_request(&mut reader)).await {
        Ok(Ok(request)) => state.handle(&request),
        Ok(Err(ReadError::Malformed)) => Response::new(Status::BadRequest, "bad request\n"),
        Ok(Err(ReadError::Closed)) => return Ok(()),
        Ok(Err(ReadError::Io(e))) => return Err(e),
        Err(_) => {
            debug!("timed out reading request");
            return Ok(());
        }
    };

    let mut stream = reader.into_inner();
    stream.write_all(&response.to_bytes()).await?;
    stream.shutdown().await
}
