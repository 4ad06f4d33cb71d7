//! Shared server state and request handling.

use std::sync::{Arc, Mutex, PoisonError};

use fortune_core::{Corpus, Fortune, FortuneResult};
use rand::rngs::StdRng;
use tracing::{debug, error};

use crate::http::{Method, Request, Response, Status};

/// State shared by every connection: the read-only corpus and the process
/// generator.
#[derive(Debug, Clone)]
pub struct AppState {
    corpus: Arc<Corpus>,
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// Wrap a corpus and the process generator for sharing across tasks.
    pub fn new(corpus: Corpus, rng: StdRng) -> Self {
        Self {
            corpus: Arc::new(corpus),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Pick a fortune, holding the generator lock only for the pick.
    pub fn fortune(&self) -> FortuneResult<Fortune> {
        // A panic mid-pick leaves the generator in a valid state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        fortune_core::pick(&self.corpus, &mut rng)
    }

    /// Answer one request.
    pub fn handle(&self, request: &Request) -> Response {
        let head_only = match &request.method {
            Method::Get => false,
            Method::Head => true,
            Method::Other(_) => {
                return Response::new(Status::MethodNotAllowed, "method not allowed\n")
                    .with_header("Allow", "GET, HEAD");
            }
        };

        let response = match self.fortune() {
            Ok(fortune) => {
                debug!(file = %fortune.file, path = %request.path, "serving fortune");
                Response::new(Status::Ok, fortune.served())
            }
            Err(e) => {
                error!(error = %e, "cannot serve fortune");
                Response::new(Status::InternalServerError, format!("{e}\n"))
            }
        };

        if head_only {
            response.without_body()
        } else {
            response
        }
    }
}
