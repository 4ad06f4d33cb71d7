//! Talks raw HTTP/1.1 to a running server on an ephemeral port.

use std::net::SocketAddr;
use std::time::Duration;

use fortune_core::{Corpus, CorpusError, CorpusResult, CorpusSource, MemorySource};
use fortune_server::AppState;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct TestServer {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    async fn start(source: impl CorpusSource + 'static) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = AppState::new(Corpus::new(source), StdRng::seed_from_u64(42));
        let (stop, stopped) = oneshot::channel::<()>();
        let handle = tokio::spawn(fortune_server::serve(
            listener,
            state,
            Duration::from_millis(500),
            async move {
                let _ = stopped.await;
            },
        ));
        Self { addr, stop, handle }
    }

    async fn send(&self, raw: &[u8]) -> String {
        let mut stream = TcpStream::connect(self.addr).await.unwrap();
        stream.write_all(raw).await.unwrap();
        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.unwrap();
        String::from_utf8(response).unwrap()
    }

    async fn stop(self) {
        self.stop.send(()).unwrap();
        self.handle.await.unwrap().unwrap();
    }
}

fn single() -> MemorySource {
    MemorySource::new().with_file("only.fortune", "Well begun is half done.\n")
}

#[tokio::test]
async fn get_returns_fortune() {
    let server = TestServer::start(single()).await;
    let response = server
        .send(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n")
        .await;

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"), "{response}");
    assert!(response.contains("Content-Type: text/plain; charset=utf-8\r\n"));
    assert!(response.contains("Content-Length: 25\r\n"));
    assert!(response.ends_with("\r\n\r\nWell begun is half done.\n"));
    server.stop().await;
}

#[tokio::test]
async fn any_path_is_served() {
    let server = TestServer::start(single()).await;
    let response = server.send(b"GET /favicon.ico HTTP/1.0\r\n\r\n").await;
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.ends_with("Well begun is half done.\n"));
    server.stop().await;
}

#[tokio::test]
async fn head_omits_body() {
    let server = TestServer::start(single()).await;
    let response = server.send(b"HEAD / HTTP/1.1\r\n\r\n").await;
    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(response.contains("Content-Length: 25\r\n"));
    assert!(response.ends_with("\r\n\r\n"));
    server.stop().await;
}

#[tokio::test]
async fn post_is_not_allowed() {
    let server = TestServer::start(single()).await;
    let response = server
        .send(b"POST / HTTP/1.1\r\nContent-Length: 0\r\n\r\n")
        .await;
    assert!(response.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"));
    assert!(response.contains("Allow: GET, HEAD\r\n"));
    server.stop().await;
}

#[tokio::test]
async fn garbage_is_bad_request() {
    let server = TestServer::start(single()).await;
    let response = server.send(b"hello\r\n\r\n").await;
    assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    server.stop().await;
}

#[tokio::test]
async fn empty_corpus_is_server_error() {
    let server = TestServer::start(MemorySource::new()).await;
    let response = server.send(b"GET / HTTP/1.1\r\n\r\n").await;
    assert!(response.starts_with("HTTP/1.1 500 Internal Server Error\r\n"));
    assert!(response.contains("fortune unavailable: no fortune files in corpus"));
    server.stop().await;
}

/// Lists a file that cannot be read.
struct Unreadable;

impl CorpusSource for Unreadable {
    fn names(&self) -> CorpusResult<Vec<String>> {
        Ok(vec!["ghost.fortune".into()])
    }

    fn read(&self, name: &str) -> CorpusResult<String> {
        Err(CorpusError::ReadFile {
            name: name.into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
    }
}

#[tokio::test]
async fn unreadable_file_is_server_error_with_cause() {
    let server = TestServer::start(Unreadable).await;
    let response = server.send(b"GET / HTTP/1.1\r\n\r\n").await;
    assert!(response.starts_with("HTTP/1.1 500 Internal Server Error\r\n"));
    assert!(response.contains("fortune unavailable: cannot read fortune file ghost.fortune"));
    server.stop().await;
}

#[tokio::test]
async fn concurrent_requests_all_succeed() {
    let server = TestServer::start(
        MemorySource::new()
            .with_file("a.fortune", "A")
            .with_file("b.fortune", "B"),
    )
    .await;

    let mut tasks = Vec::new();
    for _ in 0..16 {
        let addr = server.addr;
        tasks.push(tokio::spawn(async move {
            let mut stream = TcpStream::connect(addr).await.unwrap();
            stream.write_all(b"GET / HTTP/1.1\r\n\r\n").await.unwrap();
            let mut response = String::new();
            stream.read_to_string(&mut response).await.unwrap();
            response
        }));
    }

    for task in tasks {
        let response = task.await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.ends_with("\r\n\r\nA\n") || response.ends_with("\r\n\r\nB\n"));
    }
    server.stop().await;
}

#[tokio::test]
async fn silent_client_is_dropped_after_timeout() {
    let server = TestServer::start(single()).await;
    let mut stream = TcpStream::connect(server.addr).await.unwrap();
    let mut response = Vec::new();
    let read = tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut response))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(read, 0);
    server.stop().await;
}
