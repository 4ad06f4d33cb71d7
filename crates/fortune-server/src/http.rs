//! Just enough HTTP/1.1 to answer one request per connection.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

/// Longest request line or header line accepted, in bytes.
pub const MAX_LINE: usize = 8 * 1024;

/// Most header lines read before the request is rejected.
pub const MAX_HEADERS: usize = 100;

/// Request methods the server distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `HEAD`
    Head,
    /// Anything else, kept verbatim.
    Other(String),
}

impl Method {
    fn parse(token: &str) -> Self {
        match token {
            "GET" => Self::Get,
            "HEAD" => Self::Head,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A parsed request line. Headers are read and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The request method.
    pub method: Method,
    /// The request target, as sent.
    pub path: String,
}

impl Request {
    /// Parse a request line such as `GET / HTTP/1.1`.
    ///
    /// Returns `None` unless the line has exactly a method, a target, and an
    /// `HTTP/` version.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.trim_end_matches(['\r', '\n']).split(' ');
        let method = parts.next().filter(|m| !m.is_empty())?;
        let path = parts.next().filter(|p| !p.is_empty())?;
        let version = parts.next()?;
        if !version.starts_with("HTTP/") || parts.next().is_some() {
            return None;
        }
        Some(Self {
            method: Method::parse(method),
            path: path.to_string(),
        })
    }
}

/// Why a request could not be read.
#[derive(Debug)]
pub enum ReadError {
    /// The peer closed the connection before sending a request line.
    Closed,
    /// The request was not valid HTTP, or exceeded the size limits.
    Malformed,
    /// The socket failed.
    Io(std::io::Error),
}

impl From<std::io::Error> for ReadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Read a request line and skip its headers.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, ReadError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    if read_line(reader, &mut line).await? == 0 {
        return Err(ReadError::Closed);
    }
    let request = Request::parse_line(&line).ok_or(ReadError::Malformed)?;

    for _ in 0..MAX_HEADERS {
        line.clear();
        let n = read_line(reader, &mut line).await?;
        if n == 0 || line == "\r\n" || line == "\n" {
            return Ok(request);
        }
    }
    Err(ReadError::Malformed)
}

async fn read_line<R>(reader: &mut R, line: &mut String) -> Result<usize, ReadError>
where
    R: AsyncBufRead + Unpin,
{
    let mut bytes = Vec::new();
    let n = reader
        .take(MAX_LINE as u64)
        .read_until(b'\n', &mut bytes)
        .await?;
    if n == MAX_LINE && !bytes.ends_with(b"\n") {
        return Err(ReadError::Malformed);
    }
    let text = String::from_utf8(bytes).map_err(|_| ReadError::Malformed)?;
    line.push_str(&text);
    Ok(n)
}

/// Response status codes the server sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200
    Ok,
    /// 400
    BadRequest,
    /// 405
    MethodNotAllowed,
    /// 500
    InternalServerError,
}

impl Status {
    /// Numeric status code.
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::MethodNotAllowed => 405,
            Self::InternalServerError => 500,
        }
    }

    /// Standard reason phrase.
    pub fn reason(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadRequest => "Bad Request",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::InternalServerError => "Internal Server Error",
        }
    }
}

/// A plain-text response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status line code.
    pub status: Status,
    /// Extra headers beyond the fixed ones.
    pub headers: Vec<(&'static str, String)>,
    /// Body text.
    pub body: String,
    /// Send headers only, as for `HEAD`.
    pub head_only: bool,
}

impl Response {
    /// A response with the given status and body.
    pub fn new(status: Status, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
            head_only: false,
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Drop the body on the wire while keeping its `Content-Length`.
    pub fn without_body(mut self) -> Self {
        self.head_only = true;
        self
    }

    /// Serialize to HTTP/1.1 wire form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n",
            self.status.code(),
            self.status.reason(),
            self.body.len(),
        );
        for (name, value) in &self.headers {
            head.push_str(name);
            head.push_str(": ");
            head.push_str(value);
            head.push_str("\r\n");
        }
        head.push_str("\r\n");

        let mut bytes = head.into_bytes();
        if !self.head_only {
            bytes.extend_from_slice(self.body.as_bytes());
        }
        bytes
    }
}
