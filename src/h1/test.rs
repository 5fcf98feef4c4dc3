use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, ReadBuf};

use crate::h1::{
    ParseError, ParseState, Request, RequestError, RequestLineError, RequestParser, read_request,
    read_request_with_capacity,
};
use crate::headers::HeaderError;

/// Reader that returns at most `per_read` bytes on each read.
struct ChunkReader {
    data: Vec<u8>,
    per_read: usize,
    pos: usize,
}

impl ChunkReader {
    fn new(data: impl Into<Vec<u8>>, per_read: usize) -> Self {
        Self {
            data: data.into(),
            per_read,
            pos: 0,
        }
    }
}

impl AsyncRead for ChunkReader {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let end = (self.pos + self.per_read)
            .min(self.data.len())
            .min(self.pos + buf.remaining());
        let chunk = &self.data[self.pos..end];
        buf.put_slice(chunk);
        self.pos = end;
        Poll::Ready(Ok(()))
    }
}

const GOOD_REQUEST: &[u8] = b"POST /submit HTTP/1.1\r\n\
    Host: localhost:42069\r\n\
    User-Agent: curl/7.81.0\r\n\
    Accept: */*\r\n\
    Content-Length: 13\r\n\
    \r\n\
    hello world!\n";

// ===== Parser =====

#[test]
fn test_request_line_and_headers() {
    let request = Request::parse(b"GET /home HTTP/1.1\r\nHost: x\r\n\r\n")
        .unwrap()
        .unwrap();

    assert_eq!(request.method(), "GET");
    assert_eq!(request.target(), "/home");
    assert_eq!(request.version(), "1.1");
    assert_eq!(request.headers().len(), 1);
    assert_eq!(request.headers().get("host"), Some("x"));
    assert!(request.body().is_empty());
    assert_eq!(request.content_length(), None);
}

#[test]
fn test_parse_step_transitions() {
    let mut parser = RequestParser::new();
    assert_eq!(parser.state(), ParseState::Initialized);

    assert_eq!(parser.parse_step(b"GET / HTT").unwrap(), 0);
    assert_eq!(parser.state(), ParseState::Initialized);

    assert_eq!(parser.parse_step(b"GET / HTTP/1.1\r\nHost: x\r\n").unwrap(), 16);
    assert_eq!(parser.state(), ParseState::ParsingHeaders);

    assert_eq!(parser.parse_step(b"Host: x\r\n\r\n").unwrap(), 9);
    assert_eq!(parser.state(), ParseState::ParsingHeaders);

    assert_eq!(parser.parse_step(b"\r\n").unwrap(), 2);
    assert_eq!(parser.state(), ParseState::ParsingBody);

    assert_eq!(parser.parse_step(b"").unwrap(), 0);
    assert_eq!(parser.state(), ParseState::Done);

    assert_eq!(parser.parse_step(b"GET"), Err(ParseError::AlreadyDone));
    assert_eq!(parser.parse(b""), Err(ParseError::AlreadyDone));
}

#[test]
fn test_body() {
    let request = Request::parse(GOOD_REQUEST).unwrap().unwrap();
    assert_eq!(request.method(), "POST");
    assert_eq!(request.headers().get("content-length"), Some("13"));
    assert_eq!(request.content_length(), Some(13));
    assert_eq!(&request.body()[..], b"hello world!\n");
}

#[test]
fn test_into_parts() {
    let (line, headers, body) = Request::parse(GOOD_REQUEST).unwrap().unwrap().into_parts();
    assert_eq!(line.to_string(), "POST /submit HTTP/1.1");
    assert_eq!(headers.get("host"), Some("localhost:42069"));
    assert_eq!(&body[..], b"hello world!\n");
}

#[test]
fn test_zero_content_length() {
    let mut parser = RequestParser::new();
    let input = b"POST /submit HTTP/1.1\r\nContent-Length: 0\r\n\r\n";
    assert_eq!(parser.parse(input).unwrap(), input.len());
    assert!(parser.is_done());

    let request = parser.into_request().unwrap();
    assert!(request.body().is_empty());
}

#[test]
fn test_body_without_content_length_is_ignored() {
    let mut parser = RequestParser::new();
    let input = b"POST /submit HTTP/1.1\r\nHost: x\r\n\r\nignored";
    assert_eq!(parser.parse(input).unwrap(), input.len());

    let request = parser.into_request().unwrap();
    assert!(request.body().is_empty());
}

#[test]
fn test_partial_body() {
    let mut parser = RequestParser::new();
    let input = b"POST /submit HTTP/1.1\r\nContent-Length: 5\r\n\r\nhel";
    assert_eq!(parser.parse(input).unwrap(), input.len());
    assert_eq!(parser.state(), ParseState::ParsingBody);

    assert_eq!(parser.parse(b"lo").unwrap(), 2);
    assert!(parser.is_done());
    assert_eq!(&parser.into_request().unwrap().body()[..], b"hello");
}

#[test]
fn test_body_longer_than_content_length() {
    let err = Request::parse(b"POST /submit HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello!")
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::LengthMismatch {
            declared: 5,
            received: 6
        }
    );
}

#[test]
fn test_invalid_content_length() {
    for value in ["abc", "-1", "+5", "5, 5", "1.5"] {
        let input = format!("POST / HTTP/1.1\r\nContent-Length: {value}\r\n\r\n");
        let err = Request::parse(input.as_bytes()).unwrap_err();
        assert_eq!(err, ParseError::InvalidContentLength(value.to_owned()));
    }
}

#[test]
fn test_duplicate_headers() {
    let request = Request::parse(b"GET / HTTP/1.1\r\nFoo: 1\r\nfoo: 2\r\n\r\n")
        .unwrap()
        .unwrap();
    assert_eq!(request.headers().get("foo"), Some("1, 2"));
}

#[test]
fn test_empty_header_value() {
    let request = Request::parse(b"GET / HTTP/1.1\r\nX-Empty:\r\n\r\n").unwrap().unwrap();
    assert_eq!(request.headers().get("x-empty"), Some(""));
}

#[test]
fn test_unsupported_version() {
    let mut parser = RequestParser::new();
    let err = parser.parse(b"GET / HTTP/2.0\r\n").unwrap_err();
    assert!(matches!(
        err,
        ParseError::RequestLine(RequestLineError::UnsupportedVersion(ref v)) if v == "2.0"
    ));
    assert_eq!(parser.state(), ParseState::Initialized);
}

#[test]
fn test_malformed_header() {
    let err = Request::parse(b"GET / HTTP/1.1\r\nHost : x\r\n\r\n").unwrap_err();
    assert_eq!(err, ParseError::Header(HeaderError::TrailingSpace));
}

#[test]
fn test_incomplete_parse() {
    assert_eq!(Request::parse(b"GET / HTTP/1.1\r\nHost: x\r\n").unwrap(), None);
    assert_eq!(Request::parse(b"").unwrap(), None);
}

#[test]
fn test_display() {
    let request = Request::parse(GOOD_REQUEST).unwrap().unwrap();
    let dump = request.to_string();
    assert!(dump.starts_with("Request line:\n- Method: POST\n- Target: /submit\n- Version: 1.1\n"));
    assert!(dump.contains("Headers:\n- accept: */*\n- content-length: 13\n- host: localhost:42069\n"));
    assert!(dump.ends_with("Body:\nhello world!\n"));
}

// ===== Driver =====

#[tokio::test]
async fn test_read_request_chunk_size_independent() {
    let mut expected = &GOOD_REQUEST[..];
    let expected = read_request(&mut expected).await.unwrap();

    for per_read in 1..=GOOD_REQUEST.len() {
        let mut io = ChunkReader::new(GOOD_REQUEST, per_read);
        let request = read_request(&mut io).await.unwrap();
        assert_eq!(request, expected, "differ with {per_read} bytes per read");
    }
}

#[tokio::test]
async fn test_read_request_large_buffer() {
    let mut io = ChunkReader::new(GOOD_REQUEST, 3);
    let request = read_request_with_capacity(&mut io, 1024).await.unwrap();
    assert_eq!(&request.body()[..], b"hello world!\n");
}

#[tokio::test]
async fn test_read_request_stops_at_done() {
    // bytes after the request are left unread
    let mut io = ChunkReader::new(&b"GET / HTTP/1.1\r\n\r\n"[..], 18);
    let request = read_request(&mut io).await.unwrap();
    assert_eq!(request.target(), "/");
}

#[tokio::test]
async fn test_read_request_incomplete_body() {
    let mut io = ChunkReader::new(&b"POST / HTTP/1.1\r\nContent-Length: 5\r\n\r\nhell"[..], 2);
    let err = read_request(&mut io).await.unwrap_err();
    assert!(matches!(err, RequestError::Incomplete { state: ParseState::ParsingBody }));
    assert!(err.is_client_error());
    assert_eq!(err.to_string(), "incomplete request, in state: parsing body");
}

#[tokio::test]
async fn test_read_request_incomplete_headers() {
    let mut io = ChunkReader::new(&b"GET / HTTP/1.1\r\nHost: x\r\n"[..], 4);
    let err = read_request(&mut io).await.unwrap_err();
    assert!(matches!(err, RequestError::Incomplete { state: ParseState::ParsingHeaders }));
}

#[tokio::test]
async fn test_read_request_empty_stream() {
    let mut io: &[u8] = b"";
    let err = read_request(&mut io).await.unwrap_err();
    assert!(matches!(err, RequestError::Incomplete { state: ParseState::Initialized }));
}

#[tokio::test]
async fn test_read_request_body_too_long() {
    let mut io: &[u8] = b"POST / HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello!";
    let err = read_request_with_capacity(&mut io, 64).await.unwrap_err();
    assert!(matches!(
        err,
        RequestError::Parse(ParseError::LengthMismatch { declared: 5, received: 6 })
    ));
}

#[tokio::test]
async fn test_read_request_malformed() {
    let mut io = ChunkReader::new(&b"GET / HTTP/2.0\r\nHost: x\r\n\r\n"[..], 5);
    let err = read_request(&mut io).await.unwrap_err();
    assert!(matches!(err, RequestError::Parse(ParseError::RequestLine(_))));
    assert!(err.is_client_error());
}

// ===== Logging =====

#[cfg(feature = "log")]
#[test]
fn test_log_macros_outside_log_module() {
    use crate::log;

    let state = ParseState::ParsingBody;
    log::trace!("state: {state}");
    log::debug!("state: {state}");
    log::info!("state: {state}");
    log::error!("state: {state}");
}
