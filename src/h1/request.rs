use bytes::{Bytes, BytesMut};
use std::fmt;

use super::error::ParseError;
use super::parser::RequestLine;
use crate::common::ParseResult;
use crate::headers::HeaderMap;

/// Progress of a [`RequestParser`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseState {
    /// Waiting for the request line.
    Initialized,
    /// Request line is parsed, waiting for header fields.
    ParsingHeaders,
    /// Header section is complete, collecting the body.
    ParsingBody,
    /// Request is complete.
    Done,
}

impl fmt::Display for ParseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Initialized => "initialized",
            Self::ParsingHeaders => "parsing headers",
            Self::ParsingBody => "parsing body",
            Self::Done => "done",
        })
    }
}

#[derive(Debug)]
enum State {
    Initialized,
    ParsingHeaders,
    ParsingBody {
        /// Body bytes received so far.
        read: usize,
    },
    Done,
}

// ===== Parser =====

/// Incremental HTTP/1.1 request parser.
///
/// The parser is fed with whatever bytes are available and reports how many of them it consumed.
/// Consumed bytes must not be resubmitted, unconsumed bytes must be resubmitted with more data
/// appended.
///
/// A request without `Content-Length` has no body. Chunked request body is not supported.
///
/// ```rust
/// use wirehttp::h1::RequestParser;
///
/// let mut parser = RequestParser::new();
/// assert_eq!(parser.parse(b"GET /home HTTP/1.1\r\nHo").unwrap(), 20);
/// assert_eq!(parser.parse(b"Host: x\r\n\r\n").unwrap(), 11);
///
/// let request = parser.into_request().unwrap();
/// assert_eq!(request.target(), "/home");
/// assert_eq!(request.headers().get("host"), Some("x"));
/// ```
#[derive(Debug)]
pub struct RequestParser {
    state: State,
    line: Option<RequestLine>,
    headers: HeaderMap,
    body: BytesMut,
}

impl Default for RequestParser {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl RequestParser {
    /// Create new parser in the [`Initialized`][ParseState::Initialized] state.
    pub fn new() -> Self {
        Self {
            state: State::Initialized,
            line: None,
            headers: HeaderMap::new(),
            body: BytesMut::new(),
        }
    }

    /// Returns the current parsing progress.
    pub fn state(&self) -> ParseState {
        match self.state {
            State::Initialized => ParseState::Initialized,
            State::ParsingHeaders => ParseState::ParsingHeaders,
            State::ParsingBody { .. } => ParseState::ParsingBody,
            State::Done => ParseState::Done,
        }
    }

    /// Returns `true` if a complete request have been parsed.
    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    /// Parse as much of `bytes` as possible.
    ///
    /// Single steps are repeated until the request is complete, or a step cannot make progress
    /// without more bytes. Returns the total number of bytes consumed.
    ///
    /// # Errors
    ///
    /// Returns error if the request is malformed, or the parser is already done.
    pub fn parse(&mut self, bytes: &[u8]) -> Result<usize, ParseError> {
        let mut total = 0;
        loop {
            let read = self.parse_step(&bytes[total..])?;
            total += read;
            if read == 0 || self.is_done() {
                break Ok(total);
            }
        }
    }

    /// Perform a single state step, returns the number of bytes consumed.
    ///
    /// Zero bytes consumed means more input is required, unless the step completes the request.
    ///
    /// # Errors
    ///
    /// Returns error if the request is malformed, or the parser is already done.
    pub fn parse_step(&mut self, bytes: &[u8]) -> Result<usize, ParseError> {
        match self.state {
            State::Initialized => match RequestLine::parse_chunk(bytes) {
                ParseResult::Pending => Ok(0),
                ParseResult::Ok((line, read)) => {
                    self.line = Some(line);
                    self.state = State::ParsingHeaders;
                    Ok(read)
                }
                ParseResult::Err(err) => Err(err.into()),
            },
            State::ParsingHeaders => match self.headers.parse(bytes) {
                ParseResult::Pending => Ok(0),
                ParseResult::Ok(field) => {
                    if field.is_end() {
                        self.state = State::ParsingBody { read: 0 };
                    }
                    Ok(field.consumed())
                }
                ParseResult::Err(err) => Err(err.into()),
            },
            State::ParsingBody { read } => {
                let Some(declared) = content_length(&self.headers)? else {
                    // no framing without a declared length
                    self.state = State::Done;
                    return Ok(bytes.len());
                };

                let received = read + bytes.len();
                if received > declared {
                    return Err(ParseError::LengthMismatch { declared, received });
                }

                self.body.extend_from_slice(bytes);
                self.state = match received == declared {
                    true => State::Done,
                    false => State::ParsingBody { read: received },
                };
                Ok(bytes.len())
            }
            State::Done => Err(ParseError::AlreadyDone),
        }
    }

    /// Returns the parsed [`Request`].
    ///
    /// # Errors
    ///
    /// Returns the current state if the request is not complete yet.
    pub fn into_request(self) -> Result<Request, ParseState> {
        let state = self.state();
        match (self.state, self.line) {
            (State::Done, Some(line)) => Ok(Request {
                line,
                headers: self.headers,
                body: self.body.freeze(),
            }),
            _ => Err(state),
        }
    }
}

/// Returns the declared body length, if any.
fn content_length(headers: &HeaderMap) -> Result<Option<usize>, ParseError> {
    let Some(value) = headers.get("content-length") else {
        return Ok(None);
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidContentLength(value.to_owned()));
    }
    match value.parse() {
        Ok(len) => Ok(Some(len)),
        Err(_) => Err(ParseError::InvalidContentLength(value.to_owned())),
    }
}

// ===== Request =====

/// A complete HTTP/1.1 request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    line: RequestLine,
    headers: HeaderMap,
    body: Bytes,
}

impl Request {
    /// Parse a request from `bytes`, returns `None` if `bytes` does not contain a complete
    /// request.
    ///
    /// # Errors
    ///
    /// Returns error if the request is malformed.
    pub fn parse(bytes: &[u8]) -> Result<Option<Request>, ParseError> {
        let mut parser = RequestParser::new();
        parser.parse(bytes)?;
        Ok(parser.into_request().ok())
    }

    /// Returns the request line.
    #[inline]
    pub fn request_line(&self) -> &RequestLine {
        &self.line
    }

    /// Returns the request method.
    #[inline]
    pub fn method(&self) -> &str {
        self.line.method()
    }

    /// Returns the request target.
    #[inline]
    pub fn target(&self) -> &str {
        self.line.target()
    }

    /// Returns the HTTP version, this is always `"1.1"`.
    #[inline]
    pub fn version(&self) -> &str {
        self.line.version()
    }

    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[inline]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Returns the declared `Content-Length`, if any.
    ///
    /// For a parsed request, this is always equal to the body length when present.
    pub fn content_length(&self) -> Option<usize> {
        content_length(&self.headers).ok().flatten()
    }

    /// Destruct request into its parts.
    #[inline]
    pub fn into_parts(self) -> (RequestLine, HeaderMap, Bytes) {
        (self.line, self.headers, self.body)
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Request line:")?;
        writeln!(f, "- Method: {}", self.method())?;
        writeln!(f, "- Target: {}", self.target())?;
        writeln!(f, "- Version: {}", self.version())?;
        writeln!(f, "Headers:")?;

        let mut headers = self.headers.iter().collect::<Vec<_>>();
        headers.sort_unstable_by_key(|(name, _)| *name);
        for (name, value) in headers {
            writeln!(f, "- {name}: {value}")?;
        }

        writeln!(f, "Body:")?;
        write!(f, "{}", String::from_utf8_lossy(&self.body))
    }
}
