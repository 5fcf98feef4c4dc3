use std::{fmt, io};

use super::{ParseState, parser::RequestLineError};
use crate::headers::HeaderError;

/// An error that aborts parsing of a request.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Malformed request line.
    RequestLine(RequestLineError),
    /// Malformed header field.
    Header(HeaderError),
    /// `Content-Length` is not a non-negative integer.
    InvalidContentLength(String),
    /// Body is longer than the declared `Content-Length`.
    LengthMismatch {
        declared: usize,
        received: usize,
    },
    /// Parser is given more bytes after the request is complete.
    AlreadyDone,
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RequestLine(err) => Some(err),
            Self::Header(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestLine(err) => err.fmt(f),
            Self::Header(err) => err.fmt(f),
            Self::InvalidContentLength(value) => {
                write!(f, "Content-Length header contains invalid data (non-numeric): {value}")
            }
            Self::LengthMismatch { declared, received } => write!(
                f,
                "body's length doesn't match Content-Length header, \
                Content-Length: {declared}, body's length: {received}"
            ),
            Self::AlreadyDone => f.write_str("trying to read data in a done state"),
        }
    }
}

impl From<RequestLineError> for ParseError {
    fn from(v: RequestLineError) -> Self {
        Self::RequestLine(v)
    }
}

impl From<HeaderError> for ParseError {
    fn from(v: HeaderError) -> Self {
        Self::Header(v)
    }
}

// ===== Request Error =====

/// An error that can occur when reading a request from IO.
#[derive(Debug)]
pub enum RequestError {
    /// Request bytes are malformed.
    Parse(ParseError),
    /// Peer closed the connection before the request is complete.
    Incomplete {
        state: ParseState,
    },
    /// IO error other than end of stream.
    Io(io::Error),
}

impl RequestError {
    /// Returns `true` if this error is caused by the request content rather than the transport.
    ///
    /// A response can still be written to the peer for these errors.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Incomplete { .. })
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Incomplete { .. } => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => err.fmt(f),
            Self::Incomplete { state } => write!(f, "incomplete request, in state: {state}"),
            Self::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl From<ParseError> for RequestError {
    fn from(v: ParseError) -> Self {
        Self::Parse(v)
    }
}

impl From<io::Error> for RequestError {
    fn from(v: io::Error) -> Self {
        Self::Io(v)
    }
}
