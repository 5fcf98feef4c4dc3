//! HTTP Response writing.
//!
//! [`Writer`] writes each response part directly to the underlying IO in call order, it is up to
//! the caller to write the parts in a valid order:
//!
//! 1. [`write_status_line`][Writer::write_status_line]
//! 2. [`write_headers`][Writer::write_headers]
//! 3. either [`write_body`][Writer::write_body], or any number of
//!    [`write_chunked_body`][Writer::write_chunked_body] followed by
//!    [`write_chunked_body_done`][Writer::write_chunked_body_done] and
//!    [`write_trailers`][Writer::write_trailers]
use std::{fmt, io};

use crate::headers::HeaderMap;
use crate::http::httpdate_now;

mod write;

pub use write::Writer;

#[cfg(test)]
mod test;

/// Create the baseline response headers.
///
/// Contains `Date`, `Content-Type: text/plain`, `Content-Length` and `Connection: close`. Callers
/// can override or remove any of them before writing.
///
/// ```rust
/// use wirehttp::response::default_headers;
///
/// let mut headers = default_headers(0);
/// headers.remove("content-length");
/// headers.replace("transfer-encoding", "chunked").unwrap();
/// assert_eq!(headers.get("Connection"), Some("close"));
/// ```
pub fn default_headers(content_length: usize) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.append_normalized("date".into(), httpdate_now());
    headers.append_normalized("content-type".into(), "text/plain".into());
    headers.append_normalized(
        "content-length".into(),
        itoa::Buffer::new().format(content_length).into(),
    );
    headers.append_normalized("connection".into(), "close".into());
    headers
}

// ===== Error =====

/// An error that can occur when writing a response.
#[derive(Debug)]
pub enum WriteError {
    /// Header section requires at least one field.
    EmptyHeaders,
    /// Underlying IO failed.
    Io(io::Error),
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyHeaders => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHeaders => f.write_str("headers is empty"),
            Self::Io(err) => write!(f, "failed to write response: {err}"),
        }
    }
}

impl From<io::Error> for WriteError {
    fn from(v: io::Error) -> Self {
        Self::Io(v)
    }
}
