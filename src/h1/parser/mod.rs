//! HTTP/1.1 request line parser.
//!
//! [`RequestLine::parse_chunk`] works on partial bytes: if the `\r\n` terminating the line is not
//! found yet, it returns [`ParseResult::Pending`] and nothing is consumed.
mod error;

pub use error::RequestLineError;

use crate::common::{CRLF, ParseResult, find_crlf};

#[cfg(test)]
mod test;

/// The only version this server speaks.
pub const HTTP_VERSION: &str = "1.1";

/// The first line of an HTTP request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestLine {
    method: String,
    target: String,
    version: String,
}

impl RequestLine {
    /// Returns the request method, e.g: `"GET"`.
    #[inline]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the request target as sent by the client, e.g: `"/search?q=rust"`.
    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the HTTP version without the protocol prefix, this is always `"1.1"`.
    #[inline]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Parse request line from the start of `bytes`.
    ///
    /// Returns the request line and the number of bytes consumed, including the `\r\n`.
    ///
    /// ```rust
    /// use wirehttp::{ParseResult, h1::RequestLine};
    ///
    /// let ParseResult::Ok((line, read)) = RequestLine::parse_chunk(b"GET /coffee HTTP/1.1\r\n") else {
    ///     unreachable!()
    /// };
    /// assert_eq!(line.method(), "GET");
    /// assert_eq!(line.target(), "/coffee");
    /// assert_eq!(line.version(), "1.1");
    /// assert_eq!(read, 22);
    ///
    /// assert!(RequestLine::parse_chunk(b"GET /coffee HTTP/1.1").is_pending());
    /// ```
    pub fn parse_chunk(bytes: &[u8]) -> ParseResult<(RequestLine, usize), RequestLineError> {
        let Some(len) = find_crlf(bytes) else {
            return ParseResult::Pending;
        };
        let line = match std::str::from_utf8(&bytes[..len]) {
            Ok(line) => line,
            Err(_) => return ParseResult::Err(RequestLineError::InvalidUtf8),
        };
        match line.parse() {
            Ok(reqline) => ParseResult::Ok((reqline, len + CRLF.len())),
            Err(err) => ParseResult::Err(err),
        }
    }
}

impl std::str::FromStr for RequestLine {
    type Err = RequestLineError;

    /// Parse request line without the trailing `\r\n`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split(' ');
        let (Some(method), Some(target), Some(version), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(RequestLineError::InvalidFormat(line.to_owned()));
        };

        if method.is_empty() || !method.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(RequestLineError::InvalidMethod(method.to_owned()));
        }

        let Some((proto, version)) = version.split_once('/') else {
            return Err(RequestLineError::MalformedVersion(version.to_owned()));
        };
        if version.contains('/') {
            return Err(RequestLineError::MalformedVersion(format!("{proto}/{version}")));
        }
        if proto != "HTTP" {
            return Err(RequestLineError::UnrecognizedVersion(proto.to_owned()));
        }
        if version != HTTP_VERSION {
            return Err(RequestLineError::UnsupportedVersion(version.to_owned()));
        }

        Ok(Self {
            method: method.to_owned(),
            target: target.to_owned(),
            version: version.to_owned(),
        })
    }
}

impl std::fmt::Display for RequestLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} HTTP/{}", self.method, self.target, self.version)
    }
}
