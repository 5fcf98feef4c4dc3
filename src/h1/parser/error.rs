use std::fmt;

/// An error that can occur when parsing the request line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestLineError {
    /// Request line does not have exactly three space separated parts.
    InvalidFormat(String),
    /// Method contains a byte other than uppercase ASCII letter.
    InvalidMethod(String),
    /// HTTP version is not in the `HTTP/<version>` form.
    MalformedVersion(String),
    /// Protocol name is not `HTTP`.
    UnrecognizedVersion(String),
    /// Version other than `1.1`.
    UnsupportedVersion(String),
    /// Request line is not valid UTF-8.
    InvalidUtf8,
}

impl std::error::Error for RequestLineError {}

impl fmt::Display for RequestLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(line) => write!(f, "poorly formatted request-line: {line}"),
            Self::InvalidMethod(method) => write!(f, "invalid method: {method}"),
            Self::MalformedVersion(version) => write!(f, "malformed HTTP-version: {version}"),
            Self::UnrecognizedVersion(proto) => write!(f, "unrecognized HTTP-version: {proto}"),
            Self::UnsupportedVersion(version) => {
                write!(f, "unrecognized HTTP-version, only 1.1 is supported: {version}")
            }
            Self::InvalidUtf8 => f.write_str("request-line is not valid UTF-8"),
        }
    }
}
