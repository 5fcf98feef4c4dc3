//! Error types that can occur during header related operation.

/// An error that can occur when parsing or inserting a header field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderError {
    /// Header line does not contain the `:` separator.
    MissingColon,
    /// Header name is empty.
    EmptyName,
    /// Header name is followed by whitespace before the colon.
    TrailingSpace,
    /// Header name contains a byte outside the token character set.
    InvalidName,
    /// Header value is not valid UTF-8 or contains a line break.
    InvalidValue,
}

impl HeaderError {
    pub(crate) const fn message(&self) -> &'static str {
        match self {
            Self::MissingColon => "missing colon separator",
            Self::EmptyName => "name cannot be empty",
            Self::TrailingSpace => "whitespace between name and colon",
            Self::InvalidName => "name contains invalid byte",
            Self::InvalidValue => "value contains invalid byte",
        }
    }
}

impl std::error::Error for HeaderError {}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed header: {}", self.message())
    }
}
