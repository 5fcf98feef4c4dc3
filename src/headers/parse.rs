use crate::common::{CRLF, ParseResult, find_crlf};

use super::{HeaderError, HeaderMap, name};

/// Outcome of parsing a single header line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// A header field was stored, consuming the line and its terminator.
    Line(usize),
    /// The empty line terminating the header section.
    End,
}

impl Field {
    /// Returns the number of bytes consumed from the input.
    #[inline]
    pub const fn consumed(&self) -> usize {
        match self {
            Self::Line(len) => *len,
            Self::End => CRLF.len(),
        }
    }

    /// Returns `true` if this is the end of header section.
    #[inline]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }
}

impl HeaderMap {
    /// Parse the next header line from `bytes`.
    ///
    /// Only one line is parsed per call. If no `\r\n` is found yet, returns
    /// [`ParseResult::Pending`] and nothing is retained, the caller should resubmit the same bytes
    /// with more data appended.
    ///
    /// An empty line returns [`Field::End`].
    ///
    /// ```rust
    /// use wirehttp::{ParseResult, headers::{Field, HeaderMap}};
    ///
    /// let mut map = HeaderMap::new();
    /// assert_eq!(map.parse(b"Host: localhost:42069\r\n\r\n"), ParseResult::Ok(Field::Line(23)));
    /// assert_eq!(map.get("host"), Some("localhost:42069"));
    /// assert_eq!(map.parse(b"\r\n"), ParseResult::Ok(Field::End));
    /// ```
    pub fn parse(&mut self, bytes: &[u8]) -> ParseResult<Field, HeaderError> {
        let Some(len) = find_crlf(bytes) else {
            return ParseResult::Pending;
        };
        if len == 0 {
            return ParseResult::Ok(Field::End);
        }

        let (name, value) = match split_field(&bytes[..len]) {
            Ok(ok) => ok,
            Err(err) => return ParseResult::Err(err),
        };

        self.append_normalized(name, value);
        ParseResult::Ok(Field::Line(len + CRLF.len()))
    }
}

/// Split a header line into lowercase name and trimmed value.
fn split_field(line: &[u8]) -> Result<(String, String), HeaderError> {
    let Some(colon) = memchr::memchr(b':', line) else {
        return Err(HeaderError::MissingColon);
    };
    let (name, value) = (&line[..colon], &line[colon + 1..]);

    if name.is_empty() {
        return Err(HeaderError::EmptyName);
    }
    if name.ends_with(b" ") {
        return Err(HeaderError::TrailingSpace);
    }

    let name = name.trim_ascii();
    if !name::is_token(name) {
        return Err(match name.is_empty() {
            true => HeaderError::EmptyName,
            false => HeaderError::InvalidName,
        });
    }

    let value = std::str::from_utf8(value.trim_ascii()).map_err(|_| HeaderError::InvalidValue)?;
    name::validate_value(value)?;

    // token bytes are ASCII
    let name = name.to_ascii_lowercase();
    let name = String::from_utf8(name).map_err(|_| HeaderError::InvalidName)?;

    Ok((name, value.to_owned()))
}
