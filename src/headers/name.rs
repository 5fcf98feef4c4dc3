use std::borrow::Cow;

use super::HeaderError;

/// Returns `true` if `byte` is a [token character][rfc].
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc7230#section-3.2.6>
#[inline]
pub const fn is_tchar(byte: u8) -> bool {
    matches!(
        byte,
        b'!' | b'#'..=b'\'' | b'*' | b'+' | b'-' | b'.'
            | b'0'..=b'9'
            | b'A'..=b'Z'
            | b'^'..=b'`'
            | b'a'..=b'z'
            | b'|' | b'~'
    )
}

/// Returns `true` if `bytes` is non-empty and only contains token characters.
#[inline]
pub fn is_token(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(|&b| is_tchar(b))
}

/// Validate a header name and normalize it to lowercase.
pub(crate) fn normalize(name: &str) -> Result<Cow<'_, str>, HeaderError> {
    if name.is_empty() {
        return Err(HeaderError::EmptyName);
    }
    if !is_token(name.as_bytes()) {
        return Err(HeaderError::InvalidName);
    }
    Ok(lowercase(name))
}

/// Lowercase without copying when `name` is already lowercase.
pub(crate) fn lowercase(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

/// Header values must not break out of their line.
pub(crate) fn validate_value(value: &str) -> Result<(), HeaderError> {
    match value.bytes().any(|b| matches!(b, b'\r' | b'\n')) {
        true => Err(HeaderError::InvalidValue),
        false => Ok(()),
    }
}
