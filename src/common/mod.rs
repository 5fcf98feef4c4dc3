//! Shared parsing primitives.

/// Line terminator used by every HTTP/1.1 framing element.
pub const CRLF: &[u8; 2] = b"\r\n";

/// Result of a single incremental parse attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult<T, E> {
    /// Bytes is not sufficient for parsing, more IO read is required.
    Pending,
    /// Parse success.
    Ok(T),
    /// Parse failed.
    Err(E),
}

impl<T, E> ParseResult<T, E> {
    /// Returns `true` if the parse result is [`Pending`].
    ///
    /// [`Pending`]: ParseResult::Pending
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` if the parse result is [`Ok`].
    ///
    /// [`Ok`]: ParseResult::Ok
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(..))
    }

    /// Returns `true` if the parse result is [`Err`].
    ///
    /// [`Err`]: ParseResult::Err
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(..))
    }

    /// Convert to `Result<Option<T>, E>`, where `None` is pending.
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, E> {
        match self {
            Self::Pending => Ok(None),
            Self::Ok(ok) => Ok(Some(ok)),
            Self::Err(err) => Err(err),
        }
    }
}

/// Returns the offset of the first `\r\n` in `bytes`.
#[inline]
pub fn find_crlf(bytes: &[u8]) -> Option<usize> {
    memchr::memmem::find(bytes, CRLF)
}
