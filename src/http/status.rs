/// HTTP [Status Code][rfc].
///
/// Only the class representatives this server responds with are supported. Use
/// [`Writer::write_status_code`] for any other numeric code.
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
/// [`Writer::write_status_code`]: crate::response::Writer::write_status_code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum StatusCode {
    /// `200`. The request succeeded.
    Successful = 200,
    /// `300`. The request has more than one possible response.
    Redirect = 300,
    /// `400`. The server cannot or will not process the request due to something that is
    /// perceived to be a client error.
    ClientError = 400,
    /// `500`. The server has encountered a situation it does not know how to handle.
    ServerError = 500,
}

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::Successful
    }
}

macro_rules! status_code {
    ($($int:literal $id:ident $msg:literal;)*) => {
        impl StatusCode {
            /// Returns status code value, e.g: `200`.
            #[inline]
            pub const fn as_u16(&self) -> u16 {
                *self as u16
            }

            /// Returns status message, e.g: `"OK"`.
            #[inline]
            pub const fn reason(&self) -> &'static str {
                match self {
                    $(Self::$id => $msg,)*
                }
            }

            /// Returns the full status line including the trailing `\r\n`, e.g:
            /// `"HTTP/1.1 200 OK\r\n"`.
            #[inline]
            pub const fn status_line(&self) -> &'static str {
                match self {
                    $(Self::$id => concat!("HTTP/1.1 ", stringify!($int), " ", $msg, "\r\n"),)*
                }
            }

            /// Returns the status code for given value, if it is supported.
            #[inline]
            pub const fn from_u16(code: u16) -> Option<Self> {
                match code {
                    $($int => Some(Self::$id),)*
                    _ => None,
                }
            }
        }
    };
}

status_code! {
    200 Successful "OK";
    300 Redirect "Multiple Choices";
    400 ClientError "Bad Request";
    500 ServerError "Internal Server Error";
}

/// Returns the reason phrase of any numeric status code, empty if unknown.
pub(crate) const fn reason_of(code: u16) -> &'static str {
    match StatusCode::from_u16(code) {
        Some(status) => status.reason(),
        None => "",
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason())
    }
}
