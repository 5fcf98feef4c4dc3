//! HTTP/1.1 request engine.
//!
//! - [`parser`] contains the request line parser.
//! - [`RequestParser`] is the state machine that assembles a [`Request`] from partial bytes.
//! - [`read_request`] drives the parser from an IO until a request is complete.
pub mod parser;
mod request;
mod io;
mod error;

pub use parser::{RequestLine, RequestLineError};
pub use request::{ParseState, Request, RequestParser};
pub use io::{DEFAULT_BUFFER_CAPACITY, ReadBuffer, read_request, read_request_with_capacity};
pub use error::{ParseError, RequestError};

#[cfg(test)]
mod test;
