//! Reading a request from IO.
mod buffer;

pub use buffer::ReadBuffer;

use tokio::io::AsyncRead;

use super::{Request, RequestParser, error::RequestError};
use crate::log;

/// Initial read buffer capacity, grows as needed.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8;

/// Read a single request from `io`.
///
/// Reading stops as soon as the request is complete, bytes after the request are not read.
///
/// # Errors
///
/// Returns error if the request is malformed, `io` returns an error, or `io` reaches end of stream
/// before the request is complete.
pub async fn read_request<IO>(io: &mut IO) -> Result<Request, RequestError>
where
    IO: AsyncRead + Unpin,
{
    read_request_with_capacity(io, DEFAULT_BUFFER_CAPACITY).await
}

/// Read a single request from `io` with initial read buffer capacity.
///
/// See [`read_request`] for more details.
pub async fn read_request_with_capacity<IO>(
    io: &mut IO,
    capacity: usize,
) -> Result<Request, RequestError>
where
    IO: AsyncRead + Unpin,
{
    let mut buffer = ReadBuffer::with_capacity(capacity);
    let mut parser = RequestParser::new();

    while !parser.is_done() {
        let read = buffer.read_from(io).await?;
        if read == 0 {
            return Err(RequestError::Incomplete {
                state: parser.state(),
            });
        }

        let parsed = parser.parse(buffer.chunk())?;
        buffer.consume(parsed);

        log::trace!("read {read} bytes, parsed {parsed} bytes, state: {}", parser.state());
    }

    parser
        .into_request()
        .map_err(|state| RequestError::Incomplete { state })
}
