use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::WriteError;
use crate::common::CRLF;
use crate::headers::HeaderMap;
use crate::http::{StatusCode, reason_of};

/// Final chunk of a chunked body, without the trailer section.
const LAST_CHUNK: &[u8] = b"0\r\n";

/// HTTP/1.1 response writer.
#[derive(Debug)]
pub struct Writer<IO> {
    io: IO,
}

impl<IO> Writer<IO> {
    /// Create new [`Writer`] over `io`.
    #[inline]
    pub fn new(io: IO) -> Self {
        Self { io }
    }

    #[inline]
    pub fn get_ref(&self) -> &IO {
        &self.io
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    #[inline]
    pub fn into_inner(self) -> IO {
        self.io
    }
}

impl<IO> Writer<IO>
where
    IO: AsyncWrite + Unpin,
{
    /// Write `HTTP/1.1 <code> <reason>\r\n`.
    pub async fn write_status_line(&mut self, status: StatusCode) -> Result<(), WriteError> {
        self.io.write_all(status.status_line().as_bytes()).await?;
        Ok(())
    }

    /// Write status line with arbitrary numeric code.
    ///
    /// Code without known reason phrase is written with empty reason, e.g: `HTTP/1.1 418 \r\n`.
    pub async fn write_status_code(&mut self, code: u16) -> Result<(), WriteError> {
        let mut itoa = itoa::Buffer::new();
        let reason = reason_of(code);

        let mut line = BytesMut::with_capacity(16 + reason.len());
        line.put_slice(b"HTTP/1.1 ");
        line.put_slice(itoa.format(code).as_bytes());
        line.put_u8(b' ');
        line.put_slice(reason.as_bytes());
        line.put_slice(CRLF);

        self.io.write_all(&line).await?;
        Ok(())
    }

    /// Write header fields followed by an empty line.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::EmptyHeaders`] if `headers` is empty, nothing is written.
    pub async fn write_headers(&mut self, headers: &HeaderMap) -> Result<(), WriteError> {
        if headers.is_empty() {
            return Err(WriteError::EmptyHeaders);
        }
        let mut head = BytesMut::with_capacity(256);
        put_fields(headers, &mut head);
        self.io.write_all(&head).await?;
        Ok(())
    }

    /// Write raw body bytes, returns the number of bytes written.
    ///
    /// Body length is not checked against any previously written `Content-Length`.
    pub async fn write_body(&mut self, body: &[u8]) -> Result<usize, WriteError> {
        self.io.write_all(body).await?;
        Ok(body.len())
    }

    /// Write a single chunk of chunked transfer encoding.
    ///
    /// Returns the number of bytes written including the chunk framing. Empty `chunk` writes
    /// nothing, use [`write_chunked_body_done`][Writer::write_chunked_body_done] to end the body.
    pub async fn write_chunked_body(&mut self, chunk: &[u8]) -> Result<usize, WriteError> {
        if chunk.is_empty() {
            return Ok(0);
        }

        let mut hex = [0u8; 2 * size_of::<usize>()];
        let size = encode_hex(chunk.len(), &mut hex);

        let mut header = BytesMut::with_capacity(size.len() + CRLF.len());
        header.put_slice(size);
        header.put_slice(CRLF);

        self.io.write_all(&header).await?;
        self.io.write_all(chunk).await?;
        self.io.write_all(CRLF).await?;

        Ok(header.len() + chunk.len() + CRLF.len())
    }

    /// Write the zero size chunk, the trailer section must follow with
    /// [`write_trailers`][Writer::write_trailers].
    pub async fn write_chunked_body_done(&mut self) -> Result<usize, WriteError> {
        self.io.write_all(LAST_CHUNK).await?;
        Ok(LAST_CHUNK.len())
    }

    /// Write trailer fields followed by an empty line, completing chunked body.
    ///
    /// Unlike [`write_headers`][Writer::write_headers], `trailers` can be empty.
    pub async fn write_trailers(&mut self, trailers: &HeaderMap) -> Result<(), WriteError> {
        let mut trailer = BytesMut::with_capacity(64);
        put_fields(trailers, &mut trailer);
        self.io.write_all(&trailer).await?;
        Ok(())
    }

    /// Flush the underlying IO.
    pub async fn flush(&mut self) -> Result<(), WriteError> {
        self.io.flush().await?;
        Ok(())
    }
}

fn put_fields(headers: &HeaderMap, buf: &mut BytesMut) {
    for (name, value) in headers {
        buf.put_slice(name.as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(value.as_bytes());
        buf.put_slice(CRLF);
    }
    buf.put_slice(CRLF);
}

/// Write `value` as lowercase hexadecimal without leading zeros.
fn encode_hex(mut value: usize, buf: &mut [u8; 2 * size_of::<usize>()]) -> &[u8] {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = DIGITS[value & 0xf];
        value >>= 4;
        if value == 0 {
            break &buf[start..];
        }
    }
}
