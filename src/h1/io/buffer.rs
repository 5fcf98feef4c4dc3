use bytes::{Buf, BytesMut};
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Read buffer with consumable front.
///
/// Incoming bytes are appended at the back, parsed bytes are consumed from the front. When the
/// buffer is full, its capacity is doubled, reclaiming the consumed front first if it is enough.
pub struct ReadBuffer {
    buf: BytesMut,
}

impl ReadBuffer {
    /// Create new buffer with at least the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity.max(1)),
        }
    }

    /// Returns the unconsumed bytes.
    #[inline]
    pub fn chunk(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of unconsumed bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the total number of bytes the buffer can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Drop `cnt` bytes from the front.
    ///
    /// # Panics
    ///
    /// Panics if `cnt` is larger than [`len`][ReadBuffer::len].
    #[inline]
    pub fn consume(&mut self, cnt: usize) {
        self.buf.advance(cnt);
    }

    /// Read once from `io` into the spare capacity, growing the buffer first if it is full.
    ///
    /// Returns the number of bytes read, `0` means end of stream.
    pub async fn read_from<IO>(&mut self, io: &mut IO) -> io::Result<usize>
    where
        IO: AsyncRead + Unpin,
    {
        if self.buf.len() == self.buf.capacity() {
            let additional = self.buf.capacity().max(1);
            self.buf.reserve(additional);
        }
        io.read_buf(&mut self.buf).await
    }
}

impl std::fmt::Debug for ReadBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("ReadBuffer")
            .field("len", &self.buf.len())
            .field("capacity", &self.buf.capacity())
            .finish()
    }
}
