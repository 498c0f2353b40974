//! Attribute read buffers

use core::fmt;

/// Size of the buffer the host passes to a read handler
pub const PAGE_SIZE: usize = 4096;

/// `fmt::Write` sink over a fixed buffer that truncates instead of failing
///
/// Output past the end of the buffer is dropped, the way `scnprintf`
/// behaves in a show handler.
pub struct PageWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> PageWriter<'a> {
    /// Wrap a read buffer
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Bytes written so far
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if output was dropped or the buffer is exactly full
    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }
}

impl fmt::Write for PageWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.buf.len() - self.len;
        let n = room.min(s.len());
        self.buf[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
        self.len += n;
        Ok(())
    }
}
