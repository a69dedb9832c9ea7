use crate::error::{Error, Result};

/// A read position over a borrowed byte buffer.
///
/// Every decoder in this crate takes a `&mut Cursor` and advances it past the bytes
/// it consumed. Reads past the end of the buffer are reported as
/// [`Error::OutOfBounds`] and leave the offset unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Returns a new [`Cursor`] positioned at the start of `buffer`.
    #[inline]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    /// Returns a new [`Cursor`] positioned at `offset`.
    /// # Errors
    /// Errors iff `offset > buffer.len()`.
    pub fn with_offset(buffer: &'a [u8], offset: usize) -> Result<Self> {
        if offset > buffer.len() {
            return Err(Error::oob(offset, 0, buffer.len()));
        }
        Ok(Self { buffer, offset })
    }

    /// The current offset, relative to the start of this cursor's buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The length of the underlying buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// The number of bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    /// Whether all bytes were consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The bytes not yet consumed.
    #[inline]
    pub fn as_slice(&self) -> &'a [u8] {
        &self.buffer[self.offset..]
    }

    /// Returns a zero-based cursor over the bytes not yet consumed.
    ///
    /// Offset `0` of the returned cursor corresponds to `self.offset()`. The parent
    /// is not advanced by reads on the view; callers advance it with
    /// [`Cursor::advance`] by the view's final offset.
    #[inline]
    pub fn sub_view(&self) -> Cursor<'a> {
        Cursor::new(self.as_slice())
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        let byte = *self
            .buffer
            .get(self.offset)
            .ok_or_else(|| Error::oob(self.offset, 1, self.buffer.len()))?;
        self.offset += 1;
        Ok(byte)
    }

    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_u8().map(|x| x as i8)
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32_le(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;
        let mut value = [0u8; 4];
        value.copy_from_slice(bytes);
        Ok(u32::from_le_bytes(value))
    }

    /// Returns the next `length` bytes and advances past them.
    pub fn take(&mut self, length: usize) -> Result<&'a [u8]> {
        if length > self.remaining() {
            return Err(Error::oob(self.offset, length, self.buffer.len()));
        }
        let slice = &self.buffer[self.offset..self.offset + length];
        self.offset += length;
        Ok(slice)
    }

    /// Advances the offset by `length` bytes.
    pub fn advance(&mut self, length: usize) -> Result<()> {
        self.take(length).map(|_| ())
    }
}
