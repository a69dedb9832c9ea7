use super::Cursor;
use crate::error::Result;

/// Reads an unsigned LEB128 varint from `reader`, accumulating into a `u32`.
///
/// Groups of 7 bits are read low to high until a byte without the continuation bit.
/// No length limit is enforced. The accumulation uses 32-bit wrapping shifts (the
/// shift amount is taken modulo 32), so varints longer than 5 bytes fold into the
/// result. An unterminated varint fails with
/// [`Error::OutOfBounds`](crate::error::Error::OutOfBounds) at the end of the buffer.
pub fn decode(reader: &mut Cursor) -> Result<u32> {
    let mut result = 0u32;
    let mut shift = 0u32;
    loop {
        let byte = reader.read_u8()?;
        result |= u32::from(byte & 0x7f).wrapping_shl(shift);
        if byte & 0x80 == 0 {
            return Ok(result);
        }
        shift = shift.wrapping_add(7);
    }
}

/// Encodes `value` as unsigned LEB128 into `container`, returning the number of bytes used.
/// # Panics
/// Panics if `container` is smaller than the encoded value (10 bytes always suffice).
pub fn encode(mut value: u64, container: &mut [u8]) -> usize {
    let mut consumed = 0;
    loop {
        let mut byte = (value as u8) & !128;
        value >>= 7;
        if value != 0 {
            byte |= 128;
        }
        container[consumed] = byte;
        consumed += 1;
        if value == 0 {
            break;
        }
    }
    consumed
}
