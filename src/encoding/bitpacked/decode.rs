use super::super::{ceil8, Cursor};
use crate::error::{Error, Result};

/// Decodes one bit-packed run whose `header` was already read from `reader`.
///
/// The run holds `(header >> 1) * 8` values of `num_bits` bits each. Values are
/// written to `output` starting at index `seen` until either the run or `output`
/// is exhausted; the new `seen` is returned. Bytes are pulled from `reader` one at
/// a time into a sliding bit window and only when a value needs them, so a
/// zero `num_bits` consumes no payload bytes. Once `output` is full, the rest of
/// the run (its padding) is skipped, clamped to the end of the buffer.
///
/// # Errors
/// Errors with [`Error::OutOfBounds`] when a value needs a byte past the end of
/// the buffer, and with [`Error::InvalidParameter`] when `num_bits > 32`.
pub fn decode_run(
    reader: &mut Cursor,
    header: u32,
    num_bits: u32,
    output: &mut [u32],
    mut seen: usize,
) -> Result<usize> {
    if num_bits > 32 {
        return Err(Error::InvalidParameter(format!(
            "bit width must be at most 32, got {}",
            num_bits
        )));
    }
    let mut count = (header as usize >> 1).saturating_mul(8);
    let run_bytes = ceil8(count.saturating_mul(num_bits as usize));
    let start = reader.offset();

    let mask = (1u64 << num_bits) - 1;
    // invariants: right <= left; left - right <= 32 + 7
    let mut data = 0u64;
    let mut left = 0u32;
    let mut right = 0u32;

    while count > 0 && seen < output.len() {
        if right >= 8 {
            // the lowest byte of the window was fully consumed
            right -= 8;
            left -= 8;
            data >>= 8;
        } else if left - right < num_bits {
            let byte = reader.read_u8().map_err(|_| {
                Error::OutOfBounds(format!(
                    "bit-packed run at offset {} with bit width {} needs more bytes than the {} available",
                    reader.offset(),
                    num_bits,
                    reader.len()
                ))
            })?;
            data |= u64::from(byte) << left;
            left += 8;
        } else {
            output[seen] = ((data >> right) & mask) as u32;
            seen += 1;
            count -= 1;
            right += num_bits;
        }
    }

    let consumed = reader.offset() - start;
    let padding = run_bytes.saturating_sub(consumed).min(reader.remaining());
    reader.advance(padding)?;
    Ok(seen)
}
