use std::io::Write;

use super::super::{ceil8, check_bit_width, uleb128, Cursor};
use crate::error::{Error, Result};

/// Decodes one RLE run of `count` repetitions whose header was already read.
///
/// The repeated value is stored in `ceil(num_bits / 8)` bytes, least significant
/// byte first. The run is written to `output` from index `seen`, truncated to the
/// capacity of `output`; the new `seen` is returned.
pub fn decode_run(
    reader: &mut Cursor,
    count: usize,
    num_bits: u32,
    output: &mut [u32],
    seen: usize,
) -> Result<usize> {
    if num_bits > 32 {
        return Err(Error::InvalidParameter(format!(
            "bit width must be at most 32, got {}",
            num_bits
        )));
    }
    // repeated-value := value that is repeated, using a fixed-width of round-up-to-next-byte(bit-width)
    let pack = reader.take(ceil8(num_bits as usize))?;
    let value = pack
        .iter()
        .enumerate()
        .fold(0u32, |acc, (i, byte)| acc | u32::from(*byte) << (i * 8));

    let end = seen.saturating_add(count).min(output.len());
    output[seen..end].fill(value);
    Ok(end)
}

/// Writes one RLE run: the header `count << 1` followed by `value` in
/// `ceil(num_bits / 8)` little-endian bytes.
/// # Errors
/// Errors with [`std::io::ErrorKind::InvalidInput`] iff `num_bits > 32`.
pub fn encode_run<W: Write>(
    writer: &mut W,
    value: u32,
    count: usize,
    num_bits: u32,
) -> std::io::Result<()> {
    check_bit_width(num_bits)?;
    let header = (count as u64) << 1;
    let mut container = [0; 10];
    let used = uleb128::encode(header, &mut container);
    writer.write_all(&container[..used])?;

    let rle_bytes = ceil8(num_bits as usize);
    writer.write_all(&value.to_le_bytes()[..rle_bytes])
}
