//! Dictionary indices of data pages encoded with `PLAIN_DICTIONARY` or `RLE_DICTIONARY`:
//! the bit width used to encode the indices stored as 1 byte (max bit width = 32),
//! followed by the indices encoded with the RLE/bit-packed hybrid, without length.
use super::{bitpacked, hybrid_rle, Cursor, Options};
use crate::error::{Error, Result};

/// Decodes `count` dictionary indices from `reader`, advancing it past the bit width
/// and the hybrid stream.
pub fn decode_values(reader: &mut Cursor, count: usize) -> Result<Vec<u32>> {
    let offset = reader.offset();
    let bit_width = reader.read_i8()?;
    if !(0..=32).contains(&bit_width) {
        return Err(Error::oos(format!(
            "Bit width of dictionary indices at offset {} must be between 0 and 32, got {}",
            offset, bit_width
        )));
    }

    // the view is zero-based at the first byte after the bit width
    let mut indices = reader.sub_view();
    let mut values = vec![0; count];
    hybrid_rle::decode(&mut indices, bit_width as u32, None, &mut values, true)?;

    reader.advance(indices.offset())?;
    Ok(values)
}

/// Encodes dictionary indices: 1 byte with the bit width followed by the hybrid stream.
///
/// The bit width is taken from `options.bit_width` when set, and otherwise is the
/// minimal bit width of the largest index.
pub fn encode_values(values: &[u32], options: &Options) -> Result<Vec<u8>> {
    let bit_width = match options.bit_width {
        Some(_) => options.bit_width()?,
        None => bitpacked::bit_width(values.iter().copied().max().unwrap_or(0)),
    };

    let mut buffer = vec![bit_width as u8];
    hybrid_rle::encode_u32(&mut buffer, values, bit_width)?;
    Ok(buffer)
}
