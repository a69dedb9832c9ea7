// See https://github.com/apache/parquet-format/blob/master/Encodings.md#run-length-encoding--bit-packing-hybrid-rle--3
mod decoder;
mod encoder;
mod rle;

pub use decoder::{decode, decode_run_bitpacked, decode_run_repeated};
pub use encoder::encode_u32;

use super::{Cursor, Options};
use crate::error::{Error, Result};
use crate::schema::types::PhysicalType;

/// RLE/bit-packed hybrid streams only carry booleans, levels and integers.
fn check_type(physical_type: PhysicalType) -> Result<()> {
    match physical_type {
        PhysicalType::Boolean | PhysicalType::Int32 | PhysicalType::Int64 => Ok(()),
        PhysicalType::Int96
        | PhysicalType::Float
        | PhysicalType::Double
        | PhysicalType::ByteArray
        | PhysicalType::FixedLenByteArray => Err(Error::FeatureNotSupported(format!(
            "RLE encoding of physical type {:?}",
            physical_type
        ))),
    }
}

/// Decodes `count` values of a hybrid stream from `reader`.
///
/// `options.bit_width` is required. Unless `options.disable_envelope` is set, the
/// stream is expected to start with its 4-byte little-endian length.
pub fn decode_values(
    physical_type: PhysicalType,
    reader: &mut Cursor,
    count: usize,
    options: &Options,
) -> Result<Vec<u32>> {
    check_type(physical_type)?;
    let num_bits = options.bit_width()?;

    let mut values = vec![0; count];
    decode(
        reader,
        num_bits,
        None,
        &mut values,
        options.disable_envelope,
    )?;
    Ok(values)
}

/// Encodes `values` as a hybrid stream.
///
/// `options.bit_width` is required and every value must fit in it. Unless
/// `options.disable_envelope` is set, the stream is prefixed by its 4-byte
/// little-endian length.
pub fn encode_values(
    physical_type: PhysicalType,
    values: &[u32],
    options: &Options,
) -> Result<Vec<u8>> {
    check_type(physical_type)?;
    let num_bits = options.bit_width()?;

    let mut buffer = vec![];
    encode_u32(&mut buffer, values, num_bits)?;

    if options.disable_envelope {
        return Ok(buffer);
    }

    let length = u32::try_from(buffer.len())?;
    let mut envelope = Vec::with_capacity(buffer.len() + 4);
    envelope.extend_from_slice(&length.to_le_bytes());
    envelope.extend_from_slice(&buffer);
    Ok(envelope)
}
