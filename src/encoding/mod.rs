pub mod bitpacked;
pub mod byte_stream_split;
mod cursor;
pub mod dictionary;
pub mod hybrid_rle;
mod options;
pub mod uleb128;

pub use cursor::Cursor;
pub use options::Options;

pub use crate::parquet_bridge::Encoding;

use crate::error::{Error, Result};
use crate::schema::types::PhysicalType;
use crate::types::DecodedArray;

/// Returns the ceil of value/8
#[inline]
pub fn ceil8(value: usize) -> usize {
    value / 8 + ((value % 8 != 0) as usize)
}

/// Rejects bit widths that do not fit in a `u32` before anything is written.
pub(crate) fn check_bit_width(num_bits: u32) -> std::io::Result<()> {
    if num_bits > 32 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("bit width must be at most 32, got {}", num_bits),
        ));
    }
    Ok(())
}

/// Decodes `count` values encoded with `encoding` from `reader`.
///
/// * `Rle` decodes a hybrid stream of `BOOLEAN`, `INT32` or `INT64` (`options.bit_width` is required)
/// * `PlainDictionary` and `RleDictionary` decode dictionary indices, returned as `Int32`
/// * `ByteStreamSplit` decodes `FLOAT`, `DOUBLE`, `INT32`, `INT64` and
///   `FIXED_LEN_BYTE_ARRAY` (`options.type_length` is required)
pub fn decode_values(
    encoding: Encoding,
    physical_type: PhysicalType,
    reader: &mut Cursor,
    count: usize,
    options: &Options,
) -> Result<DecodedArray> {
    match encoding {
        Encoding::Rle => {
            let values = hybrid_rle::decode_values(physical_type, reader, count, options)?;
            Ok(match physical_type {
                PhysicalType::Int64 => {
                    DecodedArray::Int64(values.into_iter().map(i64::from).collect())
                }
                _ => DecodedArray::Int32(values.into_iter().map(|x| x as i32).collect()),
            })
        }
        Encoding::PlainDictionary | Encoding::RleDictionary => {
            let indices = dictionary::decode_values(reader, count)?;
            Ok(DecodedArray::Int32(
                indices.into_iter().map(|x| x as i32).collect(),
            ))
        }
        Encoding::ByteStreamSplit => {
            byte_stream_split::decode(reader, count, physical_type, options.type_length)
        }
        Encoding::Plain
        | Encoding::BitPacked
        | Encoding::DeltaBinaryPacked
        | Encoding::DeltaLengthByteArray
        | Encoding::DeltaByteArray => Err(Error::FeatureNotSupported(format!(
            "decoding {:?}",
            encoding
        ))),
    }
}
