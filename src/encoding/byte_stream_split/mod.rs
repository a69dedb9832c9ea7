//! [Byte Stream Split](https://github.com/apache/parquet-format/blob/master/Encodings.md#byte-stream-split-byte_stream_split--9):
//! byte `b` of every value is stored in plane `b`, planes one after the other.
mod decoder;
mod encoder;

pub use decoder::{decode, Decoder};
pub use encoder::{encode, encode_array};

use crate::error::{Error, Result};
use crate::schema::types::PhysicalType;

/// Returns the number of bytes of each value of `physical_type`.
/// # Errors
/// Errors if the type is not supported by byte stream split or if `type_length`
/// is missing (or zero) for `FIXED_LEN_BYTE_ARRAY`.
pub fn byte_width(physical_type: PhysicalType, type_length: Option<usize>) -> Result<usize> {
    match physical_type {
        PhysicalType::Int32 | PhysicalType::Float => Ok(4),
        PhysicalType::Int64 | PhysicalType::Double => Ok(8),
        PhysicalType::FixedLenByteArray => match type_length {
            Some(length) if length > 0 => Ok(length),
            _ => Err(Error::InvalidParameter(
                "Length must be defined for FixedLenByteArray".to_string(),
            )),
        },
        PhysicalType::Boolean | PhysicalType::Int96 | PhysicalType::ByteArray => Err(
            Error::FeatureNotSupported(format!("byte stream split of {:?}", physical_type)),
        ),
    }
}
