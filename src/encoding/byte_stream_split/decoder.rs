use std::marker::PhantomData;

use super::byte_width;
use crate::encoding::Cursor;
use crate::error::{Error, Result};
use crate::schema::types::PhysicalType;
use crate::types::{DecodedArray, NativeType};

/// Decodes according to [Byte Stream Split](https://github.com/apache/parquet-format/blob/master/Encodings.md#byte-stream-split-byte_stream_split--9).
/// # Implementation
/// This struct does not allocate on the heap.
#[derive(Debug)]
pub struct Decoder<'a, T: NativeType> {
    values: &'a [u8],
    num_elements: usize,
    current: usize,
    element_type: PhantomData<T>,
}

impl<'a, T: NativeType> Decoder<'a, T> {
    /// Returns a new [`Decoder`] over all the values in `values`.
    /// # Errors
    /// Errors iff the length of `values` is not a multiple of the size of `T`.
    pub fn try_new(values: &'a [u8]) -> Result<Self> {
        let element_size = std::mem::size_of::<T>();
        if values.len() % element_size != 0 {
            return Err(Error::oos(format!(
                "Byte stream split of {} bytes is not a multiple of the type size {}",
                values.len(),
                element_size
            )));
        }
        let num_elements = values.len() / element_size;
        Ok(Self {
            values,
            num_elements,
            current: 0,
            element_type: PhantomData,
        })
    }
}

impl<'a, T: NativeType> Iterator for Decoder<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.num_elements {
            return None;
        }

        let mut bytes = T::Bytes::default();
        for (n, byte) in bytes.as_mut().iter_mut().enumerate() {
            *byte = self.values[(self.num_elements * n) + self.current];
        }

        self.current += 1;
        Some(T::from_le_bytes(bytes))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.num_elements - self.current;
        (remaining, Some(remaining))
    }
}

impl<'a, T: NativeType> ExactSizeIterator for Decoder<'a, T> {}

/// Decodes `count` values of `physical_type` from `reader`, advancing it by
/// `count` times the byte width of the type.
///
/// The width is validated before any byte is consumed.
pub fn decode(
    reader: &mut Cursor,
    count: usize,
    physical_type: PhysicalType,
    type_length: Option<usize>,
) -> Result<DecodedArray> {
    let width = byte_width(physical_type, type_length)?;
    let length = count
        .checked_mul(width)
        .ok_or_else(|| Error::InvalidParameter(format!("too many values: {}", count)))?;
    let values = reader.take(length)?;

    let array = match physical_type {
        PhysicalType::Float => DecodedArray::Float32(Decoder::<f32>::try_new(values)?.collect()),
        PhysicalType::Double => DecodedArray::Float64(Decoder::<f64>::try_new(values)?.collect()),
        PhysicalType::Int32 => DecodedArray::Int32(Decoder::<i32>::try_new(values)?.collect()),
        PhysicalType::Int64 => DecodedArray::Int64(Decoder::<i64>::try_new(values)?.collect()),
        PhysicalType::FixedLenByteArray => {
            let mut interleaved = vec![0u8; length];
            for (b, plane) in values.chunks_exact(count.max(1)).enumerate() {
                for (i, byte) in plane.iter().enumerate() {
                    interleaved[i * width + b] = *byte;
                }
            }
            DecodedArray::FixedLenBinary(
                interleaved
                    .chunks_exact(width)
                    .map(|value| value.to_vec())
                    .collect(),
            )
        }
        PhysicalType::Boolean | PhysicalType::Int96 | PhysicalType::ByteArray => {
            return Err(Error::FeatureNotSupported(format!(
                "byte stream split of {:?}",
                physical_type
            )))
        }
    };
    Ok(array)
}
