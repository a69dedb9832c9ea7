use crate::types::{DecodedArray, NativeType};

/// Encodes an array of NativeType according to BYTE_STREAM_SPLIT
pub fn encode<T: NativeType>(data: &[T], buffer: &mut Vec<u8>) {
    let element_size = std::mem::size_of::<T>();
    let num_elements = data.len();
    let start = buffer.len();
    buffer.resize(start + element_size * num_elements, 0);
    let buffer = &mut buffer[start..];

    for (i, v) in data.iter().enumerate() {
        let value_bytes = v.to_le_bytes();
        for (n, byte) in value_bytes.as_ref().iter().enumerate() {
            buffer[(num_elements * n) + i] = *byte;
        }
    }
}

/// Encodes a [`DecodedArray`] according to BYTE_STREAM_SPLIT.
/// # Panics
/// Panics if the values of a [`DecodedArray::FixedLenBinary`] do not all have the same length.
pub fn encode_array(array: &DecodedArray) -> Vec<u8> {
    let mut buffer = vec![];
    match array {
        DecodedArray::Int32(values) => encode(values, &mut buffer),
        DecodedArray::Int64(values) => encode(values, &mut buffer),
        DecodedArray::Float32(values) => encode(values, &mut buffer),
        DecodedArray::Float64(values) => encode(values, &mut buffer),
        DecodedArray::FixedLenBinary(values) => {
            let width = values.first().map(|x| x.len()).unwrap_or(0);
            let num_elements = values.len();
            buffer.resize(width * num_elements, 0);
            for (i, value) in values.iter().enumerate() {
                assert_eq!(value.len(), width);
                for (n, byte) in value.iter().enumerate() {
                    buffer[(num_elements * n) + i] = *byte;
                }
            }
        }
    }
    buffer
}
