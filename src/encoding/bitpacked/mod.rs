//! Bit-packed runs of the [RLE/bit-packing hybrid](https://github.com/apache/parquet-format/blob/master/Encodings.md#run-length-encoding--bit-packing-hybrid-rle--3)
//! encoding: values packed LSB-first within each byte, `num_bits` bits per value,
//! in groups of 8 values.
mod decode;
mod encode;

pub use decode::decode_run;
pub use encode::{encode_pack, encode_run};

/// Returns the minimum number of bits needed to represent `value` as an unsigned integer.
/// `bit_width(0)` is `0`.
#[inline]
pub fn bit_width(value: u32) -> u32 {
    32 - value.leading_zeros()
}
