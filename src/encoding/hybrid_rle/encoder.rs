use std::io::Write;

use super::super::{bitpacked, check_bit_width};
use super::rle;

/// RLE-hybrid encoding of `u32`. Writes the runs to `writer`, without a length envelope.
///
/// Values are accumulated into a bit-packed run. A repeated run is only started on
/// a boundary of 8 accumulated values, when the next value equals the current one,
/// so that no padding is ever written in the middle of the stream.
///
/// Errors with [`std::io::ErrorKind::InvalidInput`] iff `num_bits > 32`.
pub fn encode_u32<W: Write>(writer: &mut W, values: &[u32], num_bits: u32) -> std::io::Result<()> {
    check_bit_width(num_bits)?;
    let mut run = Vec::with_capacity(8);
    let mut repeats = 0usize;

    for (i, &value) in values.iter().enumerate() {
        if repeats == 0 && run.len() % 8 == 0 && values.get(i + 1) == Some(&value) {
            if !run.is_empty() {
                bitpacked::encode_run(writer, &run, num_bits)?;
                run.clear();
            }
            repeats = 1;
        } else if repeats > 0 && value == values[i - 1] {
            repeats += 1;
        } else {
            if repeats > 0 {
                rle::encode_run(writer, values[i - 1], repeats, num_bits)?;
                repeats = 0;
            }
            run.push(value);
        }
    }

    if repeats > 0 {
        rle::encode_run(writer, values[values.len() - 1], repeats, num_bits)
    } else if !run.is_empty() {
        bitpacked::encode_run(writer, &run, num_bits)
    } else {
        Ok(())
    }
}
