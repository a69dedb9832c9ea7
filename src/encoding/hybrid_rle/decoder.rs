use super::super::{bitpacked, ceil8, uleb128, Cursor};
use super::rle;
use crate::error::{Error, Result};

/// Decodes a RLE/bit-packed hybrid stream from `reader` until `output` is full.
///
/// When `disable_envelope` is `false`, the stream starts with a 4-byte little-endian
/// length which is read and skipped. `expected_bytes` is the number of bytes the
/// runs are declared to occupy (after the envelope); when it is `None` the
/// envelope's length is used, if any. A mismatch between the declared and the
/// consumed bytes is a defect of the stream or of the caller: it fails a debug
/// assertion and is logged otherwise.
///
/// # Errors
/// * [`Error::InvalidParameter`] if `num_bits > 32`
/// * [`Error::LengthMismatch`] if the stream ends before `output` is full
/// * [`Error::OutOfBounds`] if a run is truncated
pub fn decode(
    reader: &mut Cursor,
    num_bits: u32,
    expected_bytes: Option<usize>,
    output: &mut [u32],
    disable_envelope: bool,
) -> Result<()> {
    if num_bits > 32 {
        return Err(Error::InvalidParameter(format!(
            "bit width must be at most 32, got {}",
            num_bits
        )));
    }

    let expected_bytes = if disable_envelope {
        expected_bytes
    } else {
        let length = reader.read_u32_le()? as usize;
        expected_bytes.or(Some(length))
    };

    let start = reader.offset();
    let mut seen = 0;
    while seen < output.len() {
        if reader.is_empty() {
            return Err(Error::LengthMismatch {
                expected: output.len(),
                found: seen,
            });
        }
        let header = uleb128::decode(reader)?;
        if header & 1 == 1 {
            // is bitpacking
            seen = bitpacked::decode_run(reader, header, num_bits, output, seen)?;
        } else {
            // is rle
            seen = rle::decode_run(reader, header as usize >> 1, num_bits, output, seen)?;
        }
    }

    if let Some(expected) = expected_bytes {
        let consumed = reader.offset() - start;
        if consumed != expected {
            log::warn!(
                "hybrid stream with bit width {} declared {} bytes but {} were consumed",
                num_bits,
                expected,
                consumed
            );
        }
        debug_assert_eq!(
            consumed, expected,
            "consumed bytes of the hybrid stream differ from its declared length"
        );
    }
    Ok(())
}

/// Decodes `count` bit-packed values that are not preceded by a run header.
/// The run's padding up to a multiple of 8 values is consumed when present.
pub fn decode_run_bitpacked(reader: &mut Cursor, count: usize, num_bits: u32) -> Result<Vec<u32>> {
    let groups = u32::try_from(ceil8(count))?;
    let header = groups
        .checked_mul(2)
        .ok_or_else(|| Error::InvalidParameter(format!("too many values in a run: {}", count)))?
        | 1;

    let mut output = vec![0; count];
    bitpacked::decode_run(reader, header, num_bits, &mut output, 0)?;
    Ok(output)
}

/// Decodes a repeated value, not preceded by a run header, and repeats it `count` times.
pub fn decode_run_repeated(reader: &mut Cursor, count: usize, num_bits: u32) -> Result<Vec<u32>> {
    let mut output = vec![0; count];
    rle::decode_run(reader, count, num_bits, &mut output, 0)?;
    Ok(output)
}
