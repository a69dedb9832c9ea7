use parquet_format_safe::DataPageHeaderV2;

use crate::encoding::{hybrid_rle, Cursor};
use crate::error::{Error, Result};

/// Returns the number of bits needed to store the given maximum definition or repetition level.
#[inline]
pub fn get_bit_width(max_level: i16) -> u32 {
    16 - max_level.leading_zeros()
}

fn to_usize(value: i32, name: &str) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| Error::oos(format!("{} must be zero or positive, got {}", name, value)))
}

fn check_max_level(max_level: i16, name: &str) -> Result<()> {
    if max_level < 0 {
        return Err(Error::oos(format!(
            "{} must be zero or positive, got {}",
            name, max_level
        )));
    }
    Ok(())
}

/// Decodes the hybrid stream of a level section of `length` bytes (plus its 4-byte
/// envelope, when present) into `output`, advancing `reader` past the whole section.
fn decode_section(
    reader: &mut Cursor,
    num_bits: u32,
    length: usize,
    output: &mut [u32],
    disable_envelope: bool,
) -> Result<()> {
    let envelope = if disable_envelope { 0 } else { 4 };
    let start = reader.offset();
    let mut section = Cursor::new(reader.sub_view().take(length + envelope)?);
    if !disable_envelope {
        section.advance(envelope)?;
    }

    hybrid_rle::decode(&mut section, num_bits, None, output, true)?;
    if !section.is_empty() {
        return Err(Error::oos(format!(
            "level section at offset {} declared {} bytes but {} were consumed",
            start,
            length,
            section.offset() - envelope
        )));
    }
    reader.advance(length + envelope)
}

/// Splits the body of a v2 data page into its repetition levels, definition levels and values.
pub fn split_buffer_v2<'a>(
    buffer: &'a [u8],
    header: &DataPageHeaderV2,
) -> Result<(&'a [u8], &'a [u8], &'a [u8])> {
    let rep_levels_length = to_usize(
        header.repetition_levels_byte_length,
        "repetition_levels_byte_length",
    )?;
    let def_levels_length = to_usize(
        header.definition_levels_byte_length,
        "definition_levels_byte_length",
    )?;

    let mut cursor = Cursor::new(buffer);
    let rep_levels = cursor.take(rep_levels_length)?;
    let def_levels = cursor.take(def_levels_length)?;
    Ok((rep_levels, def_levels, cursor.as_slice()))
}

/// Reads the repetition levels of a v2 data page, one per value of the page.
///
/// When `max_rep_level` is 0 every level is 0 and no byte is consumed. Otherwise the
/// levels are a hybrid stream of `repetition_levels_byte_length` bytes, preceded by a
/// 4-byte length unless the page has no definition levels.
///
/// # Errors
/// Decoding never reads past the declared section: a stream that needs more bytes
/// fails with [`Error::OutOfBounds`] or [`Error::LengthMismatch`], and one that
/// leaves bytes of the section unread fails with [`Error::OutOfSpec`].
pub fn read_repetition_levels_v2(
    reader: &mut Cursor,
    header: &DataPageHeaderV2,
    max_rep_level: i16,
) -> Result<Vec<u32>> {
    check_max_level(max_rep_level, "max_rep_level")?;
    let num_values = to_usize(header.num_values, "num_values")?;
    let mut values = vec![0; num_values];
    if max_rep_level == 0 {
        return Ok(values);
    }

    let bit_width = get_bit_width(max_rep_level);
    let length = to_usize(
        header.repetition_levels_byte_length,
        "repetition_levels_byte_length",
    )?;
    let disable_envelope = header.definition_levels_byte_length == 0;
    log::trace!(
        "repetition levels: {} values, bit width {}, {} bytes, envelope {}",
        num_values,
        bit_width,
        length,
        !disable_envelope
    );

    decode_section(reader, bit_width, length, &mut values, disable_envelope)?;
    Ok(values)
}

/// Reads the definition levels of a v2 data page, one per value of the page.
///
/// Returns `None` without consuming bytes when `max_def_level` is 0: the column has
/// no optional nor repeated ancestors and its values are never null. Otherwise the
/// levels are a hybrid stream of `definition_levels_byte_length` bytes, without envelope,
/// bounded as in [`read_repetition_levels_v2`].
pub fn read_definition_levels_v2(
    reader: &mut Cursor,
    header: &DataPageHeaderV2,
    max_def_level: i16,
) -> Result<Option<Vec<u32>>> {
    check_max_level(max_def_level, "max_def_level")?;
    if max_def_level == 0 {
        return Ok(None);
    }

    let num_values = to_usize(header.num_values, "num_values")?;
    let bit_width = get_bit_width(max_def_level);
    let length = to_usize(
        header.definition_levels_byte_length,
        "definition_levels_byte_length",
    )?;
    log::trace!(
        "definition levels: {} values, bit width {}, {} bytes",
        num_values,
        bit_width,
        length
    );

    let mut values = vec![0; num_values];
    decode_section(reader, bit_width, length, &mut values, true)?;
    Ok(Some(values))
}
