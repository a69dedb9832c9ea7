use rand::{rngs::StdRng, Rng, SeedableRng};

use parquet_codec::encoding::{bitpacked, dictionary, hybrid_rle};
use parquet_codec::error::{Error, Result};
use parquet_codec::{Cursor, Options, PhysicalType};

fn options(bit_width: u32) -> Options {
    Options::default()
        .with_bit_width(bit_width)
        .with_disable_envelope(true)
}

fn round_trip(values: &[u32], bit_width: u32, disable_envelope: bool) -> Result<()> {
    let options = Options::default()
        .with_bit_width(bit_width)
        .with_disable_envelope(disable_envelope);
    let encoded = hybrid_rle::encode_values(PhysicalType::Int32, values, &options)?;

    let mut reader = Cursor::new(&encoded);
    let decoded =
        hybrid_rle::decode_values(PhysicalType::Int32, &mut reader, values.len(), &options)?;
    assert_eq!(decoded, values, "bit width {}", bit_width);
    assert!(reader.is_empty());
    Ok(())
}

#[test]
fn bitpacked_values() -> Result<()> {
    let values = [0, 1, 2, 3, 4, 5, 6, 7];
    let encoded = hybrid_rle::encode_values(PhysicalType::Int32, &values, &options(3))?;
    assert_eq!(encoded, vec![0x03, 0x88, 0xc6, 0xfa]);

    let mut reader = Cursor::new(&encoded);
    let decoded = hybrid_rle::decode_values(PhysicalType::Int32, &mut reader, 8, &options(3))?;
    assert_eq!(decoded, values);
    Ok(())
}

#[test]
fn bitpacked_values_not_multiple_of_8() -> Result<()> {
    let values = [0, 1, 2, 3, 4, 5, 6, 7, 6, 5];
    let encoded = hybrid_rle::encode_values(PhysicalType::Int32, &values, &options(3))?;
    assert_eq!(encoded, vec![0x05, 0x88, 0xc6, 0xfa, 0x2e, 0x00, 0x00]);

    let mut reader = Cursor::new(&encoded);
    let decoded = hybrid_rle::decode_values(PhysicalType::Int32, &mut reader, 10, &options(3))?;
    assert_eq!(decoded, values);
    Ok(())
}

#[test]
fn repeated_values() -> Result<()> {
    let values = [1234567; 8];
    let encoded = hybrid_rle::encode_values(PhysicalType::Int32, &values, &options(21))?;
    assert_eq!(encoded, vec![0x10, 0x87, 0xd6, 0x12]);

    let mut reader = Cursor::new(&encoded);
    let decoded = hybrid_rle::decode_values(PhysicalType::Int32, &mut reader, 8, &options(21))?;
    assert_eq!(decoded, values);

    let mut reader = Cursor::new(&encoded);
    let mut output = vec![0; 8];
    hybrid_rle::decode(&mut reader, 21, Some(encoded.len()), &mut output, true)?;
    assert_eq!(output, values);
    Ok(())
}

#[test]
fn mixed_runs() -> Result<()> {
    let values = [
        0, 1, 2, 3, 4, 5, 6, 7, 4, 4, 4, 4, 4, 4, 4, 4, 0, 1, 2, 3, 4, 5, 6, 7,
    ];
    let data = [0x03, 0x88, 0xc6, 0xfa, 0x10, 0x04, 0x03, 0x88, 0xc6, 0xfa];

    let encoded = hybrid_rle::encode_values(PhysicalType::Int32, &values, &options(3))?;
    assert_eq!(encoded, data);

    let mut reader = Cursor::new(&data);
    let from_values =
        hybrid_rle::decode_values(PhysicalType::Int32, &mut reader, values.len(), &options(3))?;

    let mut reader = Cursor::new(&data);
    let mut from_hybrid = vec![0; values.len()];
    hybrid_rle::decode(&mut reader, 3, Some(data.len()), &mut from_hybrid, true)?;

    assert_eq!(from_values, values);
    assert_eq!(from_hybrid, from_values);
    Ok(())
}

#[test]
fn stream_followed_by_other_bytes() -> Result<()> {
    let values = [1, 0, 1, 1, 1, 0, 0, 1, 1];
    let mut data = hybrid_rle::encode_values(PhysicalType::Boolean, &values, &options(1))?;
    data.extend_from_slice(&[0xde, 0xad]);

    let mut reader = Cursor::new(&data);
    let decoded = hybrid_rle::decode_values(PhysicalType::Boolean, &mut reader, 9, &options(1))?;
    assert_eq!(decoded, values);
    assert_eq!(reader.as_slice(), &[0xde, 0xad]);
    Ok(())
}

#[test]
fn truncated_stream() {
    let data = [0x05, 0x88, 0xc6, 0xfa];
    let mut reader = Cursor::new(&data);
    let result = hybrid_rle::decode_values(PhysicalType::Int32, &mut reader, 10, &options(3));
    assert!(matches!(result, Err(Error::OutOfBounds(_))));

    let data = [0x03, 0x88, 0xc6, 0xfa];
    let mut reader = Cursor::new(&data);
    let result = hybrid_rle::decode_values(PhysicalType::Int32, &mut reader, 10, &options(3));
    assert_eq!(
        result,
        Err(Error::LengthMismatch {
            expected: 10,
            found: 8
        })
    );
}

#[test]
fn round_trip_random() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    for bit_width in 0..=32u32 {
        let max = if bit_width == 32 {
            u32::MAX
        } else {
            (1u32 << bit_width) - 1
        };
        let length = rng.gen_range(0..200);
        let values = (0..length)
            .map(|_| {
                // long runs make the encoder alternate between run kinds
                if rng.gen_bool(0.3) {
                    max
                } else {
                    rng.gen_range(0..=max)
                }
            })
            .collect::<Vec<_>>();
        round_trip(&values, bit_width, rng.gen_bool(0.5))?;
    }
    Ok(())
}

#[test]
fn round_trip_runs() -> Result<()> {
    let values = std::iter::repeat(3)
        .take(100)
        .chain((0..20).map(|x| x % 4))
        .chain(std::iter::repeat(1).take(9))
        .collect::<Vec<_>>();
    round_trip(&values, bitpacked::bit_width(3), false)
}

#[test]
fn dictionary_indices() -> Result<()> {
    let indices = (0..50u32).map(|x| (x / 7) % 5).collect::<Vec<_>>();
    let mut page = vec![0xfe];
    page.extend(dictionary::encode_values(&indices, &Options::default())?);
    page.push(0xef);

    let mut reader = Cursor::with_offset(&page, 1)?;
    let decoded = dictionary::decode_values(&mut reader, indices.len())?;
    assert_eq!(decoded, indices);
    assert_eq!(reader.read_u8()?, 0xef);
    Ok(())
}
