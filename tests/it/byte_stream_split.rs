use rand::{rngs::StdRng, Rng, SeedableRng};

use parquet_codec::encoding::byte_stream_split::{decode, encode_array};
use parquet_codec::error::{Error, Result};
use parquet_codec::{Cursor, DecodedArray, PhysicalType};

fn round_trip(
    array: DecodedArray,
    physical_type: PhysicalType,
    type_length: Option<usize>,
) -> Result<()> {
    let encoded = encode_array(&array);
    let mut reader = Cursor::new(&encoded);
    let decoded = decode(&mut reader, array.len(), physical_type, type_length)?;
    assert!(reader.is_empty());
    assert_eq!(decoded, array);
    Ok(())
}

#[test]
fn floats_bit_for_bit() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    let values = (0..100)
        .map(|_| f32::from_bits(rng.gen::<u32>() & 0x7f7f_ffff))
        .collect::<Vec<_>>();
    let encoded = encode_array(&DecodedArray::Float32(values.clone()));

    let mut reader = Cursor::new(&encoded);
    let decoded = decode(&mut reader, values.len(), PhysicalType::Float, None)?;
    match decoded {
        DecodedArray::Float32(decoded) => {
            let decoded = decoded.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
            let expected = values.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
            assert_eq!(decoded, expected);
        }
        other => panic!("unexpected {:?}", other),
    }
    Ok(())
}

#[test]
fn doubles() -> Result<()> {
    round_trip(
        DecodedArray::Float64(vec![0.0, -1.1, f64::MAX, f64::MIN_POSITIVE, 1e-300]),
        PhysicalType::Double,
        None,
    )
}

#[test]
fn integers() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(11);
    round_trip(
        DecodedArray::Int32((0..33).map(|_| rng.gen()).collect()),
        PhysicalType::Int32,
        None,
    )?;
    round_trip(
        DecodedArray::Int64((0..17).map(|_| rng.gen()).collect()),
        PhysicalType::Int64,
        None,
    )
}

#[test]
fn fixed_len_byte_array() -> Result<()> {
    let values = (0..10u8)
        .map(|x| vec![x, x.wrapping_mul(3), 255 - x])
        .collect::<Vec<_>>();
    round_trip(
        DecodedArray::FixedLenBinary(values),
        PhysicalType::FixedLenByteArray,
        Some(3),
    )
}

#[test]
fn unsupported_type() {
    let data = [0u8; 8];
    let mut reader = Cursor::new(&data);
    let result = decode(&mut reader, 1, PhysicalType::Int96, None);
    assert!(matches!(result, Err(Error::FeatureNotSupported(_))));
    assert_eq!(reader.offset(), 0);
}
