use parquet_codec::encoding::{decode_values, hybrid_rle, Encoding};
use parquet_codec::error::Result;
use parquet_codec::read::{
    read_definition_levels_v2, read_repetition_levels_v2, split_buffer_v2, DataPageHeaderExt,
    DataPageHeaderV2,
};
use parquet_codec::{Cursor, DecodedArray, Options, PhysicalType};

fn header(
    num_values: usize,
    encoding: Encoding,
    rep_length: usize,
    def_length: usize,
) -> DataPageHeaderV2 {
    DataPageHeaderV2 {
        num_values: num_values as i32,
        num_nulls: 0,
        num_rows: num_values as i32,
        encoding: encoding.into(),
        definition_levels_byte_length: def_length as i32,
        repetition_levels_byte_length: rep_length as i32,
        is_compressed: Some(false),
        statistics: None,
    }
}

fn levels(values: &[u32], bit_width: u32) -> Result<Vec<u8>> {
    let options = Options::default()
        .with_bit_width(bit_width)
        .with_disable_envelope(true);
    hybrid_rle::encode_values(PhysicalType::Int32, values, &options)
}

#[test]
fn required_column() -> Result<()> {
    // neither repetition nor definition levels: the page is only values
    let values = [1i32, 2, 3];
    let mut page = vec![];
    parquet_codec::encoding::byte_stream_split::encode(&values, &mut page);
    let header = header(3, Encoding::ByteStreamSplit, 0, 0);

    let mut reader = Cursor::new(&page);
    let rep = read_repetition_levels_v2(&mut reader, &header, 0)?;
    let def = read_definition_levels_v2(&mut reader, &header, 0)?;
    assert_eq!(rep, vec![0, 0, 0]);
    assert_eq!(def, None);

    let array = decode_values(
        header.encoding()?,
        PhysicalType::Int32,
        &mut reader,
        3,
        &Options::default(),
    )?;
    assert_eq!(array, DecodedArray::Int32(values.to_vec()));
    assert!(reader.is_empty());
    Ok(())
}

#[test]
fn optional_column() -> Result<()> {
    let def_levels = [1, 0, 1, 1, 0, 1, 1, 1, 1, 0];
    let def = levels(&def_levels, 1)?;
    let values = [1.5f64, -2.0, 0.25, 8.0, 1e10, -0.0, 3.0];

    let mut page = def.clone();
    parquet_codec::encoding::byte_stream_split::encode(&values, &mut page);
    let header = header(def_levels.len(), Encoding::ByteStreamSplit, 0, def.len());

    let (rep_buffer, def_buffer, values_buffer) = split_buffer_v2(&page, &header)?;
    assert!(rep_buffer.is_empty());
    assert_eq!(def_buffer, def.as_slice());

    let mut reader = Cursor::new(&page);
    let rep = read_repetition_levels_v2(&mut reader, &header, 0)?;
    assert_eq!(rep, vec![0; 10]);
    let decoded = read_definition_levels_v2(&mut reader, &header, 1)?;
    assert_eq!(decoded, Some(def_levels.to_vec()));
    assert_eq!(reader.as_slice(), values_buffer);

    let num_valid = def_levels.iter().filter(|x| **x == 1).count();
    let array = decode_values(
        header.encoding()?,
        PhysicalType::Double,
        &mut reader,
        num_valid,
        &Options::default(),
    )?;
    assert_eq!(array, DecodedArray::Float64(values.to_vec()));
    Ok(())
}

#[test]
fn repeated_column() -> Result<()> {
    // [[1, 2], [], [3]] with max repetition 1 and max definition 2
    let rep_levels = [0, 1, 0, 0];
    let def_levels = [2, 2, 1, 2];

    let rep = levels(&rep_levels, 1)?;
    let def = levels(&def_levels, 2)?;

    // the repetition levels carry a 4-byte length when definition levels follow them
    let mut page = (rep.len() as u32).to_le_bytes().to_vec();
    page.extend_from_slice(&rep);
    page.extend_from_slice(&def);
    // dictionary indices [0, 1, 2] with bit width 3
    page.extend_from_slice(&[3, 0x03, 0b10001000, 0b00000000]);
    let header = header(4, Encoding::RleDictionary, rep.len(), def.len());

    let mut reader = Cursor::new(&page);
    let decoded_rep = read_repetition_levels_v2(&mut reader, &header, 1)?;
    assert_eq!(decoded_rep, rep_levels);
    let decoded_def = read_definition_levels_v2(&mut reader, &header, 2)?;
    assert_eq!(decoded_def, Some(def_levels.to_vec()));

    let indices = decode_values(
        header.encoding()?,
        PhysicalType::ByteArray,
        &mut reader,
        3,
        &Options::default(),
    )?;
    assert_eq!(indices, DecodedArray::Int32(vec![0, 1, 2]));
    assert!(reader.is_empty());
    Ok(())
}
