use std::io::Write;

use seq_macro::seq;

use super::super::{ceil8, check_bit_width, uleb128};

/// Writes a bit-packed run of `values`: the header `((groups) << 1) | 1` followed by
/// the values packed with `num_bits` bits each. `values` is padded with zeros to a
/// multiple of 8.
/// # Errors
/// Errors with [`std::io::ErrorKind::InvalidInput`] iff `num_bits > 32`.
pub fn encode_run<W: Write>(writer: &mut W, values: &[u32], num_bits: u32) -> std::io::Result<()> {
    check_bit_width(num_bits)?;
    let groups = ceil8(values.len());

    let mut header = groups as u64;
    header <<= 1;
    header |= 1; // it is bitpacked => first bit is set
    let mut container = [0; 10];
    let used = uleb128::encode(header, &mut container);
    writer.write_all(&container[..used])?;

    let pack_size = num_bits as usize;
    let mut packed = vec![0u8; groups * pack_size];
    values
        .chunks(8)
        .zip(packed.chunks_mut(pack_size.max(1)))
        .for_each(|(chunk, packed)| {
            let mut group = [0u32; 8];
            group[..chunk.len()].copy_from_slice(chunk);
            encode_pack(&group, num_bits, packed);
        });
    writer.write_all(&packed)
}

/// Packs a group of 8 values into the first `num_bits` bytes of `packed`.
/// Bits of each value above `num_bits` are ignored.
/// # Panics
/// Panics iff `packed.len() < num_bits` or `num_bits > 32`.
#[inline]
pub fn encode_pack(group: &[u32; 8], num_bits: u32, packed: &mut [u8]) {
    let num_bits = num_bits as usize;
    seq!(N in 0..8 {
        pack_value(group[N], N * num_bits, num_bits, packed);
    });
}

#[inline]
fn pack_value(value: u32, bit_offset: usize, num_bits: usize, packed: &mut [u8]) {
    for bit in 0..num_bits {
        if value & (1 << bit) != 0 {
            let position = bit_offset + bit;
            packed[position / 8] |= 1 << (position % 8);
        }
    }
}
