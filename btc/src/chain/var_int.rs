use crate::chain::stream::{ByteReader, ByteWriter};

/// The compact-size ("varint") codec used throughout the Bitcoin wire format.
// Code based on the VarInt struct from `<https://github.com/brentongunning/rust-sv>`,
// reworked as free functions over the checked stream types.

/// Decode a compact-size integer from the reader.
///
/// Underruns follow the reader's sticky-flag convention and yield zero.
pub fn varint_decode(reader: &mut ByteReader) -> u64 {
    let n0 = reader.read_u8();
    match n0 {
        0xff => reader.read_u64(),
        0xfe => reader.read_u32() as u64,
        0xfd => reader.read_u16() as u64,
        _ => n0 as u64,
    }
}

/// Encode a compact-size integer in its minimal form.
pub fn varint_encode(writer: &mut ByteWriter, value: u64) {
    match value {
        0..=0xfc => writer.write_u8(value as u8),
        0xfd..=0xffff => {
            writer.write_u8(0xfd);
            writer.write_u16(value as u16);
        }
        0x10000..=0xffffffff => {
            writer.write_u8(0xfe);
            writer.write_u32(value as u32);
        }
        _ => {
            writer.write_u8(0xff);
            writer.write_u64(value);
        }
    }
}

/// The size of the encoded form of the value.
pub fn varint_size(value: u64) -> usize {
    match value {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x10000..=0xffffffff => 5,
        _ => 9,
    }
}
