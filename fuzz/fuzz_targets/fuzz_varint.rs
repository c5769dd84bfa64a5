#![no_main]

use btc::chain::{varint_decode, varint_encode, varint_size, ByteReader, ByteWriter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if !data.is_empty() {
        let mut reader = ByteReader::new(data);
        let value = varint_decode(&mut reader);
        if reader.is_valid() {
            // Re-encode the decoded value and verify the round trip.
            let mut writer = ByteWriter::new();
            varint_encode(&mut writer, value);
            let encoded = writer.into_vec();

            // Verify size calculation
            assert_eq!(varint_size(value), encoded.len());

            // Verify round-trip
            let mut reader = ByteReader::new(&encoded);
            assert_eq!(varint_decode(&mut reader), value);
            assert!(reader.is_valid());
        }
    }
});
