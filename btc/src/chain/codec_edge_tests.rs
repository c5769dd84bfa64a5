//! Edge case tests for the byte codec
//!
//! Boundary values for the compact-size encoding, sticky-flag behavior of
//! the reader, and decode limits.

#[cfg(test)]
mod tests {
    use crate::chain::rules::MAX_SCRIPT_SIZE;
    use crate::chain::*;

    #[test]
    fn test_boundary_values() {
        // Size transitions of the compact-size encoding
        let boundaries = vec![
            (0u64, 1usize, vec![0x00]),
            (0xFCu64, 1usize, vec![0xFC]),
            (0xFDu64, 3usize, vec![0xFD, 0xFD, 0x00]),
            (0xFFFFu64, 3usize, vec![0xFD, 0xFF, 0xFF]),
            (0x10000u64, 5usize, vec![0xFE, 0x00, 0x00, 0x01, 0x00]),
            (0xFFFFFFFFu64, 5usize, vec![0xFE, 0xFF, 0xFF, 0xFF, 0xFF]),
            (
                0x100000000u64,
                9usize,
                vec![0xFF, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00],
            ),
            (
                u64::MAX,
                9usize,
                vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
            ),
        ];

        for (value, expected_size, expected_bytes) in boundaries {
            assert_eq!(
                varint_size(value),
                expected_size,
                "Size mismatch for value {}",
                value
            );

            let mut writer = ByteWriter::new();
            varint_encode(&mut writer, value);
            let encoded = writer.into_vec();
            assert_eq!(encoded, expected_bytes, "Encoding mismatch for value {}", value);

            let mut reader = ByteReader::new(&encoded);
            let decoded = varint_decode(&mut reader);
            assert!(reader.is_valid());
            assert_eq!(decoded, value, "Decoding mismatch for value {}", value);
        }
    }

    #[test]
    fn test_reader_defaults_after_underrun() {
        let data = [0x01u8];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_u16(), 0);
        assert!(!reader.is_valid());
        // every subsequent read keeps yielding defaults
        assert_eq!(reader.read_u8(), 0);
        assert_eq!(reader.read_u32(), 0);
        assert_eq!(reader.read_u64(), 0);
        assert_eq!(varint_decode(&mut reader), 0);
    }

    #[test]
    fn test_non_minimal_varint_forms_round_trip_value() {
        // The decoder accepts non-minimal forms; the value is what counts.
        let encoded = [0xFDu8, 0x01, 0x00]; // 1 encoded in 3 bytes
        let mut reader = ByteReader::new(&encoded);
        assert_eq!(varint_decode(&mut reader), 1);
        assert!(reader.is_valid());
    }

    #[test]
    fn test_empty_script_wire_form() {
        let script = Script::default();
        assert_eq!(script.to_binary_buf(), vec![0x00]);
        let decoded = Script::from_binary_buf(&[0x00]).unwrap();
        assert!(decoded.is_empty());
        assert!(!decoded.is_prefailed());
    }

    #[test]
    fn test_script_at_size_limit_decodes() {
        // Exactly the cap is accepted; one byte more is not.
        let mut encoded = vec![0xFDu8, 0x10, 0x27]; // 10_000
        encoded.extend_from_slice(&vec![0x61u8; MAX_SCRIPT_SIZE]);
        let script = Script::from_binary_buf(&encoded).unwrap();
        assert_eq!(script.len(), MAX_SCRIPT_SIZE);
        assert!(!script.is_unspendable());
    }

    #[test]
    fn test_script_declared_length_beyond_input() {
        // The declared size overruns the stream: the stream is dirtied.
        let encoded = [0x05u8, 0xAA, 0xBB];
        assert!(Script::from_binary_buf(&encoded).is_err());
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        // Entity decoders consume exactly their own encoding.
        let mut encoded = BlockHeader::default().to_binary_buf();
        encoded.extend_from_slice(&[0xEE; 7]);
        let mut reader = ByteReader::new(&encoded);
        let _ = BlockHeader::from_binary(&mut reader);
        assert!(reader.is_valid());
        assert_eq!(reader.remaining(), 7);
    }

    #[test]
    fn test_outpoint_round_trip() {
        let outpoint = Outpoint {
            tx_hash: Hash::sha256d(b"some tx"),
            index: 7,
        };
        let encoded = outpoint.to_binary_buf();
        assert_eq!(encoded.len(), Outpoint::SIZE);
        assert_eq!(Outpoint::from_binary_buf(&encoded).unwrap(), outpoint);

        let null = Outpoint::null();
        assert!(null.is_null());
        let encoded = null.to_binary_buf();
        assert_eq!(&encoded[..32], &[0u8; 32]);
        assert_eq!(&encoded[32..], &[0xFF; 4]);
    }

    #[test]
    fn test_empty_buffer_is_an_error_for_every_entity() {
        assert!(Tx::from_binary_buf(&[]).is_err());
        assert!(Witness::from_binary_buf(&[]).is_err());
        assert!(BlockHeader::from_binary_buf(&[]).is_err());
        assert!(Block::from_binary_buf(&[]).is_err());
        assert!(Script::from_binary_buf(&[]).is_err());
        assert!(Outpoint::from_binary_buf(&[]).is_err());
    }
}
