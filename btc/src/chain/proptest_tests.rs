//! Property-based tests using proptest
//!
//! These tests use proptest to generate random inputs and verify
//! properties that should always hold true.

#[cfg(test)]
mod tests {
    use crate::chain::*;
    use bytes::Bytes;
    use proptest::prelude::*;

    fn arb_hash() -> impl Strategy<Value = Hash> {
        any::<[u8; 32]>().prop_map(Hash::from)
    }

    fn arb_script() -> impl Strategy<Value = Script> {
        proptest::collection::vec(any::<u8>(), 0..100).prop_map(Script::from)
    }

    fn arb_witness() -> impl Strategy<Value = Witness> {
        proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..64), 0..4).prop_map(
            |elements| Witness::from_elements(elements.into_iter().map(Bytes::from).collect()),
        )
    }

    fn arb_input() -> impl Strategy<Value = TxInput> {
        (arb_hash(), any::<u32>(), arb_script(), any::<u32>(), arb_witness()).prop_map(
            |(tx_hash, index, script, sequence, witness)| {
                let mut input = TxInput::new(tx_hash, index, script, Some(sequence));
                input.witness = witness;
                input
            },
        )
    }

    fn arb_output() -> impl Strategy<Value = TxOutput> {
        (0u64..=21_000_000_00000000u64, arb_script())
            .prop_map(|(value, script)| TxOutput::new(value, script))
    }

    fn arb_tx() -> impl Strategy<Value = Tx> {
        (
            any::<u32>(),
            proptest::collection::vec(arb_input(), 1..4),
            proptest::collection::vec(arb_output(), 1..4),
            any::<u32>(),
        )
            .prop_map(|(version, inputs, outputs, lock_time)| {
                let mut builder = TxBuilder::new();
                builder.version(version).lock_time(lock_time);
                for input in &inputs {
                    builder.add_input(input);
                }
                for output in &outputs {
                    builder.add_output(output);
                }
                builder.build()
            })
    }

    proptest! {
        #[test]
        fn test_varint_roundtrip(value: u64) {
            // Property: encoding and decoding a varint should give back the original value
            let mut writer = ByteWriter::new();
            varint_encode(&mut writer, value);
            let encoded = writer.into_vec();

            let mut reader = ByteReader::new(&encoded);
            let decoded = varint_decode(&mut reader);

            prop_assert!(reader.is_valid());
            prop_assert_eq!(value, decoded);
            prop_assert_eq!(reader.remaining(), 0, "Buffer should be fully consumed");
        }

        #[test]
        fn test_varint_size_consistency(value: u64) {
            // Property: varint_size should match actual encoded size
            let calculated_size = varint_size(value);

            let mut writer = ByteWriter::new();
            varint_encode(&mut writer, value);

            prop_assert_eq!(calculated_size, writer.len());
        }

        #[test]
        fn test_hash_deterministic(data: Vec<u8>) {
            // Property: hashing the same data should always produce the same result
            let hash1 = Hash::sha256d(&data);
            let hash2 = Hash::sha256d(&data);

            prop_assert_eq!(hash1, hash2);
        }

        #[test]
        fn test_hash_hex_roundtrip(bytes: [u8; 32]) {
            // Property: converting hash to hex and back should preserve the value
            let hash = Hash { raw: bytes };
            let hex_string = hash.encode_hex::<String>();
            let decoded = Hash::from_hex(&hex_string).unwrap();

            prop_assert_eq!(hash, decoded);
        }

        #[test]
        fn test_script_byte_roundtrip(body: Vec<u8>) {
            // Property: any script body survives the wire codec byte-exactly,
            // including bodies that prefail operation parsing
            let script = Script::from(body.clone());
            let encoded = script.to_binary_buf();
            prop_assert_eq!(encoded.len(), script.encoded_size());

            let decoded = Script::from_binary_buf(&encoded).unwrap();
            prop_assert_eq!(decoded.bytes().as_ref(), body.as_slice());
            prop_assert_eq!(decoded, script);
        }

        #[test]
        fn test_tx_roundtrip(tx in arb_tx()) {
            // Property: decode(encode(tx)) == tx for both layouts
            let encoded = tx.to_binary_buf();
            prop_assert_eq!(encoded.len(), tx.encoded_size());

            let decoded = Tx::from_binary_buf(&encoded).unwrap();
            prop_assert_eq!(&decoded, &tx);
            prop_assert_eq!(decoded.txid(), tx.txid());
            prop_assert_eq!(decoded.wtxid(), tx.wtxid());
        }

        #[test]
        fn test_txid_ignores_witnesses(tx in arb_tx()) {
            // Property: the txid never depends on witness data
            let mut stripped = tx.clone();
            for input in stripped.inputs.iter_mut() {
                input.witness = Witness::new();
            }
            prop_assert_eq!(stripped.txid(), tx.txid());
            if !tx.is_segwit() {
                prop_assert_eq!(tx.wtxid(), tx.txid());
            } else {
                prop_assert_ne!(tx.wtxid(), tx.txid());
            }
        }

        #[test]
        fn test_merkle_root_properties(
            tx_count in 1usize..=64usize,
            seed: u64
        ) {
            // Generate deterministic transaction hashes
            use rand::{SeedableRng, RngCore};
            use rand::rngs::StdRng;

            let mut rng = StdRng::seed_from_u64(seed);
            let mut tx_hashes = Vec::new();

            for _ in 0..tx_count {
                let mut hash_bytes = [0u8; 32];
                rng.fill_bytes(&mut hash_bytes);
                tx_hashes.push(Hash { raw: hash_bytes });
            }

            // Property 1: Merkle root should be deterministic
            let root1 = calculate_merkle_root(&tx_hashes);
            let root2 = calculate_merkle_root(&tx_hashes);
            prop_assert_eq!(root1, root2);

            // Property 2: All proofs should verify
            for (index, tx_hash) in tx_hashes.iter().enumerate() {
                let proof = build_merkle_proof(&tx_hashes, index).unwrap();
                let is_valid = verify_merkle_proof(tx_hash, index, &proof, &root1);
                prop_assert!(is_valid, "Proof should be valid for index {}", index);
            }
        }

        #[test]
        fn test_reader_never_panics(data: Vec<u8>) {
            // Property: decoding arbitrary bytes is total; it either yields a
            // value or an error, and never reads past the buffer
            let _ = Tx::from_binary_buf(&data);
            let _ = Script::from_binary_buf(&data);
            let _ = Witness::from_binary_buf(&data);
            let _ = BlockHeader::from_binary_buf(&data);
            let _ = Block::from_binary_buf(&data);
        }
    }
}
