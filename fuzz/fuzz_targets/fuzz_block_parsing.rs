#![no_main]

use btc::chain::{Block, Encodable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(block) = Block::from_binary_buf(data) {
        let encoded = block.to_binary_buf();
        assert_eq!(encoded.len(), block.encoded_size());

        let decoded = Block::from_binary_buf(&encoded).unwrap();
        assert_eq!(decoded, block);
        assert_eq!(decoded.block_hash(), block.block_hash());
        assert_eq!(decoded.merkle_root(), block.merkle_root());

        // Structural queries are total on any decoded block.
        let _ = block.is_valid();
        let _ = block.verify_witness_commitment();
        let _ = block.weight();
    }
});
