#![no_main]

use btc::chain::{build_merkle_proof, calculate_merkle_root, verify_merkle_proof, Hash};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Interpret the input as a list of 32-byte leaves.
    let leaves: Vec<Hash> = data.chunks_exact(32).map(Hash::from_slice).collect();

    let root = calculate_merkle_root(&leaves);
    if leaves.is_empty() {
        assert_eq!(root, Hash::ZERO);
        return;
    }

    // Determinism and proof verification for every leaf.
    assert_eq!(root, calculate_merkle_root(&leaves));
    for (index, leaf) in leaves.iter().enumerate() {
        let proof = build_merkle_proof(&leaves, index).unwrap();
        assert!(verify_merkle_proof(leaf, index, &proof, &root));
    }
});
