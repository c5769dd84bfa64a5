use crate::chain::{Hash, MerkleRoot, TxHash};
use crate::{Error, Result};
use bytes::{BufMut, BytesMut};

/// Calculate the Merkle root from a list of transaction hashes
///
/// This implements the Bitcoin Merkle tree algorithm where:
/// - If there's only one hash, it is the root
/// - If there's an odd number of hashes at a level, the last one is duplicated
/// - Hashes are combined pairwise with double SHA256
///
/// The root of an empty list is the zero hash.
pub fn calculate_merkle_root(tx_hashes: &[TxHash]) -> MerkleRoot {
    if tx_hashes.is_empty() {
        return Hash::ZERO;
    }

    let mut current_level: Vec<Hash> = tx_hashes.to_vec();

    // Build the tree level by level
    while current_level.len() > 1 {
        let mut next_level = Vec::with_capacity(current_level.len().div_ceil(2));

        let mut i = 0;
        while i < current_level.len() {
            let left = &current_level[i];

            // If we're at the last element and it's odd, duplicate it
            let right = if i + 1 < current_level.len() {
                &current_level[i + 1]
            } else {
                &current_level[i]
            };

            next_level.push(hash_merkle_branches(left, right));
            i += 2;
        }

        current_level = next_level;
    }

    current_level[0]
}

/// Hash two merkle branches together
///
/// This concatenates the two hashes and applies double SHA256
pub fn hash_merkle_branches(left: &Hash, right: &Hash) -> Hash {
    let mut data = BytesMut::with_capacity(64);
    data.put_slice(&left.raw);
    data.put_slice(&right.raw);
    Hash::sha256d(&data)
}

/// Build a Merkle proof for a transaction
///
/// Returns the list of hashes needed to prove that a transaction at the given
/// index is part of the Merkle tree with the given root
pub fn build_merkle_proof(tx_hashes: &[TxHash], index: usize) -> Result<Vec<Hash>> {
    if tx_hashes.is_empty() {
        return Err(Error::BadArgument(
            "Cannot build merkle proof for empty transaction list".to_string(),
        ));
    }

    if index >= tx_hashes.len() {
        return Err(Error::BadArgument(
            "Transaction index out of bounds".to_string(),
        ));
    }

    let mut proof = Vec::new();
    let mut current_level: Vec<Hash> = tx_hashes.to_vec();
    let mut current_index = index;

    // Build the proof by traversing up the tree
    while current_level.len() > 1 {
        let mut next_level = Vec::new();

        let mut i = 0;
        while i < current_level.len() {
            let left_idx = i;
            let right_idx = if i + 1 < current_level.len() {
                i + 1
            } else {
                i // Duplicate the last element if odd
            };

            // If our target is in this pair, add the sibling to the proof
            if left_idx == current_index || right_idx == current_index {
                if left_idx == current_index {
                    proof.push(current_level[right_idx]);
                } else {
                    proof.push(current_level[left_idx]);
                }
                // Update the index for the next level
                current_index = next_level.len();
            }

            next_level.push(hash_merkle_branches(
                &current_level[left_idx],
                &current_level[right_idx],
            ));
            i += 2;
        }

        current_level = next_level;
    }

    Ok(proof)
}

/// Verify a Merkle proof
///
/// Given a transaction hash, its index, a proof (list of sibling hashes),
/// and the expected root, verify that the transaction is part of the tree
pub fn verify_merkle_proof(
    tx_hash: &TxHash,
    index: usize,
    proof: &[Hash],
    root: &MerkleRoot,
) -> bool {
    let mut current_hash = *tx_hash;
    let mut current_index = index;

    for sibling in proof {
        // Left or right child decides the concatenation order
        if current_index % 2 == 0 {
            current_hash = hash_merkle_branches(&current_hash, sibling);
        } else {
            current_hash = hash_merkle_branches(sibling, &current_hash);
        }
        current_index /= 2;
    }

    current_hash == *root
}
