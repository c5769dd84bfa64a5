//! This module contains the chain object model: transactions, scripts,
//! blocks, and their canonical byte encoding.
//!
//! Every entity is immutable after construction and hashing and parsing are
//! pure, so values can be shared freely across threads. Decoders never
//! panic or error mid-stream; see [Encodable] and [ByteReader] for the
//! failure model.

mod block;
mod encoding;
mod hash;
mod hash160;
mod header;
mod merkle;
pub mod rules;
mod script;
mod stream;
mod tx;
mod var_int;
mod witness;

#[cfg(test)]
mod codec_edge_tests;
#[cfg(test)]
mod proptest_tests;

pub use self::block::Block;
pub use self::encoding::Encodable;
pub use self::hash::Hash;
pub use self::hash160::Hash160;
pub use self::header::{BlockHash, BlockHeader, MerkleRoot};
pub use self::merkle::{
    build_merkle_proof, calculate_merkle_root, hash_merkle_branches, verify_merkle_proof,
};
pub use self::script::*;
pub use self::stream::{ByteReader, ByteWriter};
pub use self::tx::{Outpoint, PrevoutLookup, Tx, TxBuilder, TxHash, TxInput, TxOutput};
pub use self::var_int::{varint_decode, varint_encode, varint_size};
pub use self::witness::Witness;

pub use hex::{FromHex, ToHex};
