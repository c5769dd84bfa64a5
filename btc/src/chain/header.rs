use crate::chain::hash::Hash;
use crate::chain::stream::{ByteReader, ByteWriter};
use crate::chain::Encodable;
use hex::{FromHex, ToHex};
use serde::{Deserialize, Serialize};

/// The BlockHash is used to identify block headers and enforce proof of work.
pub type BlockHash = Hash;
/// The MerkleRoot is the root of the merkle tree of this block's transaction hashes.
pub type MerkleRoot = Hash;

/// BlockHeaders are linked together to form a blockchain.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Block version.
    pub version: u32,
    /// Hash of the previous block header.
    pub prev_hash: BlockHash,
    /// Root of the merkle tree of this block's transaction hashes.
    pub merkle_root: MerkleRoot,
    /// Timestamp when this block was created as recorded by the miner.
    pub timestamp: u32,
    /// Target difficulty bits.
    pub bits: u32,
    /// Nonce used to mine the block.
    pub nonce: u32,
}

impl BlockHeader {
    /// Size of the BlockHeader in bytes
    pub const SIZE: usize = 80;
    pub const HEX_SIZE: usize = BlockHeader::SIZE * 2;

    /// Calculates the hash for this block header
    pub fn hash(&self) -> BlockHash {
        Hash::sha256d(&self.to_binary_buf())
    }
}

impl Encodable for BlockHeader {
    fn from_binary(reader: &mut ByteReader) -> Self {
        BlockHeader {
            version: reader.read_u32(),
            prev_hash: Hash::from_binary(reader),
            merkle_root: Hash::from_binary(reader),
            timestamp: reader.read_u32(),
            bits: reader.read_u32(),
            nonce: reader.read_u32(),
        }
    }

    fn to_binary(&self, writer: &mut ByteWriter) {
        writer.write_u32(self.version);
        self.prev_hash.to_binary(writer);
        self.merkle_root.to_binary(writer);
        writer.write_u32(self.timestamp);
        writer.write_u32(self.bits);
        writer.write_u32(self.nonce);
    }

    fn encoded_size(&self) -> usize {
        BlockHeader::SIZE
    }
}

impl FromHex for BlockHeader {
    type Error = crate::Error;
    fn from_hex<T: AsRef<[u8]>>(hex: T) -> Result<Self, Self::Error> {
        let bytes = Vec::<u8>::from_hex(hex)?;
        BlockHeader::from_binary_buf(bytes.as_slice())
    }
}

impl ToHex for BlockHeader {
    fn encode_hex<T: FromIterator<char>>(&self) -> T {
        self.to_binary_buf().encode_hex()
    }

    fn encode_hex_upper<T: FromIterator<char>>(&self) -> T {
        self.to_binary_buf().encode_hex_upper()
    }
}
