use crate::chain::stream::{ByteReader, ByteWriter};
use crate::chain::Encodable;
use crate::Error;
use hex::{FromHex, ToHex};
use ring::digest::{digest, SHA256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A struct representing a hash, specifically a SHA256d hash.
///
/// This is the hash type that is generally used within the Bitcoin infrastructure.
///
/// Note that [TxHash], [BlockHash], and [MerkleRoot] are all type aliases for [struct@Hash]. Those aliases
/// should generally be used instead of this struct.
/// [MerkleRoot]: crate::chain::MerkleRoot
/// [TxHash]: crate::chain::TxHash
/// [BlockHash]: crate::chain::BlockHash
// We're not going to use a Bytes here. https://docs.rs/bytes/latest/bytes/struct.Bytes.html# reports
// that Bytes struct has 4 x usize fields = 32 bytes (on 64-bit architecture, our main goal). This is
// equal in size to the hash, might as well just copy it when needed.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash {
    pub raw: [u8; 32],
}

impl Hash {
    pub const SIZE: usize = 32;
    pub const HEX_SIZE: usize = Hash::SIZE * 2;
    pub const ZERO: Hash = Hash {
        raw: [0; Self::SIZE],
    };

    /// Single SHA256 hash the given data.
    pub fn sha256(data: &[u8]) -> Hash {
        let sha256 = digest(&SHA256, data);
        let mut hash = [0; 32];
        hash.clone_from_slice(sha256.as_ref());
        Hash { raw: hash }
    }

    /// Double SHA256 hash the given data.
    pub fn sha256d(data: &[u8]) -> Hash {
        let sha256 = digest(&SHA256, data);
        let sha256d = digest(&SHA256, sha256.as_ref());
        let mut hash256 = [0; 32];
        hash256.clone_from_slice(sha256d.as_ref());
        Hash { raw: hash256 }
    }

    /// Build a hash from a 32-byte slice.
    pub fn from_slice(slice: &[u8]) -> Hash {
        let mut hash = [0; 32];
        hash.copy_from_slice(slice);
        Hash { raw: hash }
    }

    // helper for ToHex trait implementation
    fn generic_encode_hex<T, F>(&self, mut encode_fn: F) -> T
    where
        T: FromIterator<char>,
        F: FnMut(&[u8]) -> String,
    {
        let mut reversed_bytes = self.raw;
        reversed_bytes.reverse();
        encode_fn(&reversed_bytes).chars().collect()
    }
}

impl Encodable for Hash {
    fn from_binary(reader: &mut ByteReader) -> Self {
        let mut hash = [0; 32];
        reader.read_slice(&mut hash);
        Hash { raw: hash }
    }

    fn to_binary(&self, writer: &mut ByteWriter) {
        writer.write_bytes(&self.raw);
    }

    fn encoded_size(&self) -> usize {
        Self::SIZE
    }
}

impl FromHex for Hash {
    type Error = Error;

    /// Converts a string of 64 hex characters into a hash. The bytes of the hex encoded form are reversed in
    /// accordance with Bitcoin standards.
    fn from_hex<T: AsRef<[u8]>>(hex: T) -> Result<Self, Self::Error> {
        let hex = hex.as_ref();
        if hex.len() != Hash::HEX_SIZE {
            let msg = format!(
                "Length of hex encoded hash must be 64. Len is {:}.",
                hex.len()
            );
            return Err(Error::BadArgument(msg));
        }
        match hex::decode(hex) {
            Ok(mut hash_bytes) => {
                // Reverse bytes in place to match Bitcoin standard representation.
                hash_bytes.reverse();
                let mut hash_array = [0u8; Hash::SIZE];
                hash_array.copy_from_slice(&hash_bytes);
                Ok(Hash { raw: hash_array })
            }
            Err(e) => Err(Error::FromHexError(e)),
        }
    }
}

impl ToHex for Hash {
    /// Converts the hash into a hex string. The bytes are reversed in the hex string in accordance with
    /// Bitcoin standard representation.
    fn encode_hex<T: FromIterator<char>>(&self) -> T {
        self.generic_encode_hex(|bytes| hex::encode(bytes))
    }

    fn encode_hex_upper<T: FromIterator<char>>(&self) -> T {
        self.generic_encode_hex(|bytes| hex::encode_upper(bytes))
    }
}

impl From<[u8; 32]> for Hash {
    fn from(value: [u8; 32]) -> Self {
        Hash { raw: value }
    }
}

impl From<Hash> for [u8; 32] {
    fn from(value: Hash) -> Self {
        value.raw
    }
}

impl From<Hash> for Vec<u8> {
    fn from(value: Hash) -> Self {
        value.raw.to_vec()
    }
}

impl From<&str> for Hash {
    /// This converts a hex encoded hash into a Hash struct.
    fn from(hash_as_hex: &str) -> Hash {
        Hash::from_hex(hash_as_hex).unwrap()
    }
}

impl Ord for Hash {
    /// Define the ordering of hashes. The order direction matches the alphabetic ordering of
    /// their hex representations.
    ///
    /// The ordering is byte-wise from the last byte to the first of the encoded form. This matches
    /// the alphabetical ordering of the hex representation since the hex representation is
    /// reversed byte-wise.
    fn cmp(&self, other: &Hash) -> Ordering {
        for i in (0..32).rev() {
            if self.raw[i] < other.raw[i] {
                return Ordering::Less;
            } else if self.raw[i] > other.raw[i] {
                return Ordering::Greater;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Hash {
    fn partial_cmp(&self, other: &Hash) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode_hex::<String>())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode_hex::<String>())
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.encode_hex::<String>().as_ref())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Hash::from_hex(s).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
