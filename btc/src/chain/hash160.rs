use crate::chain::stream::{ByteReader, ByteWriter};
use crate::chain::Encodable;
use hex::{FromHex, ToHex};
use ring::digest::{digest, SHA256};
use ripemd::digest::Update;
use ripemd::{Digest, Ripemd160};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A 160-bit hash, specifically the RIPEMD160(SHA256) hash.
///
/// This is the hash type that is generally used for public key hashes and
/// script hashes within output scripts.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash160 {
    pub hash: [u8; Self::SIZE],
}

impl Hash160 {
    pub const SIZE: usize = 20;
    pub const HEX_SIZE: usize = Hash160::SIZE * 2;
    pub const ZERO: Hash160 = Hash160 {
        hash: [0; Self::SIZE],
    };

    /// Generate the hash160 (RIPEMD160 of SHA256) of the given data.
    pub fn generate(data: &[u8]) -> Hash160 {
        let sha256 = digest(&SHA256, data);
        let mut r_hasher = Ripemd160::new();
        Update::update(&mut r_hasher, sha256.as_ref());
        let ripemd = r_hasher.finalize();
        let mut hash = [0; Self::SIZE];
        hash.clone_from_slice(ripemd.as_ref());
        Hash160 { hash }
    }

    /// Plain RIPEMD160 of the given data.
    pub fn ripemd160(data: &[u8]) -> Hash160 {
        let mut r_hasher = Ripemd160::new();
        Update::update(&mut r_hasher, data);
        let ripemd = r_hasher.finalize();
        let mut hash = [0; Self::SIZE];
        hash.clone_from_slice(ripemd.as_ref());
        Hash160 { hash }
    }

    // helper for ToHex trait implementation
    fn generic_encode_hex<T, F>(&self, mut encode_fn: F) -> T
    where
        T: FromIterator<char>,
        F: FnMut(&[u8]) -> String,
    {
        let mut reversed_bytes = self.hash;
        reversed_bytes.reverse();
        encode_fn(&reversed_bytes).chars().collect()
    }
}

impl Encodable for Hash160 {
    fn from_binary(reader: &mut ByteReader) -> Self {
        let mut hash = [0; Self::SIZE];
        reader.read_slice(&mut hash);
        Hash160 { hash }
    }

    fn to_binary(&self, writer: &mut ByteWriter) {
        writer.write_bytes(&self.hash);
    }

    fn encoded_size(&self) -> usize {
        Self::SIZE
    }
}

impl FromHex for Hash160 {
    type Error = crate::Error;

    /// Converts a string of 40 hex characters into a hash160. The bytes of the hex encoded form are reversed in
    /// accordance with Bitcoin standards.
    fn from_hex<T: AsRef<[u8]>>(hex: T) -> Result<Self, Self::Error> {
        let hex = hex.as_ref();
        if hex.len() != Self::HEX_SIZE {
            let msg = format!(
                "Length of hex encoded hash must be {}. Len is {:}.",
                Self::HEX_SIZE,
                hex.len()
            );
            return Err(crate::Error::BadArgument(msg));
        }
        match hex::decode(hex) {
            Ok(mut hash_bytes) => {
                // Reverse bytes in place to match Bitcoin standard representation.
                hash_bytes.reverse();
                let mut hash_array = [0u8; Self::SIZE];
                hash_array.copy_from_slice(&hash_bytes);
                Ok(Self { hash: hash_array })
            }
            Err(e) => Err(crate::Error::FromHexError(e)),
        }
    }
}

impl ToHex for Hash160 {
    /// Converts the hash into a hex string. The bytes are reversed in the hex string in accordance with
    /// Bitcoin standard representation.
    fn encode_hex<T: FromIterator<char>>(&self) -> T {
        self.generic_encode_hex(|bytes| hex::encode(bytes))
    }

    fn encode_hex_upper<T: FromIterator<char>>(&self) -> T {
        self.generic_encode_hex(|bytes| hex::encode_upper(bytes))
    }
}

impl From<[u8; 20]> for Hash160 {
    fn from(value: [u8; 20]) -> Self {
        Hash160 { hash: value }
    }
}

impl From<Hash160> for [u8; 20] {
    fn from(value: Hash160) -> Self {
        value.hash
    }
}

impl Ord for Hash160 {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..Self::SIZE).rev() {
            if self.hash[i] < other.hash[i] {
                return Ordering::Less;
            } else if self.hash[i] > other.hash[i] {
                return Ordering::Greater;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Hash160 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode_hex::<String>())
    }
}

impl fmt::Debug for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode_hex::<String>())
    }
}

impl Serialize for Hash160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.encode_hex::<String>().as_ref())
    }
}

impl<'de> Deserialize<'de> for Hash160 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(s).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
