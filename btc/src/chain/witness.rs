use crate::chain::stream::{ByteReader, ByteWriter};
use crate::chain::var_int::{varint_decode, varint_encode, varint_size};
use crate::chain::Encodable;
use bytes::Bytes;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The witness of a transaction input (BIP141): an ordered stack of byte
/// sequences.
///
/// The witness belongs to its input but travels in a separate section of the
/// transaction byte layout. An empty witness is the signal that an input
/// contributes no witness data, and encodes as a single zero byte.
#[derive(Default, PartialEq, Eq, Hash, Clone, Debug)]
pub struct Witness {
    elements: Vec<Bytes>,
}

impl Witness {
    pub fn new() -> Witness {
        Witness {
            elements: Vec::new(),
        }
    }

    pub fn from_elements(elements: Vec<Bytes>) -> Witness {
        Witness { elements }
    }

    /// Append a stack element.
    pub fn push(&mut self, element: Bytes) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[Bytes] {
        &self.elements
    }

    /// The top stack element, if any.
    pub fn last(&self) -> Option<&Bytes> {
        self.elements.last()
    }
}

impl Encodable for Witness {
    fn from_binary(reader: &mut ByteReader) -> Self {
        let count = varint_decode(reader);
        // Each element takes at least its one-byte length prefix.
        if count > reader.remaining() as u64 {
            reader.invalidate();
            return Witness::default();
        }
        let mut elements = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let len = varint_decode(reader);
            if len > reader.remaining() as u64 {
                reader.invalidate();
                return Witness::default();
            }
            elements.push(reader.read_bytes(len as usize));
            if !reader.is_valid() {
                return Witness::default();
            }
        }
        Witness { elements }
    }

    fn to_binary(&self, writer: &mut ByteWriter) {
        varint_encode(writer, self.elements.len() as u64);
        for element in self.elements.iter() {
            varint_encode(writer, element.len() as u64);
            writer.write_bytes(element);
        }
    }

    fn encoded_size(&self) -> usize {
        let mut size = varint_size(self.elements.len() as u64);
        for element in self.elements.iter() {
            size += varint_size(element.len() as u64) + element.len();
        }
        size
    }
}

impl Serialize for Witness {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let hex_elements: Vec<String> = self.elements.iter().map(hex::encode).collect();
        hex_elements.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Witness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_elements = Vec::<String>::deserialize(deserializer)?;
        let mut elements = Vec::with_capacity(hex_elements.len());
        for s in hex_elements {
            let bytes = hex::decode(&s).map_err(D::Error::custom)?;
            elements.push(Bytes::from(bytes));
        }
        Ok(Witness { elements })
    }
}
