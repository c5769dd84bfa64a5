use crate::chain::stream::{ByteReader, ByteWriter};
use crate::{Error, Result};

/// Read & write Bitcoin data structures to and from binary in Bitcoin encoding format.
///
/// Decoders never fail mid-stream; they record problems on the reader's sticky
/// invalid flag (see [ByteReader]) and return a default-shaped value. The
/// buffer-level helpers check the flag once at the end and turn a dirty stream
/// into an error.
pub trait Encodable {
    /// Read the data structure from a reader.
    fn from_binary(reader: &mut ByteReader) -> Self
    where
        Self: Sized;

    /// Write the data structure to a writer.
    fn to_binary(&self, writer: &mut ByteWriter);

    /// Return the size of the encoded form.
    // It is vital (for efficiency) that implementations of this function use a method that does not just encode the object
    // and count the bytes. This is because this function is used to determine the size of the buffer to allocate
    // for the encoding.
    fn encoded_size(&self) -> usize;

    /// Decode an object from a byte buffer, checking stream validity.
    fn from_binary_buf(buf: &[u8]) -> Result<Self>
    where
        Self: Sized,
    {
        let mut reader = ByteReader::new(buf);
        let value = Self::from_binary(&mut reader);
        if reader.is_valid() {
            Ok(value)
        } else {
            Err(Error::BadData("truncated or malformed encoding".to_string()))
        }
    }

    /// Encode an object into a new vector.
    fn to_binary_buf(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(self.encoded_size());
        self.to_binary(&mut writer);
        writer.into_vec()
    }
}
