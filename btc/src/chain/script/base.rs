use crate::chain::rules::{
    MAX_NULL_DATA_SIZE, MAX_SCRIPT_SIZE, MAX_WITNESS_PROGRAM_SIZE, MIN_WITNESS_PROGRAM_SIZE,
    MULTISIG_DEFAULT_SIGOPS, WITNESS_COMMITMENT_HEAD, WITNESS_COMMITMENT_SIZE,
};
use crate::chain::script::Operation;
use crate::chain::stream::{ByteReader, ByteWriter};
use crate::chain::var_int::{varint_decode, varint_encode, varint_size};
use crate::chain::Encodable;
use bytes::Bytes;
use hex::{FromHex, ToHex};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Bitcoin Scripts are used to lock and unlock outputs.
///
/// A script is immutable once constructed. It holds both the raw body bytes
/// and the parsed operation sequence; the two always agree. Use
/// [ScriptBuilder] to assemble a script from operations.
///
/// If a push-data operation declares more bytes than remain in the body, the
/// script is *prefailed*: the operation list is empty but the raw bytes are
/// retained, so the script still re-serializes to exactly what was read.
/// Such a script is accepted on the wire and only fails at execution time,
/// which is outside this crate.
///
/// [ScriptBuilder]: crate::chain::ScriptBuilder
#[derive(Default, PartialEq, Eq, Hash, Clone, Debug)]
pub struct Script {
    raw: Bytes,
    ops: Vec<Operation>,
    prefailed: bool,
}

impl Script {
    /// Build a script from its body bytes (no length prefix), parsing the
    /// operation sequence.
    pub fn from_bytes(raw: Bytes) -> Script {
        match Script::parse(&raw) {
            Some(ops) => Script {
                raw,
                ops,
                prefailed: false,
            },
            None => Script {
                raw,
                ops: Vec::new(),
                prefailed: true,
            },
        }
    }

    pub(crate) fn from_parts(raw: Bytes, ops: Vec<Operation>) -> Script {
        Script {
            raw,
            ops,
            prefailed: false,
        }
    }

    /// The parsed operation sequence. Empty for a prefailed script.
    pub fn ops(&self) -> &[Operation] {
        &self.ops
    }

    /// The script body without its length prefix.
    pub fn bytes(&self) -> &Bytes {
        &self.raw
    }

    /// The length of the script body in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// True when a push-data operation overran the script body on decode.
    pub fn is_prefailed(&self) -> bool {
        self.prefailed
    }

    // Parse the body into operations. None when a push overruns the body.
    fn parse(raw: &[u8]) -> Option<Vec<Operation>> {
        let mut ops = Vec::new();
        let mut i = 0usize;
        while i < raw.len() {
            let code = raw[i];
            i += 1;
            let op = match code {
                0x00 => Operation::OP_0,
                0x01..=0x4b => {
                    let n = code as usize;
                    if n > raw.len() - i {
                        return None;
                    }
                    let data = Bytes::copy_from_slice(&raw[i..i + n]);
                    i += n;
                    Operation::OP_PUSH(data)
                }
                0x4c => {
                    if i >= raw.len() {
                        return None;
                    }
                    let n = raw[i] as usize;
                    i += 1;
                    if n > raw.len() - i {
                        return None;
                    }
                    let data = Bytes::copy_from_slice(&raw[i..i + n]);
                    i += n;
                    Operation::OP_PUSHDATA1(data)
                }
                0x4d => {
                    if raw.len() - i < 2 {
                        return None;
                    }
                    let n = u16::from_le_bytes([raw[i], raw[i + 1]]) as usize;
                    i += 2;
                    if n > raw.len() - i {
                        return None;
                    }
                    let data = Bytes::copy_from_slice(&raw[i..i + n]);
                    i += n;
                    Operation::OP_PUSHDATA2(data)
                }
                0x4e => {
                    if raw.len() - i < 4 {
                        return None;
                    }
                    let n =
                        u32::from_le_bytes([raw[i], raw[i + 1], raw[i + 2], raw[i + 3]]) as usize;
                    i += 4;
                    if n > raw.len() - i {
                        return None;
                    }
                    let data = Bytes::copy_from_slice(&raw[i..i + n]);
                    i += n;
                    Operation::OP_PUSHDATA4(data)
                }
                other => Operation::from_code(other),
            };
            ops.push(op);
        }
        Some(ops)
    }

    /// Matches [DUP, HASH160, PUSH(20), EQUALVERIFY, CHECKSIG].
    pub fn is_pay_to_public_key_hash(&self) -> bool {
        use Operation::*;
        matches!(self.ops.as_slice(),
            [OP_DUP, OP_HASH160, OP_PUSH(hash), OP_EQUALVERIFY, OP_CHECKSIG] if hash.len() == 20)
    }

    /// Matches [HASH160, PUSH(20), EQUAL] (BIP16).
    pub fn is_pay_to_script_hash(&self) -> bool {
        use Operation::*;
        matches!(self.ops.as_slice(),
            [OP_HASH160, OP_PUSH(hash), OP_EQUAL] if hash.len() == 20)
    }

    /// The witness version and program of a witness program script (BIP141).
    ///
    /// A witness program is a small-integer version opcode followed by a
    /// single direct push of 2 to 40 bytes. For version 0 the program must be
    /// 20 (key hash) or 32 (script hash) bytes.
    pub fn witness_program(&self) -> Option<(u8, &Bytes)> {
        match self.ops.as_slice() {
            [version, Operation::OP_PUSH(program)] => {
                let version = version.small_int()?;
                let len = program.len();
                if !(MIN_WITNESS_PROGRAM_SIZE..=MAX_WITNESS_PROGRAM_SIZE).contains(&len) {
                    return None;
                }
                if version == 0 && len != 20 && len != 32 {
                    return None;
                }
                Some((version, program))
            }
            _ => None,
        }
    }

    pub fn is_witness_program(&self) -> bool {
        self.witness_program().is_some()
    }

    /// Matches a version 0 witness program with a 20-byte key hash (BIP141).
    pub fn is_pay_to_witness_public_key_hash(&self) -> bool {
        matches!(self.witness_program(), Some((0, program)) if program.len() == 20)
    }

    /// Matches a version 0 witness program with a 32-byte script hash (BIP141).
    pub fn is_pay_to_witness_script_hash(&self) -> bool {
        matches!(self.witness_program(), Some((0, program)) if program.len() == 32)
    }

    /// Matches [OP_M, PUSH(pk1), .., PUSH(pkN), OP_N, CHECKMULTISIG] where
    /// the pushes are public-key sized and 1 <= M <= N.
    pub fn is_multisig(&self) -> bool {
        let ops = &self.ops;
        if ops.len() < 4 || !matches!(ops.last(), Some(Operation::OP_CHECKMULTISIG)) {
            return false;
        }
        let m = match ops[0].small_int() {
            Some(m @ 1..=16) => m,
            _ => return false,
        };
        let n = match ops[ops.len() - 2].small_int() {
            Some(n @ 1..=16) => n,
            _ => return false,
        };
        if m > n {
            return false;
        }
        let keys = &ops[1..ops.len() - 2];
        keys.len() == n as usize
            && keys
                .iter()
                .all(|op| matches!(op.data(), Some(key) if key.len() == 33 || key.len() == 65))
    }

    /// Matches [OP_RETURN] with at most one small data push following.
    pub fn is_null_data(&self) -> bool {
        match self.ops.as_slice() {
            [Operation::OP_RETURN] => true,
            [Operation::OP_RETURN, op] => {
                matches!(op.data(), Some(data) if data.len() <= MAX_NULL_DATA_SIZE)
            }
            _ => false,
        }
    }

    /// Matches a witness commitment output script (BIP141): OP_RETURN
    /// followed by a push of exactly 36 bytes opening with `0xaa21a9ed`.
    pub fn is_commitment_pattern(&self) -> bool {
        self.ops.len() > 1
            && matches!(self.ops[0], Operation::OP_RETURN)
            && matches!(&self.ops[1], Operation::OP_PUSH(data)
                if data.len() == WITNESS_COMMITMENT_SIZE && data[..4] == WITNESS_COMMITMENT_HEAD)
    }

    /// A script that can never be spent: it opens with OP_RETURN or exceeds
    /// the maximum script size.
    pub fn is_unspendable(&self) -> bool {
        matches!(self.ops.first(), Some(Operation::OP_RETURN)) || self.raw.len() > MAX_SCRIPT_SIZE
    }

    /// Count the signature operations in this script.
    ///
    /// CHECKSIG and CHECKSIGVERIFY count one. CHECKMULTISIG and
    /// CHECKMULTISIGVERIFY count the preceding key count when `accurate` and
    /// the key count is a small integer, and twenty otherwise. The count
    /// saturates, and a script over the maximum size yields the size limit.
    pub fn sigops(&self, accurate: bool) -> usize {
        if self.raw.len() > MAX_SCRIPT_SIZE {
            return MAX_SCRIPT_SIZE;
        }
        let mut total = 0usize;
        let mut last: Option<&Operation> = None;
        for op in &self.ops {
            match op {
                Operation::OP_CHECKSIG | Operation::OP_CHECKSIGVERIFY => {
                    total = total.saturating_add(1);
                }
                Operation::OP_CHECKMULTISIG | Operation::OP_CHECKMULTISIGVERIFY => {
                    let count = match last.and_then(Operation::small_int) {
                        Some(n @ 1..=16) if accurate => n as usize,
                        _ => MULTISIG_DEFAULT_SIGOPS,
                    };
                    total = total.saturating_add(count);
                }
                _ => {}
            }
            last = Some(op);
        }
        total
    }
}

impl Encodable for Script {
    /// A script is always encoded with its size.
    ///
    /// The declared size is checked against the remaining input before any
    /// allocation, and a size over [MAX_SCRIPT_SIZE] invalidates the stream.
    fn from_binary(reader: &mut ByteReader) -> Self {
        let size = varint_decode(reader);
        if size > MAX_SCRIPT_SIZE as u64 {
            reader.invalidate();
            return Script::default();
        }
        let raw = reader.read_bytes(size as usize);
        if !reader.is_valid() {
            return Script::default();
        }
        Script::from_bytes(raw)
    }

    fn to_binary(&self, writer: &mut ByteWriter) {
        varint_encode(writer, self.raw.len() as u64);
        writer.write_bytes(&self.raw);
    }

    /// The size is the number of body bytes plus the number of bytes needed
    /// to encode the size.
    fn encoded_size(&self) -> usize {
        varint_size(self.raw.len() as u64) + self.raw.len()
    }
}

impl From<Vec<u8>> for Script {
    fn from(value: Vec<u8>) -> Self {
        Script::from_bytes(Bytes::from(value))
    }
}

impl FromHex for Script {
    type Error = crate::Error;

    /// Hex encoding is not prefixed by the length.
    fn from_hex<T: AsRef<[u8]>>(hex: T) -> Result<Self, Self::Error> {
        let raw = hex::decode(hex)?;
        Ok(Script::from_bytes(Bytes::from(raw)))
    }
}

impl ToHex for Script {
    fn encode_hex<T: FromIterator<char>>(&self) -> T {
        self.raw.encode_hex()
    }

    fn encode_hex_upper<T: FromIterator<char>>(&self) -> T {
        self.raw.encode_hex_upper()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode_hex::<String>())
    }
}

impl Serialize for Script {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.encode_hex::<String>().as_ref())
    }
}

impl<'de> Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Script::from_hex(s).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
