use crate::chain::hash::Hash;
use crate::chain::rules::{
    COINBASE_INDEX, MAX_BLOCK_WEIGHT, MAX_MONEY, MIN_INPUT_SIZE, MIN_OUTPUT_SIZE,
    OUTPUT_NOT_FOUND, WITNESS_COMMITMENT_HEAD, WITNESS_SCALE_FACTOR,
};
use crate::chain::stream::{ByteReader, ByteWriter};
use crate::chain::var_int::{varint_decode, varint_encode, varint_size};
use crate::chain::witness::Witness;
use crate::chain::{Encodable, Script};
use hex::{FromHex, ToHex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The TxHash is used to identify transactions.
pub type TxHash = Hash;

/// An Outpoint is a reference to a specific output of a specific transaction.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct Outpoint {
    pub tx_hash: Hash,
    pub index: u32,
}

impl Outpoint {
    pub const SIZE: usize = 36;

    /// The null outpoint that marks a coinbase input: an all-zero hash with
    /// the maximum index.
    pub fn null() -> Outpoint {
        Outpoint {
            tx_hash: Hash::ZERO,
            index: COINBASE_INDEX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.index == COINBASE_INDEX && self.tx_hash == Hash::ZERO
    }
}

impl Default for Outpoint {
    fn default() -> Self {
        Outpoint::null()
    }
}

impl Encodable for Outpoint {
    fn from_binary(reader: &mut ByteReader) -> Self {
        let tx_hash = Hash::from_binary(reader);
        let index = reader.read_u32();
        Outpoint { tx_hash, index }
    }

    fn to_binary(&self, writer: &mut ByteWriter) {
        self.tx_hash.to_binary(writer);
        writer.write_u32(self.index);
    }

    fn encoded_size(&self) -> usize {
        Outpoint::SIZE
    }
}

/// A TxOutput is an output from a transaction.
///
/// The default value is the not-found sentinel used as the prevout
/// placeholder during signature hashing: the maximum value with an empty
/// script. It is the only output for which [is_valid] is false.
///
/// [is_valid]: TxOutput::is_valid
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct TxOutput {
    pub value: u64,
    pub script: Script,
}

impl TxOutput {
    /// Simple new function.
    pub fn new(value: u64, script: Script) -> TxOutput {
        TxOutput { value, script }
    }

    /// The placeholder for a prevout that could not be located.
    pub fn not_found() -> TxOutput {
        TxOutput::default()
    }

    pub fn is_valid(&self) -> bool {
        !(self.value == OUTPUT_NOT_FOUND && self.script.is_empty())
    }

    /// An output below the minimum is dust unless its script is provably
    /// unspendable. Unspendable outputs never enter the unspent output set,
    /// so there is nothing to prune.
    pub fn is_dust(&self, minimum_value: u64) -> bool {
        self.value < minimum_value && !self.script.is_unspendable()
    }

    /// Count the signature operations in the output script. Legacy sigops
    /// are scaled by the witness factor when bip141 is active.
    pub fn signature_operations(&self, bip141: bool) -> usize {
        let factor = if bip141 { WITNESS_SCALE_FACTOR } else { 1 };
        self.script.sigops(false).saturating_mul(factor)
    }

    /// The witness commitment hash carried by this output, if its script
    /// matches the commitment pattern (BIP141).
    pub fn committed_hash(&self) -> Option<Hash> {
        if !self.script.is_commitment_pattern() {
            return None;
        }
        let data = self.script.ops()[1].data()?;
        Some(Hash::from_slice(&data[WITNESS_COMMITMENT_HEAD.len()..]))
    }
}

impl Default for TxOutput {
    fn default() -> Self {
        TxOutput {
            value: OUTPUT_NOT_FOUND,
            script: Script::default(),
        }
    }
}

impl Encodable for TxOutput {
    fn from_binary(reader: &mut ByteReader) -> Self {
        let value = reader.read_u64();
        let script = Script::from_binary(reader);
        if !reader.is_valid() {
            return TxOutput::default();
        }
        TxOutput { value, script }
    }

    fn to_binary(&self, writer: &mut ByteWriter) {
        writer.write_u64(self.value);
        self.script.to_binary(writer);
    }

    fn encoded_size(&self) -> usize {
        8 + self.script.encoded_size()
    }
}

/// A TxInput is an input to a transaction.
///
/// The witness belongs to the input but is carried in a separate section of
/// the transaction byte layout, so the input codec covers only the outpoint,
/// script, and sequence.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct TxInput {
    pub outpoint: Outpoint,
    pub script: Script,
    pub sequence: u32,
    pub witness: Witness,
}

impl TxInput {
    /// Create a new TxInput with an empty witness.
    pub fn new(tx_hash: TxHash, index: u32, script: Script, sequence: Option<u32>) -> TxInput {
        let sequence = sequence.unwrap_or(u32::MAX);
        TxInput {
            outpoint: Outpoint { tx_hash, index },
            script,
            sequence,
            witness: Witness::new(),
        }
    }

    /// True when this input mints new coin.
    pub fn is_coinbase(&self) -> bool {
        self.outpoint.is_null()
    }

    /// The redeem script pushed as the last element of the input script
    /// (BIP16). None when the input script does not end with a data push.
    pub fn embedded_script(&self) -> Option<Script> {
        let data = self.script.ops().last()?.data()?;
        Some(Script::from_bytes(data.clone()))
    }

    /// Count the signature operations attributable to this input.
    ///
    /// Always counts the input script's own operations (legacy, scaled by the
    /// witness factor when bip141 is active). When the referenced prevout is
    /// known: under bip16 a pay-to-script-hash prevout adds the accurate
    /// count of the embedded redeem script, and under bip141 a witness
    /// program prevout adds the witness sigops (one for a key-hash program,
    /// the accurate count of the last witness element parsed as a script for
    /// a script-hash program). Witness sigops are not scaled.
    pub fn signature_operations(
        &self,
        bip16: bool,
        bip141: bool,
        prevout: Option<&TxOutput>,
    ) -> usize {
        let factor = if bip141 { WITNESS_SCALE_FACTOR } else { 1 };
        let mut sigops = self.script.sigops(false).saturating_mul(factor);

        let Some(prevout) = prevout else {
            return sigops;
        };

        if bip141 {
            if let Some((version, program)) = prevout.script.witness_program() {
                sigops = sigops.saturating_add(self.witness_sigops(version, program.len()));
            }
        }

        if bip16 && prevout.script.is_pay_to_script_hash() {
            if let Some(embedded) = self.embedded_script() {
                sigops = sigops.saturating_add(embedded.sigops(true).saturating_mul(factor));
            }
        }

        sigops
    }

    // Sigops of the witness program this input spends (BIP141).
    fn witness_sigops(&self, version: u8, program_len: usize) -> usize {
        if version != 0 {
            return 0;
        }
        match program_len {
            20 => 1,
            32 => match self.witness.last() {
                Some(element) => Script::from_bytes(element.clone()).sigops(true),
                None => 0,
            },
            _ => 0,
        }
    }
}

impl Encodable for TxInput {
    fn from_binary(reader: &mut ByteReader) -> Self {
        let outpoint = Outpoint::from_binary(reader);
        let script = Script::from_binary(reader);
        let sequence = reader.read_u32();
        TxInput {
            outpoint,
            script,
            sequence,
            witness: Witness::new(),
        }
    }

    fn to_binary(&self, writer: &mut ByteWriter) {
        self.outpoint.to_binary(writer);
        self.script.to_binary(writer);
        writer.write_u32(self.sequence);
    }

    fn encoded_size(&self) -> usize {
        self.outpoint.encoded_size() + self.script.encoded_size() + 4
    }
}

/// Locates the output a given outpoint refers to.
///
/// This is the seam to the blockchain store or unspent output set; signature
/// operation counting under BIP16 and BIP141 needs the spent output's script.
pub trait PrevoutLookup {
    fn find_output(&self, outpoint: &Outpoint) -> Option<TxOutput>;
}

impl PrevoutLookup for HashMap<Outpoint, TxOutput> {
    fn find_output(&self, outpoint: &Outpoint) -> Option<TxOutput> {
        self.get(outpoint).cloned()
    }
}

/// A Bitcoin transaction.
///
/// A transaction is segwit if at least one of its inputs carries a non-empty
/// witness, and its canonical encoding follows from that: the extended
/// marker-and-flag layout (BIP144) when segwit, the legacy layout otherwise.
/// The same transaction always serializes identically.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize)]
pub struct Tx {
    /// transaction version number
    pub version: u32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    /// lock time
    pub lock_time: u32,
}

impl Tx {
    /// True when any input carries a non-empty witness.
    pub fn is_segwit(&self) -> bool {
        self.inputs.iter().any(|input| !input.witness.is_empty())
    }

    /// True when this transaction mints new coin: a single input spending
    /// the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].is_coinbase()
    }

    /// The transaction identifier: the double SHA256 of the legacy encoding,
    /// with witnesses stripped.
    pub fn txid(&self) -> TxHash {
        let mut writer = ByteWriter::with_capacity(self.base_size());
        self.to_binary_legacy(&mut writer);
        Hash::sha256d(&writer.into_vec())
    }

    /// The witness transaction identifier: the double SHA256 of the segwit
    /// encoding. Identical to [txid] for a non-segwit transaction.
    ///
    /// [txid]: Tx::txid
    pub fn wtxid(&self) -> TxHash {
        if self.is_segwit() {
            Hash::sha256d(&self.to_binary_buf())
        } else {
            self.txid()
        }
    }

    /// Structural validity: inputs and outputs non-empty, the null outpoint
    /// appears only as the single coinbase input, and the output total does
    /// not overflow.
    pub fn is_valid(&self) -> bool {
        if self.inputs.is_empty() || self.outputs.is_empty() {
            return false;
        }
        if self.value_out().is_none() {
            return false;
        }
        if !self.is_coinbase() && self.inputs.iter().any(|input| input.outpoint.is_null()) {
            return false;
        }
        true
    }

    /// The total value of the outputs in satoshis, or None when the sum
    /// overflows or exceeds the maximum money supply.
    pub fn value_out(&self) -> Option<u64> {
        let mut total = 0u64;
        for output in self.outputs.iter() {
            total = total.checked_add(output.value)?;
        }
        if total > MAX_MONEY {
            return None;
        }
        Some(total)
    }

    /// The size of the legacy encoding: witnesses stripped, no marker.
    pub fn base_size(&self) -> usize {
        let mut size = 4 + varint_size(self.inputs.len() as u64);
        for input in self.inputs.iter() {
            size += input.encoded_size();
        }
        size += varint_size(self.outputs.len() as u64);
        for output in self.outputs.iter() {
            size += output.encoded_size();
        }
        size + 4
    }

    /// The weight of the transaction in weight units (BIP141): base bytes
    /// count four, witness bytes count one.
    pub fn weight(&self) -> usize {
        self.base_size() * (WITNESS_SCALE_FACTOR - 1) + self.encoded_size()
    }

    /// Count the signature operations of the whole transaction: each input's
    /// count plus each output's count, with the quadratic factor applied
    /// uniformly when bip141 is active. Prevouts the lookup cannot locate
    /// contribute no embedded or witness sigops.
    pub fn signature_operations(
        &self,
        bip16: bool,
        bip141: bool,
        prevouts: &impl PrevoutLookup,
    ) -> usize {
        let input_sigops = self.inputs.iter().fold(0usize, |total, input| {
            let prevout = prevouts.find_output(&input.outpoint);
            total.saturating_add(input.signature_operations(bip16, bip141, prevout.as_ref()))
        });
        self.outputs.iter().fold(input_sigops, |total, output| {
            total.saturating_add(output.signature_operations(bip141))
        })
    }

    // The legacy layout: version, inputs, outputs, lock time.
    pub(crate) fn to_binary_legacy(&self, writer: &mut ByteWriter) {
        writer.write_u32(self.version);
        varint_encode(writer, self.inputs.len() as u64);
        for input in self.inputs.iter() {
            input.to_binary(writer);
        }
        varint_encode(writer, self.outputs.len() as u64);
        for output in self.outputs.iter() {
            output.to_binary(writer);
        }
        writer.write_u32(self.lock_time);
    }
}

impl Default for Tx {
    /// The null transaction used as a placeholder; it is not valid.
    fn default() -> Self {
        Tx {
            version: 0,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
        }
    }
}

impl Encodable for Tx {
    /// Decode either transaction layout (BIP144).
    ///
    /// After the version, the byte pair 0x00 0x01 announces the segwit
    /// marker and flag. A marker followed by an empty input list is instead
    /// decoded as the legacy zero-input form; the resulting transaction is
    /// invalid and rejected downstream.
    fn from_binary(reader: &mut ByteReader) -> Self {
        let version = reader.read_u32();

        let mark = reader.position();
        let mut segwit = false;
        if reader.remaining() >= 2 {
            let marker = reader.read_u8();
            let flag = reader.read_u8();
            if marker == 0x00 && flag == 0x01 {
                let probe = reader.position();
                let input_count = varint_decode(reader);
                reader.set_position(probe);
                segwit = reader.is_valid() && input_count > 0;
            }
        }
        if !segwit {
            reader.set_position(mark);
        }

        let input_count = varint_decode(reader);
        if input_count > (reader.remaining() / MIN_INPUT_SIZE) as u64 {
            reader.invalidate();
            return Tx::default();
        }
        let mut inputs = Vec::with_capacity(input_count as usize);
        for _ in 0..input_count {
            inputs.push(TxInput::from_binary(reader));
            if !reader.is_valid() {
                return Tx::default();
            }
        }

        let output_count = varint_decode(reader);
        if output_count > (reader.remaining() / MIN_OUTPUT_SIZE) as u64 {
            reader.invalidate();
            return Tx::default();
        }
        let mut outputs = Vec::with_capacity(output_count as usize);
        for _ in 0..output_count {
            outputs.push(TxOutput::from_binary(reader));
            if !reader.is_valid() {
                return Tx::default();
            }
        }

        if segwit {
            // One witness per input, in input order.
            for input in inputs.iter_mut() {
                input.witness = Witness::from_binary(reader);
                if !reader.is_valid() {
                    return Tx::default();
                }
            }
            // A marker with no witness data has no canonical purpose.
            if inputs.iter().all(|input| input.witness.is_empty()) {
                reader.invalidate();
                return Tx::default();
            }
        }

        let lock_time = reader.read_u32();
        let tx = Tx {
            version,
            inputs,
            outputs,
            lock_time,
        };
        if tx.weight() > MAX_BLOCK_WEIGHT {
            reader.invalidate();
            return Tx::default();
        }
        tx
    }

    /// Encode the canonical layout: segwit iff any witness is non-empty.
    fn to_binary(&self, writer: &mut ByteWriter) {
        if !self.is_segwit() {
            return self.to_binary_legacy(writer);
        }
        writer.write_u32(self.version);
        writer.write_u8(0x00);
        writer.write_u8(0x01);
        varint_encode(writer, self.inputs.len() as u64);
        for input in self.inputs.iter() {
            input.to_binary(writer);
        }
        varint_encode(writer, self.outputs.len() as u64);
        for output in self.outputs.iter() {
            output.to_binary(writer);
        }
        for input in self.inputs.iter() {
            input.witness.to_binary(writer);
        }
        writer.write_u32(self.lock_time);
    }

    fn encoded_size(&self) -> usize {
        if !self.is_segwit() {
            return self.base_size();
        }
        let witness_size: usize = self
            .inputs
            .iter()
            .map(|input| input.witness.encoded_size())
            .sum();
        self.base_size() + 2 + witness_size
    }
}

impl FromHex for Tx {
    type Error = crate::Error;

    fn from_hex<T: AsRef<[u8]>>(hex: T) -> Result<Self, Self::Error> {
        let bytes = hex::decode(hex)?;
        Tx::from_binary_buf(bytes.as_slice())
    }
}

impl ToHex for Tx {
    fn encode_hex<T: FromIterator<char>>(&self) -> T {
        self.to_binary_buf().encode_hex()
    }

    fn encode_hex_upper<T: FromIterator<char>>(&self) -> T {
        self.to_binary_buf().encode_hex_upper()
    }
}

/// A builder for transactions.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct TxBuilder {
    version: u32,
    inputs: Vec<TxInput>,
    outputs: Vec<TxOutput>,
    lock_time: u32,
}

impl Default for TxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TxBuilder {
    pub fn new() -> TxBuilder {
        TxBuilder {
            version: 1,
            inputs: vec![],
            outputs: vec![],
            lock_time: 0,
        }
    }

    pub fn version(&mut self, version: u32) -> &mut TxBuilder {
        self.version = version;
        self
    }

    pub fn lock_time(&mut self, lock_time: u32) -> &mut TxBuilder {
        self.lock_time = lock_time;
        self
    }

    pub fn add_input(&mut self, input: &TxInput) -> &mut TxBuilder {
        self.inputs.push(input.clone());
        self
    }

    pub fn add_output(&mut self, output: &TxOutput) -> &mut TxBuilder {
        self.outputs.push(output.clone());
        self
    }

    pub fn build(&self) -> Tx {
        Tx {
            version: self.version,
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
            lock_time: self.lock_time,
        }
    }
}
