//! Consensus rule values for the chain object model.
//!
//! These are the values that participate in structural checks at this layer:
//! size and weight caps enforced during decode, signature operation
//! accounting factors, and the magic values of the segregated witness
//! commitment (BIP141). Script execution limits beyond these belong to the
//! validation engine.

/// Maximum size of a script in bytes. Larger scripts are provably
/// unspendable and are rejected by the wire decoder.
pub const MAX_SCRIPT_SIZE: usize = 10_000;

/// Maximum weight of a transaction or block in weight units (BIP141).
pub const MAX_BLOCK_WEIGHT: usize = 4_000_000;

/// Weight of one base-size byte relative to one total-size byte (BIP141).
/// Also the quadratic penalty factor applied to legacy signature operations.
pub const WITNESS_SCALE_FACTOR: usize = 4;

/// Sigops counted for a CHECKMULTISIG when the key count is not known.
pub const MULTISIG_DEFAULT_SIGOPS: usize = 20;

/// Maximum data payload of a null-data (OP_RETURN) output script.
pub const MAX_NULL_DATA_SIZE: usize = 80;

/// The four magic bytes that open a witness commitment push (BIP141).
pub const WITNESS_COMMITMENT_HEAD: [u8; 4] = [0xaa, 0x21, 0xa9, 0xed];

/// Size of a witness commitment push: the magic head plus a hash.
pub const WITNESS_COMMITMENT_SIZE: usize = 36;

/// Size of the witness reserved value carried in the coinbase witness.
pub const WITNESS_RESERVED_VALUE_SIZE: usize = 32;

/// Bounds on the byte length of a witness program (BIP141).
pub const MIN_WITNESS_PROGRAM_SIZE: usize = 2;
pub const MAX_WITNESS_PROGRAM_SIZE: usize = 40;

/// The outpoint index that marks a coinbase input.
pub const COINBASE_INDEX: u32 = 0xffff_ffff;

/// The sentinel value of an output that could not be located. Used as the
/// prevout placeholder during signature hashing.
pub const OUTPUT_NOT_FOUND: u64 = u64::MAX;

/// Total number of satoshis that can ever exist.
pub const MAX_MONEY: u64 = 21_000_000 * 100_000_000;

/// Serialized size floor of a transaction input: outpoint, empty script, sequence.
pub(crate) const MIN_INPUT_SIZE: usize = 36 + 1 + 4;

/// Serialized size floor of a transaction output: value and an empty script.
pub(crate) const MIN_OUTPUT_SIZE: usize = 8 + 1;

/// Serialized size floor of a transaction: version, empty lists, lock time.
pub(crate) const MIN_TX_SIZE: usize = 4 + 1 + 1 + 4;
