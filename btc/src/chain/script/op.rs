use crate::chain::stream::ByteWriter;
use bytes::Bytes;

/// An Operation is an opcode plus relevant data.
///
/// Every byte value is representable: named opcodes decode to their variant,
/// unassigned bytes are retained in [OP_UNKNOWN] so that a decoded script
/// re-serializes to exactly the bytes it came from.
///
/// [OP_UNKNOWN]: Operation::OP_UNKNOWN
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)] // we want to keep the Bitcoin standard naming convention
pub enum Operation {
    /// Pushes the empty byte sequence onto the stack.
    OP_0,
    /// Pushes data onto the stack where the data must be 1-75 bytes long.
    OP_PUSH(Bytes),
    /// The next byte sets the number of bytes to push onto the stack
    OP_PUSHDATA1(Bytes),
    /// The next two bytes set the number of bytes to push onto the stack
    OP_PUSHDATA2(Bytes),
    /// The next four bytes set the number of bytes to push onto the stack
    OP_PUSHDATA4(Bytes),
    /// Pushes -1 onto the stack
    OP_1NEGATE,
    /// Pushes 1 onto the stack
    OP_1,
    /// Pushes 2 onto the stack
    OP_2,
    /// Pushes 3 onto the stack
    OP_3,
    /// Pushes 4 onto the stack
    OP_4,
    /// Pushes 5 onto the stack
    OP_5,
    /// Pushes 6 onto the stack
    OP_6,
    /// Pushes 7 onto the stack
    OP_7,
    /// Pushes 8 onto the stack
    OP_8,
    /// Pushes 9 onto the stack
    OP_9,
    /// Pushes 10 onto the stack
    OP_10,
    /// Pushes 11 onto the stack
    OP_11,
    /// Pushes 12 onto the stack
    OP_12,
    /// Pushes 13 onto the stack
    OP_13,
    /// Pushes 14 onto the stack
    OP_14,
    /// Pushes 15 onto the stack
    OP_15,
    /// Pushes 16 onto the stack
    OP_16,

    // --------------------------------------------------------------------------------------------
    // Flow Control
    // --------------------------------------------------------------------------------------------
    /// Does nothing
    OP_NOP,
    /// If the top stack is true, statements are executed. Top stack value is removed.
    OP_IF,
    /// If the top stack is false, statements are executed. Top stack value is removed.
    OP_NOTIF,
    /// If the preceding OP_IF or OP_NOTIF statements were not executed, then statements are executed.
    OP_ELSE,
    /// Ends an if-else block
    OP_ENDIF,
    /// Marks a statement as invalid if the top stack value is false. Top stack value is removed.
    OP_VERIFY,
    /// Marks the script as provably unspendable
    OP_RETURN,

    // --------------------------------------------------------------------------------------------
    // Stack
    // --------------------------------------------------------------------------------------------
    /// Moves the top item on the main stack to the alt stack
    OP_TOALTSTACK,
    /// Moves the top item on the alt stack to the main stack
    OP_FROMALTSTACK,
    /// Removes the top two items from the stack
    OP_2DROP,
    /// Duplicates the top two stack items
    OP_2DUP,
    /// Duplicates the top three stack items
    OP_3DUP,
    /// Copies the pair of items two spaces back to the front
    OP_2OVER,
    /// The fifth and sixth items back are moved to the top of the stack
    OP_2ROT,
    /// Swaps the top two pairs of items
    OP_2SWAP,
    /// Duplicates the top stack value if it is not zero
    OP_IFDUP,
    /// Puts the number of stack items onto the stack
    OP_DEPTH,
    /// Drops the top stack value
    OP_DROP,
    /// Duplicates the top stack item
    OP_DUP,
    /// Removes the second-to-top stack item
    OP_NIP,
    /// Copies the second-to-top stack item to the top
    OP_OVER,
    /// The item n back in the stack is copied to the top
    OP_PICK,
    /// The item n back in the stack is moved to the top
    OP_ROLL,
    /// The top three items on the stack are rotated to the left
    OP_ROT,
    /// The top two items on the stack are swapped
    OP_SWAP,
    /// The item at the top of the stack is copied and inserted before the second-to-top item
    OP_TUCK,

    // --------------------------------------------------------------------------------------------
    // Splice
    // --------------------------------------------------------------------------------------------
    /// Concatenates two byte sequences (disabled)
    OP_CAT,
    /// Returns a section of a byte sequence (disabled)
    OP_SUBSTR,
    /// Keeps only bytes left of the specified point (disabled)
    OP_LEFT,
    /// Keeps only bytes right of the specified point (disabled)
    OP_RIGHT,
    /// Pushes the byte sequence length of the top stack item without popping it
    OP_SIZE,

    // --------------------------------------------------------------------------------------------
    // Bitwise Logic
    // --------------------------------------------------------------------------------------------
    /// Flips all of the bits in the input (disabled)
    OP_INVERT,
    /// Boolean and between each bit in the inputs (disabled)
    OP_AND,
    /// Boolean or between each bit in the inputs (disabled)
    OP_OR,
    /// Boolean exclusive or between each bit in the inputs (disabled)
    OP_XOR,
    /// Returns 1 if the inputs are exactly equal, 0 otherwise
    OP_EQUAL,
    /// Same as OP_EQUAL, but runs OP_VERIFY afterward
    OP_EQUALVERIFY,

    // --------------------------------------------------------------------------------------------
    // Arithmetic
    // --------------------------------------------------------------------------------------------
    /// Adds 1 to the input
    OP_1ADD,
    /// Subtracts 1 from the input
    OP_1SUB,
    /// The input is multiplied by 2 (disabled)
    OP_2MUL,
    /// The input is divided by 2 (disabled)
    OP_2DIV,
    /// The sign of the input is flipped
    OP_NEGATE,
    /// The input is made positive
    OP_ABS,
    /// If the input is 0 or 1, it is flipped. Otherwise, the output will be 0.
    OP_NOT,
    /// Returns 0 if the input is 0. 1 otherwise.
    OP_0NOTEQUAL,
    /// Adds a to b
    OP_ADD,
    /// Subtracts b from a
    OP_SUB,
    /// Multiplies a by b (disabled)
    OP_MUL,
    /// Divides a by b (disabled)
    OP_DIV,
    /// Returns the remainder after dividing a by b (disabled)
    OP_MOD,
    /// Shifts a left b bits (disabled)
    OP_LSHIFT,
    /// Shifts a right b bits (disabled)
    OP_RSHIFT,
    /// If both a and b are not empty, the output is 1. Otherwise, 0.
    OP_BOOLAND,
    /// If a or b is not empty, the output is 1. Otherwise, 0.
    OP_BOOLOR,
    /// Returns 1 if the numbers are equal. Otherwise, 0.
    OP_NUMEQUAL,
    /// Same as OP_NUMEQUAL, but runs OP_VERIFY afterward
    OP_NUMEQUALVERIFY,
    /// Returns 1 if the numbers are not equal. Otherwise, 0.
    OP_NUMNOTEQUAL,
    /// Returns 1 if a is less than b. Otherwise, 0.
    OP_LESSTHAN,
    /// Returns 1 if a is greater than b. Otherwise, 0.
    OP_GREATERTHAN,
    /// Returns 1 if a is less than or equal to b. Otherwise, 0.
    OP_LESSTHANOREQUAL,
    /// Returns 1 if a is greater than or equal to b. Otherwise, 0.
    OP_GREATERTHANOREQUAL,
    /// Returns the smaller of a and b
    OP_MIN,
    /// Returns the larger of a and b
    OP_MAX,
    /// Returns 1 if x is within the specified range, left inclusive. Otherwise, 0.
    OP_WITHIN,

    // --------------------------------------------------------------------------------------------
    // Cryptography
    // --------------------------------------------------------------------------------------------
    /// The input is hashed using RIPEMD-160
    OP_RIPEMD160,
    /// The input is hashed using SHA-1
    OP_SHA1,
    /// The input is hashed using SHA-256
    OP_SHA256,
    /// The input is hashed twice: first with SHA-256 and then with RIPEMD-160
    OP_HASH160,
    /// The input is hashed two times with SHA-256
    OP_HASH256,
    /// Marks the part of the script after which the signature will begin matching
    OP_CODESEPARATOR,
    /// Puts 1 on the stack if the signature authorizes the public key and transaction hash. Otherwise 0.
    OP_CHECKSIG,
    /// Same as OP_CHECKSIG, but OP_VERIFY is executed afterward
    OP_CHECKSIGVERIFY,
    /// Puts 1 on the stack if m of n signatures authorize the public key and transaction hash. Otherwise 0.
    OP_CHECKMULTISIG,
    /// Same as OP_CHECKMULTISIG, but OP_VERIFY is executed afterward
    OP_CHECKMULTISIGVERIFY,

    // --------------------------------------------------------------------------------------------
    // Locktime
    // --------------------------------------------------------------------------------------------
    /// Marks transaction as invalid if the top stack item is greater than the transaction's lock_time
    OP_CHECKLOCKTIMEVERIFY,
    /// Marks transaction as invalid if the top stack item is less than the transaction's sequence used for relative lock time
    OP_CHECKSEQUENCEVERIFY,

    // --------------------------------------------------------------------------------------------
    // Reserved words
    // --------------------------------------------------------------------------------------------
    /// Transaction is invalid unless occurring in an unexecuted OP_IF branch
    OP_RESERVED,
    /// Transaction is invalid unless occurring in an unexecuted OP_IF branch
    OP_VER,
    /// Transaction is invalid even when occurring in an unexecuted OP_IF branch
    OP_VERIF,
    /// Transaction is invalid even when occurring in an unexecuted OP_IF branch
    OP_VERNOTIF,
    /// Transaction is invalid unless occurring in an unexecuted OP_IF branch
    OP_RESERVED1,
    /// Transaction is invalid unless occurring in an unexecuted OP_IF branch
    OP_RESERVED2,
    /// The word is ignored. Does not mark transaction as invalid.
    OP_NOP1,
    /// The word is ignored. Does not mark transaction as invalid.
    OP_NOP4,
    /// The word is ignored. Does not mark transaction as invalid.
    OP_NOP5,
    /// The word is ignored. Does not mark transaction as invalid.
    OP_NOP6,
    /// The word is ignored. Does not mark transaction as invalid.
    OP_NOP7,
    /// The word is ignored. Does not mark transaction as invalid.
    OP_NOP8,
    /// The word is ignored. Does not mark transaction as invalid.
    OP_NOP9,
    /// The word is ignored. Does not mark transaction as invalid.
    OP_NOP10,

    // --------------------------------------------------------------------------------------------
    // Pseudo-words
    // --------------------------------------------------------------------------------------------
    /// Represents a public key hashed with OP_HASH160
    OP_PUBKEYHASH,
    /// Represents a public key compatible with OP_CHECKSIG
    OP_PUBKEY,
    /// Matches the highest opcode value
    OP_INVALIDOPCODE,

    /// An opcode byte with no assigned word. Retained for bit-exact re-serialization.
    OP_UNKNOWN(u8),
}

impl Operation {
    /// The opcode byte of this operation.
    pub fn code(&self) -> u8 {
        use Operation::*;
        match self {
            OP_0 => 0x00,
            OP_PUSH(data) => data.len() as u8,
            OP_PUSHDATA1(_) => 0x4c,
            OP_PUSHDATA2(_) => 0x4d,
            OP_PUSHDATA4(_) => 0x4e,
            OP_1NEGATE => 0x4f,
            OP_RESERVED => 0x50,
            OP_1 => 0x51,
            OP_2 => 0x52,
            OP_3 => 0x53,
            OP_4 => 0x54,
            OP_5 => 0x55,
            OP_6 => 0x56,
            OP_7 => 0x57,
            OP_8 => 0x58,
            OP_9 => 0x59,
            OP_10 => 0x5a,
            OP_11 => 0x5b,
            OP_12 => 0x5c,
            OP_13 => 0x5d,
            OP_14 => 0x5e,
            OP_15 => 0x5f,
            OP_16 => 0x60,
            OP_NOP => 0x61,
            OP_VER => 0x62,
            OP_IF => 0x63,
            OP_NOTIF => 0x64,
            OP_VERIF => 0x65,
            OP_VERNOTIF => 0x66,
            OP_ELSE => 0x67,
            OP_ENDIF => 0x68,
            OP_VERIFY => 0x69,
            OP_RETURN => 0x6a,
            OP_TOALTSTACK => 0x6b,
            OP_FROMALTSTACK => 0x6c,
            OP_2DROP => 0x6d,
            OP_2DUP => 0x6e,
            OP_3DUP => 0x6f,
            OP_2OVER => 0x70,
            OP_2ROT => 0x71,
            OP_2SWAP => 0x72,
            OP_IFDUP => 0x73,
            OP_DEPTH => 0x74,
            OP_DROP => 0x75,
            OP_DUP => 0x76,
            OP_NIP => 0x77,
            OP_OVER => 0x78,
            OP_PICK => 0x79,
            OP_ROLL => 0x7a,
            OP_ROT => 0x7b,
            OP_SWAP => 0x7c,
            OP_TUCK => 0x7d,
            OP_CAT => 0x7e,
            OP_SUBSTR => 0x7f,
            OP_LEFT => 0x80,
            OP_RIGHT => 0x81,
            OP_SIZE => 0x82,
            OP_INVERT => 0x83,
            OP_AND => 0x84,
            OP_OR => 0x85,
            OP_XOR => 0x86,
            OP_EQUAL => 0x87,
            OP_EQUALVERIFY => 0x88,
            OP_RESERVED1 => 0x89,
            OP_RESERVED2 => 0x8a,
            OP_1ADD => 0x8b,
            OP_1SUB => 0x8c,
            OP_2MUL => 0x8d,
            OP_2DIV => 0x8e,
            OP_NEGATE => 0x8f,
            OP_ABS => 0x90,
            OP_NOT => 0x91,
            OP_0NOTEQUAL => 0x92,
            OP_ADD => 0x93,
            OP_SUB => 0x94,
            OP_MUL => 0x95,
            OP_DIV => 0x96,
            OP_MOD => 0x97,
            OP_LSHIFT => 0x98,
            OP_RSHIFT => 0x99,
            OP_BOOLAND => 0x9a,
            OP_BOOLOR => 0x9b,
            OP_NUMEQUAL => 0x9c,
            OP_NUMEQUALVERIFY => 0x9d,
            OP_NUMNOTEQUAL => 0x9e,
            OP_LESSTHAN => 0x9f,
            OP_GREATERTHAN => 0xa0,
            OP_LESSTHANOREQUAL => 0xa1,
            OP_GREATERTHANOREQUAL => 0xa2,
            OP_MIN => 0xa3,
            OP_MAX => 0xa4,
            OP_WITHIN => 0xa5,
            OP_RIPEMD160 => 0xa6,
            OP_SHA1 => 0xa7,
            OP_SHA256 => 0xa8,
            OP_HASH160 => 0xa9,
            OP_HASH256 => 0xaa,
            OP_CODESEPARATOR => 0xab,
            OP_CHECKSIG => 0xac,
            OP_CHECKSIGVERIFY => 0xad,
            OP_CHECKMULTISIG => 0xae,
            OP_CHECKMULTISIGVERIFY => 0xaf,
            OP_NOP1 => 0xb0,
            OP_CHECKLOCKTIMEVERIFY => 0xb1,
            OP_CHECKSEQUENCEVERIFY => 0xb2,
            OP_NOP4 => 0xb3,
            OP_NOP5 => 0xb4,
            OP_NOP6 => 0xb5,
            OP_NOP7 => 0xb6,
            OP_NOP8 => 0xb7,
            OP_NOP9 => 0xb8,
            OP_NOP10 => 0xb9,
            OP_PUBKEYHASH => 0xfd,
            OP_PUBKEY => 0xfe,
            OP_INVALIDOPCODE => 0xff,
            OP_UNKNOWN(code) => *code,
        }
    }

    /// The operation for a non-push opcode byte (0x4f and above).
    pub fn from_code(code: u8) -> Operation {
        use Operation::*;
        match code {
            0x4f => OP_1NEGATE,
            0x50 => OP_RESERVED,
            0x51 => OP_1,
            0x52 => OP_2,
            0x53 => OP_3,
            0x54 => OP_4,
            0x55 => OP_5,
            0x56 => OP_6,
            0x57 => OP_7,
            0x58 => OP_8,
            0x59 => OP_9,
            0x5a => OP_10,
            0x5b => OP_11,
            0x5c => OP_12,
            0x5d => OP_13,
            0x5e => OP_14,
            0x5f => OP_15,
            0x60 => OP_16,
            0x61 => OP_NOP,
            0x62 => OP_VER,
            0x63 => OP_IF,
            0x64 => OP_NOTIF,
            0x65 => OP_VERIF,
            0x66 => OP_VERNOTIF,
            0x67 => OP_ELSE,
            0x68 => OP_ENDIF,
            0x69 => OP_VERIFY,
            0x6a => OP_RETURN,
            0x6b => OP_TOALTSTACK,
            0x6c => OP_FROMALTSTACK,
            0x6d => OP_2DROP,
            0x6e => OP_2DUP,
            0x6f => OP_3DUP,
            0x70 => OP_2OVER,
            0x71 => OP_2ROT,
            0x72 => OP_2SWAP,
            0x73 => OP_IFDUP,
            0x74 => OP_DEPTH,
            0x75 => OP_DROP,
            0x76 => OP_DUP,
            0x77 => OP_NIP,
            0x78 => OP_OVER,
            0x79 => OP_PICK,
            0x7a => OP_ROLL,
            0x7b => OP_ROT,
            0x7c => OP_SWAP,
            0x7d => OP_TUCK,
            0x7e => OP_CAT,
            0x7f => OP_SUBSTR,
            0x80 => OP_LEFT,
            0x81 => OP_RIGHT,
            0x82 => OP_SIZE,
            0x83 => OP_INVERT,
            0x84 => OP_AND,
            0x85 => OP_OR,
            0x86 => OP_XOR,
            0x87 => OP_EQUAL,
            0x88 => OP_EQUALVERIFY,
            0x89 => OP_RESERVED1,
            0x8a => OP_RESERVED2,
            0x8b => OP_1ADD,
            0x8c => OP_1SUB,
            0x8d => OP_2MUL,
            0x8e => OP_2DIV,
            0x8f => OP_NEGATE,
            0x90 => OP_ABS,
            0x91 => OP_NOT,
            0x92 => OP_0NOTEQUAL,
            0x93 => OP_ADD,
            0x94 => OP_SUB,
            0x95 => OP_MUL,
            0x96 => OP_DIV,
            0x97 => OP_MOD,
            0x98 => OP_LSHIFT,
            0x99 => OP_RSHIFT,
            0x9a => OP_BOOLAND,
            0x9b => OP_BOOLOR,
            0x9c => OP_NUMEQUAL,
            0x9d => OP_NUMEQUALVERIFY,
            0x9e => OP_NUMNOTEQUAL,
            0x9f => OP_LESSTHAN,
            0xa0 => OP_GREATERTHAN,
            0xa1 => OP_LESSTHANOREQUAL,
            0xa2 => OP_GREATERTHANOREQUAL,
            0xa3 => OP_MIN,
            0xa4 => OP_MAX,
            0xa5 => OP_WITHIN,
            0xa6 => OP_RIPEMD160,
            0xa7 => OP_SHA1,
            0xa8 => OP_SHA256,
            0xa9 => OP_HASH160,
            0xaa => OP_HASH256,
            0xab => OP_CODESEPARATOR,
            0xac => OP_CHECKSIG,
            0xad => OP_CHECKSIGVERIFY,
            0xae => OP_CHECKMULTISIG,
            0xaf => OP_CHECKMULTISIGVERIFY,
            0xb0 => OP_NOP1,
            0xb1 => OP_CHECKLOCKTIMEVERIFY,
            0xb2 => OP_CHECKSEQUENCEVERIFY,
            0xb3 => OP_NOP4,
            0xb4 => OP_NOP5,
            0xb5 => OP_NOP6,
            0xb6 => OP_NOP7,
            0xb7 => OP_NOP8,
            0xb8 => OP_NOP9,
            0xb9 => OP_NOP10,
            0xfd => OP_PUBKEYHASH,
            0xfe => OP_PUBKEY,
            0xff => OP_INVALIDOPCODE,
            other => OP_UNKNOWN(other),
        }
    }

    /// The inline data payload of a push-data operation.
    pub fn data(&self) -> Option<&Bytes> {
        match self {
            Operation::OP_PUSH(data)
            | Operation::OP_PUSHDATA1(data)
            | Operation::OP_PUSHDATA2(data)
            | Operation::OP_PUSHDATA4(data) => Some(data),
            _ => None,
        }
    }

    /// The small integer an OP_0..OP_16 opcode stands for.
    pub fn small_int(&self) -> Option<u8> {
        let code = self.code();
        match code {
            0x00 => {
                if matches!(self, Operation::OP_0) {
                    Some(0)
                } else {
                    None
                }
            }
            0x51..=0x60 => Some(code - 0x50),
            _ => None,
        }
    }

    /// Write the operation in its wire form.
    pub fn to_binary(&self, writer: &mut ByteWriter) {
        match self {
            Operation::OP_PUSH(data) => {
                writer.write_u8(data.len() as u8);
                writer.write_bytes(data);
            }
            Operation::OP_PUSHDATA1(data) => {
                writer.write_u8(0x4c);
                writer.write_u8(data.len() as u8);
                writer.write_bytes(data);
            }
            Operation::OP_PUSHDATA2(data) => {
                writer.write_u8(0x4d);
                writer.write_u16(data.len() as u16);
                writer.write_bytes(data);
            }
            Operation::OP_PUSHDATA4(data) => {
                writer.write_u8(0x4e);
                writer.write_u32(data.len() as u32);
                writer.write_bytes(data);
            }
            other => writer.write_u8(other.code()),
        }
    }

    /// Size of the wire form.
    pub fn encoded_size(&self) -> usize {
        match self {
            Operation::OP_PUSH(data) => data.len() + 1,
            Operation::OP_PUSHDATA1(data) => data.len() + 2,
            Operation::OP_PUSHDATA2(data) => data.len() + 3,
            Operation::OP_PUSHDATA4(data) => data.len() + 5,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::stream::ByteWriter;

    #[test]
    fn codes_round_trip() {
        // Every non-push byte maps to an operation and back to the same byte.
        for code in 0x4fu8..=0xff {
            let op = Operation::from_code(code);
            assert_eq!(op.code(), code, "code 0x{:02x}", code);
        }
    }

    #[test]
    fn unknown_codes_are_retained() {
        assert_eq!(Operation::from_code(0xba), Operation::OP_UNKNOWN(0xba));
        assert_eq!(Operation::from_code(0xfc), Operation::OP_UNKNOWN(0xfc));
        assert!(matches!(Operation::from_code(0xac), Operation::OP_CHECKSIG));
    }

    #[test]
    fn small_ints() {
        assert_eq!(Operation::OP_0.small_int(), Some(0));
        assert_eq!(Operation::OP_1.small_int(), Some(1));
        assert_eq!(Operation::OP_16.small_int(), Some(16));
        assert_eq!(Operation::OP_DUP.small_int(), None);
        assert_eq!(
            Operation::OP_PUSH(bytes::Bytes::from_static(&[1])).small_int(),
            None
        );
    }

    #[test]
    fn push_encoding() {
        let mut w = ByteWriter::new();
        Operation::OP_PUSH(bytes::Bytes::from_static(&[0xaa, 0xbb])).to_binary(&mut w);
        assert_eq!(w.into_vec(), vec![0x02, 0xaa, 0xbb]);

        let mut w = ByteWriter::new();
        Operation::OP_PUSHDATA1(bytes::Bytes::from_static(&[0xcc])).to_binary(&mut w);
        assert_eq!(w.into_vec(), vec![0x4c, 0x01, 0xcc]);

        let mut w = ByteWriter::new();
        Operation::OP_PUSHDATA2(bytes::Bytes::from_static(&[0xdd])).to_binary(&mut w);
        assert_eq!(w.into_vec(), vec![0x4d, 0x01, 0x00, 0xdd]);

        let mut w = ByteWriter::new();
        Operation::OP_PUSHDATA4(bytes::Bytes::from_static(&[0xee])).to_binary(&mut w);
        assert_eq!(w.into_vec(), vec![0x4e, 0x01, 0x00, 0x00, 0x00, 0xee]);
    }

    #[test]
    fn encoded_sizes() {
        assert_eq!(Operation::OP_0.encoded_size(), 1);
        assert_eq!(Operation::OP_CHECKSIG.encoded_size(), 1);
        assert_eq!(
            Operation::OP_PUSH(bytes::Bytes::from_static(&[0u8; 20])).encoded_size(),
            21
        );
        assert_eq!(
            Operation::OP_PUSHDATA1(bytes::Bytes::from_static(&[0u8; 76])).encoded_size(),
            78
        );
    }
}
