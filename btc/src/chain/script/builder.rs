use crate::chain::script::{Operation, Script};
use crate::chain::stream::ByteWriter;
use bytes::Bytes;

/// ScriptBuilder can be used to build [Script]s.
pub struct ScriptBuilder {
    /// the operations
    ops: Vec<Operation>,
}

impl ScriptBuilder {
    /// Create a new ScriptBuilder for constructing a [Script].
    pub fn new() -> ScriptBuilder {
        Self { ops: Vec::new() }
    }

    /// Add an operation to the script.
    pub fn add(&mut self, op: Operation) -> &mut ScriptBuilder {
        self.ops.push(op);
        self
    }

    /// Add a data push, choosing the minimal push form for the length.
    pub fn add_push(&mut self, data: Bytes) -> &mut ScriptBuilder {
        let op = match data.len() {
            0 => Operation::OP_0,
            1..=75 => Operation::OP_PUSH(data),
            76..=255 => Operation::OP_PUSHDATA1(data),
            256..=65535 => Operation::OP_PUSHDATA2(data),
            _ => Operation::OP_PUSHDATA4(data),
        };
        self.ops.push(op);
        self
    }

    /// Add a small integer (0 to 16) as its dedicated opcode.
    pub fn add_small_int(&mut self, n: u8) -> &mut ScriptBuilder {
        debug_assert!(n <= 16);
        let op = match n {
            0 => Operation::OP_0,
            _ => Operation::from_code(0x50 + n),
        };
        self.ops.push(op);
        self
    }

    /// Build the script.
    pub fn build(&self) -> Script {
        let mut writer = ByteWriter::with_capacity(
            self.ops.iter().map(Operation::encoded_size).sum::<usize>(),
        );
        for op in self.ops.iter() {
            op.to_binary(&mut writer);
        }
        Script::from_parts(Bytes::from(writer.into_vec()), self.ops.clone())
    }
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        ScriptBuilder::new()
    }
}
