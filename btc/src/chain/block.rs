use crate::chain::header::{BlockHash, BlockHeader, MerkleRoot};
use crate::chain::merkle::calculate_merkle_root;
use crate::chain::rules::{MAX_BLOCK_WEIGHT, MIN_TX_SIZE, WITNESS_RESERVED_VALUE_SIZE,
    WITNESS_SCALE_FACTOR};
use crate::chain::stream::{ByteReader, ByteWriter};
use crate::chain::tx::Tx;
use crate::chain::var_int::{varint_decode, varint_encode, varint_size};
use crate::chain::{Encodable, Hash};
use serde::{Deserialize, Serialize};

/// Contains a full block from the blockchain.
///
/// The block owns its transactions. Its invariant is structural: the first
/// transaction must be a coinbase and no other transaction may be one.
#[derive(Default, PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Tx>,
}

impl Block {
    pub fn new(header: BlockHeader, transactions: Vec<Tx>) -> Block {
        Block {
            header,
            transactions,
        }
    }

    /// The hash of the block header.
    pub fn block_hash(&self) -> BlockHash {
        self.header.hash()
    }

    /// Structural validity: a non-empty transaction list opening with the
    /// coinbase and containing no other coinbase.
    pub fn is_valid(&self) -> bool {
        match self.transactions.split_first() {
            None => false,
            Some((first, rest)) => {
                first.is_coinbase() && rest.iter().all(|tx| !tx.is_coinbase())
            }
        }
    }

    /// True when any transaction carries witness data.
    pub fn is_segwit(&self) -> bool {
        self.transactions.iter().any(Tx::is_segwit)
    }

    /// The merkle root over the transaction identifiers.
    pub fn merkle_root(&self) -> MerkleRoot {
        let txids: Vec<Hash> = self.transactions.iter().map(Tx::txid).collect();
        calculate_merkle_root(&txids)
    }

    /// The merkle root over the witness transaction identifiers (BIP141).
    /// The coinbase contributes a zero leaf.
    pub fn witness_root(&self) -> MerkleRoot {
        if self.transactions.is_empty() {
            return Hash::ZERO;
        }
        let mut leaves = Vec::with_capacity(self.transactions.len());
        leaves.push(Hash::ZERO);
        for tx in self.transactions.iter().skip(1) {
            leaves.push(tx.wtxid());
        }
        calculate_merkle_root(&leaves)
    }

    /// The witness reserved value: the single 32-byte element of the
    /// coinbase witness, or all zeros when absent.
    pub fn witness_reserved_value(&self) -> Hash {
        let Some(coinbase) = self.transactions.first() else {
            return Hash::ZERO;
        };
        let Some(input) = coinbase.inputs.first() else {
            return Hash::ZERO;
        };
        match input.witness.elements() {
            [element] if element.len() == WITNESS_RESERVED_VALUE_SIZE => {
                Hash::from_slice(element)
            }
            _ => Hash::ZERO,
        }
    }

    /// The witness commitment hash carried by the coinbase, if any. When
    /// several outputs match the commitment pattern the last one counts.
    pub fn witness_commitment(&self) -> Option<Hash> {
        let coinbase = self.transactions.first()?;
        coinbase
            .outputs
            .iter()
            .rev()
            .find_map(|output| output.committed_hash())
    }

    /// Check the witness commitment (BIP141).
    ///
    /// A segwit block must commit to its witness merkle root: the coinbase
    /// carries an output whose committed hash equals the double SHA256 of
    /// the witness root concatenated with the reserved value. A block
    /// without witness data need not carry a commitment.
    pub fn verify_witness_commitment(&self) -> bool {
        if !self.is_segwit() {
            return true;
        }
        let Some(commitment) = self.witness_commitment() else {
            return false;
        };
        let root = self.witness_root();
        let reserved = self.witness_reserved_value();
        let mut data = [0u8; 64];
        data[..32].copy_from_slice(&root.raw);
        data[32..].copy_from_slice(&reserved.raw);
        Hash::sha256d(&data) == commitment
    }

    /// The size of the block with witnesses stripped.
    pub fn base_size(&self) -> usize {
        let mut size = BlockHeader::SIZE + varint_size(self.transactions.len() as u64);
        for tx in self.transactions.iter() {
            size += tx.base_size();
        }
        size
    }

    /// The weight of the block in weight units (BIP141).
    pub fn weight(&self) -> usize {
        self.base_size() * (WITNESS_SCALE_FACTOR - 1) + self.encoded_size()
    }
}

impl Encodable for Block {
    fn from_binary(reader: &mut ByteReader) -> Self {
        let header = BlockHeader::from_binary(reader);
        let tx_count = varint_decode(reader);
        if tx_count > (reader.remaining() / MIN_TX_SIZE) as u64 {
            reader.invalidate();
            return Block::default();
        }
        let mut transactions = Vec::with_capacity(tx_count as usize);
        for _ in 0..tx_count {
            transactions.push(Tx::from_binary(reader));
            if !reader.is_valid() {
                return Block::default();
            }
        }
        let block = Block {
            header,
            transactions,
        };
        if block.weight() > MAX_BLOCK_WEIGHT {
            reader.invalidate();
            return Block::default();
        }
        block
    }

    fn to_binary(&self, writer: &mut ByteWriter) {
        self.header.to_binary(writer);
        varint_encode(writer, self.transactions.len() as u64);
        for tx in self.transactions.iter() {
            tx.to_binary(writer);
        }
    }

    fn encoded_size(&self) -> usize {
        let mut size = BlockHeader::SIZE + varint_size(self.transactions.len() as u64);
        for tx in self.transactions.iter() {
            size += tx.encoded_size();
        }
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::rules::WITNESS_COMMITMENT_HEAD;
    use crate::chain::{
        Operation, Script, ScriptBuilder, TxBuilder, TxInput, TxOutput,
    };
    use bytes::Bytes;
    use hex::{FromHex, ToHex};

    // The mainnet genesis block.
    const GENESIS_HEX: &str = "0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a29ab5f49ffff001d1dac2b7c01010000000100000000000000000000000000000000000000000000000000000000000000000000000000ffffffff4d04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73ffffffff0100f2052a01000000434104678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5fac00000000";

    #[test]
    fn genesis_block() {
        let bytes = hex::decode(GENESIS_HEX).unwrap();
        let block = Block::from_binary_buf(&bytes).unwrap();
        assert_eq!(
            block.block_hash().encode_hex::<String>(),
            "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
        );
        assert_eq!(block.transactions.len(), 1);
        assert!(block.transactions[0].is_coinbase());
        assert!(block.is_valid());
        assert!(!block.is_segwit());

        // The coinbase txid is the merkle root of the block.
        assert_eq!(block.merkle_root(), block.header.merkle_root);
        assert_eq!(
            block.transactions[0].txid(),
            Hash::from_hex("4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b")
                .unwrap()
        );

        // Byte-exact round trip.
        assert_eq!(block.to_binary_buf(), bytes);
        assert_eq!(block.encoded_size(), bytes.len());

        // A non-segwit block needs no commitment.
        assert!(block.verify_witness_commitment());
        assert_eq!(block.weight(), bytes.len() * 4);
    }

    fn p2pkh_script() -> Script {
        Script::from_hex("76a91462e907b15cbf27d5425399ebf6f0fb50ebb88f1888ac").unwrap()
    }

    fn segwit_spend() -> Tx {
        let mut input = TxInput::new(Hash::sha256d(b"spent output"), 0, Script::default(), None);
        input.witness.push(Bytes::from_static(&[0x01; 72]));
        TxBuilder::new()
            .add_input(&input)
            .add_output(&TxOutput::new(5000, p2pkh_script()))
            .build()
    }

    // A coinbase committing to the witness root of the given transactions.
    fn coinbase_with_commitment(rest: &[Tx], reserved: [u8; 32]) -> Tx {
        let mut leaves = vec![Hash::ZERO];
        leaves.extend(rest.iter().map(Tx::wtxid));
        let witness_root = calculate_merkle_root(&leaves);
        let mut data = [0u8; 64];
        data[..32].copy_from_slice(&witness_root.raw);
        data[32..].copy_from_slice(&reserved);
        let commitment = Hash::sha256d(&data);

        let mut payload = Vec::from(WITNESS_COMMITMENT_HEAD);
        payload.extend_from_slice(&commitment.raw);
        let commitment_script = ScriptBuilder::new()
            .add(Operation::OP_RETURN)
            .add_push(Bytes::from(payload))
            .build();

        let mut input = TxInput::new(Hash::ZERO, u32::MAX, Script::default(), None);
        input.witness.push(Bytes::copy_from_slice(&reserved));
        TxBuilder::new()
            .add_input(&input)
            .add_output(&TxOutput::new(50_0000_0000, p2pkh_script()))
            .add_output(&TxOutput::new(0, commitment_script))
            .build()
    }

    #[test]
    fn witness_commitment_verifies() {
        let spend = segwit_spend();
        let coinbase = coinbase_with_commitment(std::slice::from_ref(&spend), [0u8; 32]);
        let block = Block::new(BlockHeader::default(), vec![coinbase, spend]);
        assert!(block.is_segwit());
        assert!(block.is_valid());
        assert_eq!(block.witness_reserved_value(), Hash::ZERO);
        assert!(block.witness_commitment().is_some());
        assert!(block.verify_witness_commitment());
    }

    #[test]
    fn witness_commitment_uses_reserved_value() {
        let spend = segwit_spend();
        let reserved = [0xa5u8; 32];
        let coinbase = coinbase_with_commitment(std::slice::from_ref(&spend), reserved);
        let block = Block::new(BlockHeader::default(), vec![coinbase, spend]);
        assert_eq!(block.witness_reserved_value(), Hash::from(reserved));
        assert!(block.verify_witness_commitment());
    }

    #[test]
    fn tampered_witness_fails_commitment() {
        let spend = segwit_spend();
        let coinbase = coinbase_with_commitment(std::slice::from_ref(&spend), [0u8; 32]);
        let mut tampered = spend.clone();
        tampered.inputs[0].witness = crate::chain::Witness::from_elements(vec![
            Bytes::from_static(&[0x02; 72]),
        ]);
        let block = Block::new(BlockHeader::default(), vec![coinbase, tampered]);
        assert!(!block.verify_witness_commitment());
    }

    #[test]
    fn segwit_block_without_commitment_fails() {
        let spend = segwit_spend();
        let coinbase = TxBuilder::new()
            .add_input(&TxInput::new(Hash::ZERO, u32::MAX, Script::default(), None))
            .add_output(&TxOutput::new(50_0000_0000, p2pkh_script()))
            .build();
        let block = Block::new(BlockHeader::default(), vec![coinbase, spend]);
        assert!(block.is_segwit());
        assert!(block.witness_commitment().is_none());
        assert!(!block.verify_witness_commitment());
    }

    /// When several outputs match the commitment pattern, the last wins.
    #[test]
    fn last_commitment_output_counts() {
        let spend = segwit_spend();
        let mut coinbase = coinbase_with_commitment(std::slice::from_ref(&spend), [0u8; 32]);
        let real = coinbase.outputs[1].clone();

        // prepend a bogus commitment output before the real one
        let mut payload = Vec::from(WITNESS_COMMITMENT_HEAD);
        payload.extend_from_slice(&[0xee; 32]);
        let bogus_script = ScriptBuilder::new()
            .add(Operation::OP_RETURN)
            .add_push(Bytes::from(payload))
            .build();
        coinbase.outputs = vec![
            coinbase.outputs[0].clone(),
            TxOutput::new(0, bogus_script),
            real.clone(),
        ];

        let block = Block::new(BlockHeader::default(), vec![coinbase, spend]);
        assert_eq!(block.witness_commitment(), real.committed_hash());
        assert!(block.verify_witness_commitment());
    }

    #[test]
    fn coinbase_placement() {
        let spend = TxBuilder::new()
            .add_input(&TxInput::new(Hash::sha256d(b"x"), 0, Script::default(), None))
            .add_output(&TxOutput::new(10, p2pkh_script()))
            .build();
        let coinbase = TxBuilder::new()
            .add_input(&TxInput::new(Hash::ZERO, u32::MAX, Script::default(), None))
            .add_output(&TxOutput::new(50, p2pkh_script()))
            .build();

        // first transaction must be the coinbase
        let block = Block::new(BlockHeader::default(), vec![spend.clone(), coinbase.clone()]);
        assert!(!block.is_valid());

        // no second coinbase allowed
        let block = Block::new(
            BlockHeader::default(),
            vec![coinbase.clone(), coinbase.clone()],
        );
        assert!(!block.is_valid());

        // empty block is not valid
        let block = Block::new(BlockHeader::default(), vec![]);
        assert!(!block.is_valid());

        let block = Block::new(BlockHeader::default(), vec![coinbase, spend]);
        assert!(block.is_valid());
    }

    /// Segwit blocks round trip through their byte form.
    #[test]
    fn segwit_block_round_trip() {
        let spend = segwit_spend();
        let coinbase = coinbase_with_commitment(std::slice::from_ref(&spend), [0u8; 32]);
        let block = Block::new(BlockHeader::default(), vec![coinbase, spend]);
        let bytes = block.to_binary_buf();
        assert_eq!(bytes.len(), block.encoded_size());
        let decoded = Block::from_binary_buf(&bytes).unwrap();
        assert_eq!(decoded, block);
        assert!(decoded.verify_witness_commitment());
    }

    /// An absurd transaction count is rejected before any allocation.
    #[test]
    fn absurd_tx_count_rejected() {
        let mut bytes = BlockHeader::default().to_binary_buf();
        bytes.extend_from_slice(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
        assert!(Block::from_binary_buf(&bytes).is_err());
    }
}
