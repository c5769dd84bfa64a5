#![no_main]

use btc::chain::{Encodable, Tx};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(tx) = Tx::from_binary_buf(data) {
        let encoded = tx.to_binary_buf();
        assert_eq!(encoded.len(), tx.encoded_size());

        let decoded = Tx::from_binary_buf(&encoded).unwrap();
        assert_eq!(decoded, tx);
        assert_eq!(decoded.txid(), tx.txid());
        assert_eq!(decoded.wtxid(), tx.wtxid());

        if data.len() == tx.encoded_size() {
            assert_eq!(encoded, data);
        }
    }
});
