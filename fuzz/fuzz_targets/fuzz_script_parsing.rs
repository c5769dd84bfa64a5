#![no_main]

use btc::chain::{Encodable, Script};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(script) = Script::from_binary_buf(data) {
        let encoded = script.to_binary_buf();
        assert_eq!(encoded.len(), script.encoded_size());

        // A decoded script must survive its own wire form.
        let decoded = Script::from_binary_buf(&encoded).unwrap();
        assert_eq!(decoded, script);

        // If the input held exactly one script, the bytes round trip exactly.
        if data.len() == script.encoded_size() {
            assert_eq!(encoded, data);
        }
    }
});
