#![no_main]

use fatoora::qr::{build_qr_payload, decode_qr_payload};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Decode → encode → decode must not panic. Amounts are normalized to two
        // decimals on the first re-encode, after which the payload is stable.
        if let Ok(fields) = decode_qr_payload(s) {
            if let Ok(payload) = build_qr_payload(&fields) {
                let normalized = decode_qr_payload(&payload).expect("re-encoded payload decodes");
                let again = build_qr_payload(&normalized).expect("normalized fields encode");
                assert_eq!(again, payload);
            }
        }
    }
});
