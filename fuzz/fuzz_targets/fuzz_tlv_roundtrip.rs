#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&tag, value)) = data.split_first() else {
        return;
    };
    let encoded = fatoora::tlv::encode_tlv(tag, value).expect("fuzz input fits the TLV limit");
    let records = fatoora::tlv::decode_tlv(&encoded).expect("encoded record decodes");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].tag, tag);
    assert_eq!(records[0].value, value);
});
