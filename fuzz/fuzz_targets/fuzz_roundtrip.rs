#![no_main]
use libfuzzer_sys::fuzz_target;
use zenebf::*;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode to bytes that decode to the same grid
    let Ok(decoded) = decode(data, enough::Unstoppable) else {
        return;
    };

    let reencoded = encode(&decoded);
    let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded, decoded2, "roundtrip grid mismatch");
    assert_eq!(reencoded, encode(&decoded2), "encoding not stable");
});
