#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and full decode must never panic
    let _ = zenebf::EbfInfo::from_bytes(data);
    let _ = zenebf::decode(data, enough::Unstoppable);
});
