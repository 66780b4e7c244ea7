#![no_main]
use libfuzzer_sys::fuzz_target;
use unilzw::{Scheme, compress, decompress};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let scheme = Scheme::ALL[data[0] as usize % Scheme::ALL.len()];
    let payload = &data[1..];

    match compress(payload, scheme).unwrap() {
        Some(packed) => assert_eq!(decompress(&packed, scheme).unwrap(), payload),
        None => assert!(payload.is_empty()),
    }
});
