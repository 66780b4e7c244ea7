#![no_main]
use libfuzzer_sys::fuzz_target;
use unilzw::{Scheme, decompress, lzw};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must only ever produce errors, never panics.
    for scheme in Scheme::ALL {
        let _ = decompress(data, scheme);
    }

    // Raw token lists straight into the LZW decoder.
    let tokens: Vec<u64> = data
        .chunks(2)
        .map(|c| c.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
        .collect();
    let _ = lzw::decode(&tokens);
});
