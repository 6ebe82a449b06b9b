#![no_main]

use libfuzzer_sys::fuzz_target;

use info_calc::{BitCount, BitRate, ByteCount};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = BitCount::parse(input);
        let _ = BitCount::parse_strict_binary(input);
        let _ = ByteCount::parse(input);
        let _ = ByteCount::parse_strict_binary(input);
        let _ = BitRate::parse(input);
        let _ = BitRate::parse_strict_binary(input);
    }
});
