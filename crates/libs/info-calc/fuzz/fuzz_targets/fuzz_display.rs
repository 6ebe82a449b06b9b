#![no_main]

use libfuzzer_sys::fuzz_target;

use info_calc::{BitRate, ByteCount};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(size) = ByteCount::parse(input) {
            size.to_string();
            size.display().binary().long_names().to_string();
        }
        if let Ok(rate) = BitRate::parse(input) {
            rate.to_string();
            rate.display().bps().to_string();
        }
    }
});
