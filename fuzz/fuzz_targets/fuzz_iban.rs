#![no_main]

use libfuzzer_sys::fuzz_target;
use zahlung::core::validate_iban;

// validate_iban must never panic, whatever the input
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = validate_iban(s);
    }
});
