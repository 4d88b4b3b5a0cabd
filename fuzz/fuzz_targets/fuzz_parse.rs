#![no_main]

use libfuzzer_sys::fuzz_target;
use ziffern::{DecimalParser, Separators};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = ziffern::to_decimal(s);
        let _ = DecimalParser::new().separators(Separators::german()).parse(s);
    }
});
