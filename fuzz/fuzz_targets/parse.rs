#![no_main]
use libfuzzer_sys::fuzz_target;
use strictjson::{parse, Value};

fuzz_target!(|data: &[u8]| {
    // The scanner takes text, so only valid UTF-8 is interesting.
    if let Ok(s) = std::str::from_utf8(data) {
        // Any panic here is a bug; errors are fine.
        if let Ok(value) = parse(s) {
            // Whatever parses must serialize and parse back to the same tree.
            let text = value.stringify().unwrap();
            assert_eq!(Value::parse(&text).unwrap(), value);
        }
    }
});
