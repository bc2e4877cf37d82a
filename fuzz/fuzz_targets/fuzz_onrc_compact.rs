#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Separator collapsing and date folding must not panic, and
        // compacting twice must settle.
        let once = kennung::ro::onrc::compact(s);
        let twice = kennung::ro::onrc::compact(&once);
        assert_eq!(once, twice);
    }
});
