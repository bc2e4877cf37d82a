#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        for &kind in kennung::list_kinds() {
            let validator = kennung::get_validator(kind);
            let _ = validator.compact(s);
            let _ = validator.validate(s);
            let _ = validator.format(s);
        }
        let _ = kennung::bg::egn::get_birth_date(s);
        let _ = kennung::pk::cnic::get_gender(s);
        let _ = kennung::pk::cnic::get_province(s);
        let _ = kennung::no::kontonr::to_iban(s);
    }
});
