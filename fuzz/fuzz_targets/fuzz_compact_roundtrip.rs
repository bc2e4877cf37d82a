#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for &kind in kennung::list_kinds() {
            let validator = kennung::get_validator(kind);
            // Compacting must settle after one pass.
            let once = validator.compact(s);
            assert_eq!(validator.compact(&once), once);
            if let Ok(canonical) = validator.validate(s) {
                assert!(!canonical.is_empty());
                assert!(canonical.is_ascii());
                // A canonical form re-validates to itself.
                assert_eq!(validator.validate(&canonical).unwrap(), canonical);
                if let Some(pretty) = validator.format(&canonical) {
                    assert_eq!(validator.validate(&pretty).unwrap(), canonical);
                }
            }
        }
    }
});
