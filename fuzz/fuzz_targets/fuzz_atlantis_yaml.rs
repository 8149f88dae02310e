#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing and validating a manifest should never panic
    let _ = atlantis_yaml::ParserValidator::new().parse_and_validate(data);
});
