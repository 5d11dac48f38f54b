//! Fuzz target for config loading and validation.
//!
//! Any JSON object must validate without panicking, in both passes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use psm_config::{parse_config, validate_config, ValidateOptions};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = parse_config(text) else {
        return;
    };
    let base = validate_config(&config, ValidateOptions::default());
    let strict = validate_config(&config, ValidateOptions::strict());
    assert!(strict.findings().starts_with(base.findings()));
    let _ = base.human_lines();
});
