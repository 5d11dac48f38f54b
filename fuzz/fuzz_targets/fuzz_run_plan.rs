//! Fuzz target for URL normalization and run-plan rendering.
//!
//! Input is split into a config document and a URL document; rendering
//! must never panic whatever either contains.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use psm_config::parse_config;
use psm_report::{normalize_urls, RunPlan};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    config: &'a str,
    urls: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let Ok(config) = parse_config(input.config) else {
        return;
    };
    let url_data = serde_json::from_str::<serde_json::Value>(input.urls).ok();
    let urls = normalize_urls(url_data.as_ref()).unwrap_or_default();
    let markdown = RunPlan::from_config(&config, &urls).render();
    assert!(markdown.ends_with('\n'));
});
