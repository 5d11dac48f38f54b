//! `capture`: which artifacts the crawler records per page.

use super::{required_object, MISSING_OBJECT};
use crate::checks::{expect_bool, expect_optional_bool};
use crate::finding::Finding;
use crate::rules::{REQUIRED_CAPTURE_FLAGS, SCREENSHOT_VIEWPORTS};
use crate::ConfigMap;
use serde_json::Value;

pub fn validate(config: &ConfigMap) -> Vec<Finding> {
    let capture = match required_object(config, "capture") {
        Ok(capture) => capture,
        Err(missing) => return vec![missing],
    };
    let mut findings = Vec::new();

    match capture.get("screenshots").and_then(Value::as_object) {
        None => findings.push(Finding::error("capture.screenshots", MISSING_OBJECT)),
        Some(screenshots) => findings.extend(check_screenshots(screenshots)),
    }

    for key in REQUIRED_CAPTURE_FLAGS {
        findings.extend(expect_bool(capture, key, "capture"));
    }
    findings.extend(expect_optional_bool(
        capture,
        "computed_css_samples",
        "capture",
        "must be boolean if provided",
    ));

    if capture.get("css") == Some(&Value::Bool(false)) {
        findings.push(Finding::warning(
            "capture.css",
            "disabling CSS reduces token extraction quality",
        ));
    }
    if capture.get("text") == Some(&Value::Bool(false)) {
        findings.push(Finding::warning(
            "capture.text",
            "disabling text reduces voice DNA extraction quality",
        ));
    }

    findings
}

fn check_screenshots(screenshots: &ConfigMap) -> Vec<Finding> {
    let mut findings: Vec<Finding> = SCREENSHOT_VIEWPORTS
        .iter()
        .filter_map(|key| {
            expect_optional_bool(screenshots, key, "capture.screenshots", "must be boolean")
        })
        .collect();

    // Desktop is required to be exactly `true`, not merely present.
    if screenshots.get("desktop") != Some(&Value::Bool(true)) {
        findings.push(Finding::error(
            "capture.screenshots.desktop",
            "must be true (required)",
        ));
    }
    if screenshots.get("mobile") != Some(&Value::Bool(true)) {
        findings.push(Finding::warning(
            "capture.screenshots.mobile",
            "recommended true for better visual hierarchy coverage",
        ));
    }

    findings
}
