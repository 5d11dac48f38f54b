//! `quality`: confidence thresholds and required reports.

use super::required_object;
use crate::checks::{as_number, expect_bool, expect_number, expect_one_of, NumberRule};
use crate::finding::Finding;
use crate::rules::{ALLOWED_FALLBACKS, RECOMMENDED_CONFIDENCE_THRESHOLD, REQUIRED_QUALITY_FLAGS};
use crate::ConfigMap;

const THRESHOLD_KEY: &str = "canonical_token_confidence_threshold";
const THRESHOLD_PATH: &str = "quality.canonical_token_confidence_threshold";

pub fn validate(config: &ConfigMap) -> Vec<Finding> {
    let quality = match required_object(config, "quality") {
        Ok(quality) => quality,
        Err(missing) => return vec![missing],
    };
    let mut findings = Vec::new();

    findings.extend(expect_number(
        quality,
        THRESHOLD_KEY,
        "quality",
        NumberRule::float().min(0.0),
    ));
    if let Some(threshold) = quality.get(THRESHOLD_KEY).and_then(as_number) {
        // Over-range wins; a value trips at most one of the two.
        if threshold > 1.0 {
            findings.push(Finding::error(THRESHOLD_PATH, "must be <= 1"));
        } else if threshold < RECOMMENDED_CONFIDENCE_THRESHOLD {
            findings.push(Finding::warning(
                THRESHOLD_PATH,
                format!("below recommended default {RECOMMENDED_CONFIDENCE_THRESHOLD:.2}"),
            ));
        }
    }

    findings.extend(expect_one_of(
        quality,
        "low_confidence_fallback",
        "quality",
        ALLOWED_FALLBACKS,
    ));
    for key in REQUIRED_QUALITY_FLAGS {
        findings.extend(expect_bool(quality, key, "quality"));
    }

    findings
}
