//! Section validators, one per top-level configuration key.
//!
//! Every validator reads only its own section and returns its findings in
//! rule order. A missing section short-circuits that section alone; the
//! orchestrator still runs every other validator.

pub mod capture;
pub mod guardrails;
pub mod output;
pub mod project;
pub mod quality;
pub mod scope;

use crate::finding::Finding;
use crate::ConfigMap;

/// Signature shared by all section validators.
pub type SectionValidator = fn(&ConfigMap) -> Vec<Finding>;

/// Base-pass validators in execution order.
pub const BASE_PASS: [(&str, SectionValidator); 6] = [
    ("guardrails", guardrails::validate),
    ("project", project::validate),
    ("scope", scope::validate),
    ("capture", capture::validate),
    ("quality", quality::validate),
    ("output", output::validate),
];

pub(crate) const MISSING_OBJECT: &str = "missing required object";

/// The required object at `key`, or the finding reporting its absence.
pub(crate) fn required_object<'a>(config: &'a ConfigMap, key: &str) -> Result<&'a ConfigMap, Finding> {
    config
        .get(key)
        .and_then(serde_json::Value::as_object)
        .ok_or_else(|| Finding::error(key, MISSING_OBJECT))
}
