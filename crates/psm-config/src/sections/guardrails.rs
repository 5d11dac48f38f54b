//! `mode` and `guardrails`: operating mode and explicit confirmations.
//!
//! The base pass only type-checks confirmations that are present. The
//! strict pass ([`validate_strict`]) requires all of them to be `true`.

use crate::checks::expect_optional_bool;
use crate::finding::Finding;
use crate::rules::GUARDRAIL_KEYS;
use crate::ConfigMap;
use psm_common::SUPPORTED_MODE;
use serde_json::Value;

pub fn validate(config: &ConfigMap) -> Vec<Finding> {
    let mut findings = Vec::new();

    if config.get("mode").and_then(Value::as_str) != Some(SUPPORTED_MODE) {
        findings.push(Finding::error(
            "mode",
            format!("must equal '{SUPPORTED_MODE}'"),
        ));
    }

    let guardrails = match config.get("guardrails") {
        None | Some(Value::Null) => return findings,
        Some(Value::Object(guardrails)) => guardrails,
        Some(_) => {
            findings.push(Finding::error("guardrails", "must be an object if provided"));
            return findings;
        }
    };

    findings.extend(
        GUARDRAIL_KEYS
            .iter()
            .filter_map(|key| expect_optional_bool(guardrails, key, "guardrails", "must be boolean")),
    );
    findings
}

/// Escalation pass run after the base pass when strict mode is requested.
pub fn validate_strict(config: &ConfigMap) -> Vec<Finding> {
    let Some(guardrails) = config.get("guardrails").and_then(Value::as_object) else {
        return vec![Finding::error(
            "guardrails",
            "required when --strict-guardrails is set",
        )];
    };

    GUARDRAIL_KEYS
        .iter()
        .filter(|key| guardrails.get(**key) != Some(&Value::Bool(true)))
        .map(|key| Finding::error(format!("guardrails.{key}"), "must be true before crawling"))
        .collect()
}
