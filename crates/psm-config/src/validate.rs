//! Validation orchestrator.
//!
//! Runs every base-pass section validator exactly once, in a fixed order,
//! then the optional strict guardrails pass. Nothing short-circuits across
//! sections, so one run surfaces the complete finding set.

use crate::finding::ValidationReport;
use crate::sections::{guardrails, BASE_PASS};
use crate::ConfigMap;
use tracing::{debug, info};

/// Options for a validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Require every guardrail confirmation to be explicitly `true`.
    pub strict_guardrails: bool,
}

impl ValidateOptions {
    pub fn strict() -> Self {
        Self {
            strict_guardrails: true,
        }
    }
}

/// Validate a configuration object. Never fails; problems become findings.
pub fn validate_config(config: &ConfigMap, options: ValidateOptions) -> ValidationReport {
    let mut findings = Vec::new();

    for (section, validator) in BASE_PASS {
        let section_findings = validator(config);
        debug!(
            section,
            findings = section_findings.len(),
            "Section validated"
        );
        findings.extend(section_findings);
    }

    if options.strict_guardrails {
        let strict_findings = guardrails::validate_strict(config);
        debug!(findings = strict_findings.len(), "Strict guardrails pass complete");
        findings.extend(strict_findings);
    }

    let report = ValidationReport::new(findings);
    info!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        strict = options.strict_guardrails,
        accepted = report.is_accepted(),
        "Config validation complete"
    );
    report
}
