//! JSON envelopes for `--format json`.
//!
//! Every envelope starts with `schema_version`, `command`, `run_id`,
//! `generated_at`, and `status`; command-specific fields follow.

use psm_common::error::StructuredError;
use psm_common::SCHEMA_VERSION;
use psm_config::{lookup_path, ConfigMap, ValidationReport};
use psm_package::PackageReport;
use psm_report::RunPlan;
use serde_json::{json, Map, Value};
use std::path::Path;

fn base(command: &str, run_id: &str, status: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("schema_version".into(), json!(SCHEMA_VERSION));
    map.insert("command".into(), json!(command));
    map.insert("run_id".into(), json!(run_id));
    map.insert("generated_at".into(), json!(chrono::Utc::now().to_rfc3339()));
    map.insert("status".into(), json!(status));
    map
}

/// Findings with the offending value attached when its path resolves.
pub fn findings_json(config: &ConfigMap, report: &ValidationReport) -> Vec<Value> {
    let root = Value::Object(config.clone());
    report
        .findings()
        .iter()
        .map(|finding| {
            let mut entry = json!({
                "severity": finding.severity,
                "path": finding.path,
                "message": finding.message,
            });
            if let Some(value) = lookup_path(&root, &finding.path) {
                entry["value"] = value.clone();
            }
            entry
        })
        .collect()
}

pub fn validation(
    run_id: &str,
    config_path: &Path,
    config: &ConfigMap,
    report: &ValidationReport,
    strict_guardrails: bool,
) -> Value {
    let status = if report.is_accepted() { "accepted" } else { "rejected" };
    let mut map = base("validate", run_id, status);
    map.insert("config".into(), json!(config_path.display().to_string()));
    map.insert("strict_guardrails".into(), json!(strict_guardrails));
    map.insert("error_count".into(), json!(report.error_count()));
    map.insert("warning_count".into(), json!(report.warning_count()));
    map.insert("findings".into(), Value::Array(findings_json(config, report)));
    map.insert("summary".into(), json!(report.summary_line()));
    Value::Object(map)
}

pub fn package(run_id: &str, report: &PackageReport) -> Value {
    let status = if report.is_valid() { "passed" } else { "failed" };
    let mut map = base("check-package", run_id, status);
    map.insert("root".into(), json!(report.root.display().to_string()));
    map.insert("missing".into(), json!(report.missing));
    map.insert("errors".into(), json!(report.errors));
    map.insert("warnings".into(), json!(report.warnings));
    map.insert("files".into(), json!(report.files));
    map.insert("total_bytes".into(), json!(report.total_bytes()));
    map.insert("summary".into(), json!(report.summary_line()));
    Value::Object(map)
}

/// Plan envelope. The markdown is inlined unless it was written to a file.
pub fn plan(run_id: &str, plan: &RunPlan, markdown: &str, output: Option<&Path>) -> Value {
    let mut map = base("plan", run_id, "rendered");
    map.insert(
        "output".into(),
        json!(output.map(|p| p.display().to_string())),
    );
    map.insert("plan".into(), json!(plan));
    if output.is_none() {
        map.insert("markdown".into(), json!(markdown));
    }
    Value::Object(map)
}

pub fn error(run_id: &str, command: &str, err: &psm_common::Error) -> Value {
    let mut map = base(command, run_id, "error");
    map.insert("error".into(), json!(StructuredError::from(err)));
    Value::Object(map)
}

pub fn version(run_id: &str) -> Value {
    let mut map = base("version", run_id, "ok");
    map.insert("psm_version".into(), json!(env!("CARGO_PKG_VERSION")));
    map.insert("rust_version".into(), json!(env!("CARGO_PKG_RUST_VERSION")));
    Value::Object(map)
}
