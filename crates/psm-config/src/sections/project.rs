//! `project`: identity of the site being modernized.

use super::required_object;
use crate::checks::{expect_one_of, is_http_url};
use crate::finding::Finding;
use crate::rules::{ALLOWED_AUDIENCES, ALLOWED_INTENDED_USE, LOCAL_HOST_MARKERS};
use crate::ConfigMap;
use serde_json::Value;

pub fn validate(config: &ConfigMap) -> Vec<Finding> {
    let project = match required_object(config, "project") {
        Ok(project) => project,
        Err(missing) => return vec![missing],
    };
    let mut findings = Vec::new();

    let has_name = project
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.trim().is_empty());
    if !has_name {
        findings.push(Finding::error("project.name", "must be a non-empty string"));
    }

    let source_url = project.get("source_url");
    match source_url.and_then(Value::as_str) {
        Some(url) if is_http_url(source_url) => {
            if LOCAL_HOST_MARKERS.iter().any(|marker| url.contains(marker)) {
                findings.push(Finding::warning(
                    "project.source_url",
                    "looks local/private; this tool is for public websites only",
                ));
            }
        }
        _ => findings.push(Finding::error(
            "project.source_url",
            "must be a public http(s) URL",
        )),
    }

    findings.extend(expect_one_of(
        project,
        "output_audience",
        "project",
        ALLOWED_AUDIENCES,
    ));
    findings.extend(expect_one_of(
        project,
        "intended_use",
        "project",
        ALLOWED_INTENDED_USE,
    ));

    findings
}
