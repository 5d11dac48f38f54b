//! Run-plan assembly and markdown rendering.

use crate::error::{ReportError, Result};
use crate::sections::{
    output_artifacts, section, CaptureSettings, CrawlScope, ProjectIntent, QualityControls,
};
use crate::workload::{workload_class, WorkloadClass};
use psm_config::checks::is_truthy;
use psm_config::ConfigMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// A run-plan preview, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunPlan {
    pub project: ProjectIntent,
    pub scope: CrawlScope,
    /// URLs that fit within `max_pages`.
    pub selected_urls: Vec<String>,
    /// Candidate URLs dropped by the `max_pages` limit.
    pub truncated_urls: usize,
    pub capture: CaptureSettings,
    pub quality: QualityControls,
    pub artifacts: Vec<String>,
    pub warnings: Vec<String>,
    pub workload: WorkloadClass,
}

impl RunPlan {
    /// Build the plan from a config and candidate URLs. Never fails.
    pub fn from_config(config: &ConfigMap, urls: &[String]) -> Self {
        let project = ProjectIntent::from_config(config);
        let scope = CrawlScope::from_config(config);
        let capture = CaptureSettings::from_config(config);
        let quality = QualityControls::from_config(config);

        let limit = page_limit(config, urls.len());
        let selected_urls: Vec<String> = urls.iter().take(limit).cloned().collect();
        let truncated_urls = urls.len() - selected_urls.len();
        let warnings = plan_warnings(&scope, &capture, urls.len());
        let workload = workload_class(config, selected_urls.len());

        debug!(
            candidates = urls.len(),
            selected = selected_urls.len(),
            warnings = warnings.len(),
            workload = %workload,
            "Run plan assembled"
        );

        Self {
            project,
            scope,
            selected_urls,
            truncated_urls,
            capture,
            quality,
            artifacts: output_artifacts(config),
            warnings,
            workload,
        }
    }

    /// Render the markdown preview. The text always ends with one newline.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut push = |line: String| lines.push(line);

        push(format!("# Run Plan Preview: {}", self.project.name));
        push(String::new());

        push("## Project Intent".into());
        push(format!("- Mode: `{}`", self.project.mode));
        push(format!("- Source URL: `{}`", self.project.source_url));
        push(format!("- Audience: `{}`", self.project.audience));
        push(format!("- Intended use: `{}`", self.project.intended_use));
        push("- Warning: Outputs are brand-faithful, normalized, and non-clone by design.".into());
        push(String::new());

        let scope = &self.scope;
        push("## Crawl Scope".into());
        push(format!("- Crawl mode: `{}`", scope.crawl_mode));
        push(format!("- Max pages: `{}`", or_na(&scope.max_pages)));
        push(format!("- Max depth: `{}`", or_na(&scope.max_depth)));
        push(format!("- Include subdomains: `{}`", scope.include_subdomains));
        push(format!("- Respect robots.txt: `{}`", scope.respect_robots_txt));
        push(format!("- Crawl delay (ms): `{}`", or_na(&scope.crawl_delay_ms)));
        push(format!("- Requests/sec: `{}`", or_na(&scope.requests_per_second)));
        push(String::new());

        push("## Included / Excluded Paths".into());
        if scope.exclude_paths.is_empty() {
            push("- No explicit excluded paths configured".into());
        } else {
            for path in &scope.exclude_paths {
                push(format!("- Exclude: `{path}`"));
            }
        }
        push(String::new());

        push("## Selected URLs".into());
        if self.selected_urls.is_empty() {
            push("- No URLs selected".into());
        } else {
            for (i, url) in self.selected_urls.iter().enumerate() {
                push(format!("{}. `{}`", i + 1, url));
            }
            if self.truncated_urls > 0 {
                push(format!(
                    "- Truncated to `max_pages`; {} additional URLs not shown",
                    self.truncated_urls
                ));
            }
        }
        push(String::new());

        let capture = &self.capture;
        push("## Capture Settings".into());
        push(format!(
            "- Screenshots: desktop={}, mobile={}, tablet={}",
            capture.desktop, capture.mobile, capture.tablet
        ));
        push(format!("- HTML capture: `{}`", capture.html));
        push(format!("- CSS capture: `{}`", capture.css));
        push(format!("- Text capture: `{}`", capture.text));
        push(format!("- Asset metadata: `{}`", capture.asset_metadata));
        push(format!("- Component candidates: `{}`", capture.component_candidates));
        push(String::new());

        let quality = &self.quality;
        push("## Quality Controls".into());
        push(format!(
            "- Canonical token confidence threshold: `{}`",
            quality.confidence_threshold
        ));
        push(format!(
            "- Low-confidence fallback: `{}`",
            quality.low_confidence_fallback
        ));
        push(format!("- Contrast checks: `{}`", quality.contrast_checks));
        push(format!("- Anti-pattern report: `{}`", quality.anti_pattern_report));
        push(format!("- PNIE matrix: `{}`", quality.pnie_matrix));
        push(String::new());

        push("## Output Artifacts".into());
        for artifact in &self.artifacts {
            push(format!("- `{artifact}`"));
        }
        push(String::new());

        push("## Warnings".into());
        if self.warnings.is_empty() {
            push("- None detected from configuration".into());
        } else {
            for warning in &self.warnings {
                push(format!("- {warning}"));
            }
        }
        push(String::new());

        push("## Estimated Workload".into());
        push(format!("- Class: `{}`", self.workload));
        push(String::new());
        push("_Do not begin crawling until this run plan is reviewed._".into());

        let mut markdown = lines.join("\n");
        markdown.push('\n');
        markdown
    }
}

/// Write a rendered plan to `path`.
pub fn write_plan(path: &Path, markdown: &str) -> Result<()> {
    std::fs::write(path, markdown).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = markdown.len(), "Run plan written");
    Ok(())
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("n/a")
}

/// How many candidate URLs fit the plan.
///
/// An absent or falsy `max_pages` keeps every URL; a numeric one is
/// truncated to an integer. Negative or non-numeric limits keep every URL.
///
/// A negative limit never trims from the tail of the list. The validator
/// rejects it as `must be >= 1` before any crawl.
fn page_limit(config: &ConfigMap, url_count: usize) -> usize {
    match section(config, "scope").get("max_pages") {
        Some(value) if is_truthy(value) => match value.as_f64() {
            Some(n) if n >= 0.0 => n.trunc() as usize,
            _ => url_count,
        },
        _ => url_count,
    }
}

fn plan_warnings(scope: &CrawlScope, capture: &CaptureSettings, url_count: usize) -> Vec<String> {
    let mut warnings = Vec::new();
    if !scope.respect_robots_txt {
        warnings.push("robots.txt respect is disabled; confirm policy allows this.");
    }
    if !capture.css {
        warnings.push("CSS capture disabled; visual token confidence may degrade.");
    }
    if !capture.text {
        warnings.push("Text capture disabled; voice DNA extraction may degrade.");
    }
    if !capture.desktop {
        warnings.push("Desktop screenshots disabled; this violates the recommended/default profile.");
    }
    if url_count == 0 {
        warnings.push("No URLs selected yet; crawl plan is incomplete.");
    }
    warnings.into_iter().map(String::from).collect()
}
