//! Run-plan section data, each built leniently from one config section.

use crate::urls::stringify;
use psm_common::SUPPORTED_MODE;
use psm_config::checks::is_truthy;
use psm_config::rules::RECOMMENDED_CONFIDENCE_THRESHOLD;
use psm_config::{ConfigMap, CrawlMode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_AUDIENCE: &str = "both";
const DEFAULT_INTENDED_USE: &str = "rebuild_baseline";
const DEFAULT_FALLBACK: &str = "suggest_candidates";

/// Read-only view of a config section. Absent or non-object sections
/// behave as empty.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Section<'a>(Option<&'a ConfigMap>);

impl<'a> Section<'a> {
    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|map| map.get(key))
    }

    pub(crate) fn object(&self, key: &str) -> Section<'a> {
        Section(self.get(key).and_then(Value::as_object))
    }

    fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(stringify)
    }

    fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or_else(|| default.to_string())
    }

    fn flag_or(&self, key: &str, default: bool) -> bool {
        self.get(key).map_or(default, is_truthy)
    }

    fn list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().map(stringify).collect(),
            _ => Vec::new(),
        }
    }
}

pub(crate) fn section<'a>(config: &'a ConfigMap, key: &str) -> Section<'a> {
    Section(config.get(key).and_then(Value::as_object))
}

/// What the run is for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectIntent {
    pub name: String,
    pub mode: String,
    pub source_url: String,
    pub audience: String,
    pub intended_use: String,
}

impl ProjectIntent {
    pub fn from_config(config: &ConfigMap) -> Self {
        let project = section(config, "project");
        Self {
            name: project.text_or("name", "Untitled Project"),
            mode: config
                .get("mode")
                .map(stringify)
                .unwrap_or_else(|| SUPPORTED_MODE.to_string()),
            source_url: project.text_or("source_url", ""),
            audience: project.text_or("output_audience", DEFAULT_AUDIENCE),
            intended_use: project.text_or("intended_use", DEFAULT_INTENDED_USE),
        }
    }
}

/// Crawl limits as configured. Limits left unset render as `n/a`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlScope {
    pub crawl_mode: String,
    pub max_pages: Option<String>,
    pub max_depth: Option<String>,
    pub include_subdomains: bool,
    pub respect_robots_txt: bool,
    pub crawl_delay_ms: Option<String>,
    pub requests_per_second: Option<String>,
    pub exclude_paths: Vec<String>,
}

impl CrawlScope {
    pub fn from_config(config: &ConfigMap) -> Self {
        let scope = section(config, "scope");
        Self {
            crawl_mode: scope.text_or("crawl_mode", CrawlMode::RepresentativeSample.as_str()),
            max_pages: scope.text("max_pages"),
            max_depth: scope.text("max_depth"),
            include_subdomains: scope.flag_or("include_subdomains", false),
            respect_robots_txt: scope.flag_or("respect_robots_txt", true),
            crawl_delay_ms: scope.text("crawl_delay_ms"),
            requests_per_second: scope.text("requests_per_second"),
            exclude_paths: scope.list("exclude_paths"),
        }
    }
}

/// Per-page capture switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureSettings {
    pub desktop: bool,
    pub mobile: bool,
    pub tablet: bool,
    pub html: bool,
    pub css: bool,
    pub text: bool,
    pub asset_metadata: bool,
    pub component_candidates: bool,
}

impl CaptureSettings {
    pub fn from_config(config: &ConfigMap) -> Self {
        let capture = section(config, "capture");
        let screenshots = capture.object("screenshots");
        Self {
            desktop: screenshots.flag_or("desktop", false),
            mobile: screenshots.flag_or("mobile", false),
            tablet: screenshots.flag_or("tablet", false),
            html: capture.flag_or("html", true),
            css: capture.flag_or("css", true),
            text: capture.flag_or("text", true),
            asset_metadata: capture.flag_or("asset_metadata", true),
            component_candidates: capture.flag_or("component_candidates", true),
        }
    }
}

/// Confidence threshold and the quality reports the run must produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityControls {
    pub confidence_threshold: String,
    pub low_confidence_fallback: String,
    pub contrast_checks: bool,
    pub anti_pattern_report: bool,
    pub pnie_matrix: bool,
}

impl QualityControls {
    pub fn from_config(config: &ConfigMap) -> Self {
        let quality = section(config, "quality");
        Self {
            confidence_threshold: quality.text_or(
                "canonical_token_confidence_threshold",
                &RECOMMENDED_CONFIDENCE_THRESHOLD.to_string(),
            ),
            low_confidence_fallback: quality.text_or("low_confidence_fallback", DEFAULT_FALLBACK),
            contrast_checks: quality.flag_or("require_contrast_checks", true),
            anti_pattern_report: quality.flag_or("require_anti_pattern_report", true),
            pnie_matrix: quality.flag_or("require_pnie_matrix", true),
        }
    }
}

/// Artifacts the run is expected to produce when the config names none.
pub const DEFAULT_ARTIFACTS: &[&str] = &[
    "reports/*",
    "tokens/tokens.json",
    "tokens/tokens.css",
    "tokens/tailwind.theme.js",
    "components/*",
    "patterns/*",
    "evidence/*",
];

/// `output.artifacts` when it is a non-empty list, else the defaults.
pub fn output_artifacts(config: &ConfigMap) -> Vec<String> {
    let artifacts = section(config, "output").list("artifacts");
    if artifacts.is_empty() {
        DEFAULT_ARTIFACTS.iter().map(|a| a.to_string()).collect()
    } else {
        artifacts
    }
}
