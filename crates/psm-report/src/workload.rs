//! Coarse workload estimate for a planned crawl.

use crate::sections::section;
use psm_config::checks::is_truthy;
use psm_config::{ConfigMap, CrawlMode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const FAST_MAX_SCORE: i64 = 15;
const MEDIUM_MAX_SCORE: i64 = 50;

/// Workload bucket shown in the run plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadClass {
    Fast,
    Medium,
    Heavy,
}

impl WorkloadClass {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkloadClass::Fast => "fast",
            WorkloadClass::Medium => "medium",
            WorkloadClass::Heavy => "heavy",
        }
    }

    fn from_score(score: i64) -> Self {
        if score <= FAST_MAX_SCORE {
            WorkloadClass::Fast
        } else if score <= MEDIUM_MAX_SCORE {
            WorkloadClass::Medium
        } else {
            WorkloadClass::Heavy
        }
    }
}

impl std::fmt::Display for WorkloadClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the crawl from its page budget, screenshot modes, and mode.
///
/// Score is `max(max_pages, url_count)`, plus 5 with two or more screenshot
/// viewports enabled, plus 5 for a bounded full crawl.
pub fn workload_class(config: &ConfigMap, url_count: usize) -> WorkloadClass {
    let scope = section(config, "scope");
    let capture = section(config, "capture");
    let url_count = i64::try_from(url_count).unwrap_or(i64::MAX);

    let max_pages = match scope.get("max_pages") {
        None => url_count,
        Some(value) if is_truthy(value) => value
            .as_f64()
            .map(|n| n.trunc() as i64)
            .unwrap_or(0),
        Some(_) => 0,
    };

    let screenshot_modes = capture
        .get("screenshots")
        .and_then(Value::as_object)
        .map(|shots| shots.values().filter(|v| is_truthy(v)).count())
        .unwrap_or(0);

    let bounded_full = scope
        .get("crawl_mode")
        .and_then(Value::as_str)
        .and_then(CrawlMode::parse)
        == Some(CrawlMode::BoundedFull);

    let mut score = max_pages.max(url_count);
    if screenshot_modes >= 2 {
        score = score.saturating_add(5);
    }
    if bounded_full {
        score = score.saturating_add(5);
    }
    WorkloadClass::from_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classify(config: Value, url_count: usize) -> WorkloadClass {
        workload_class(config.as_object().unwrap(), url_count)
    }

    #[test]
    fn test_empty_config_is_fast() {
        assert_eq!(classify(json!({}), 0), WorkloadClass::Fast);
        assert_eq!(classify(json!({}), 15), WorkloadClass::Fast);
        assert_eq!(classify(json!({}), 16), WorkloadClass::Medium);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(json!({"scope": {"max_pages": 15}}), 0), WorkloadClass::Fast);
        assert_eq!(classify(json!({"scope": {"max_pages": 50}}), 0), WorkloadClass::Medium);
        assert_eq!(classify(json!({"scope": {"max_pages": 51}}), 0), WorkloadClass::Heavy);
    }

    #[test]
    fn test_screenshots_and_bounded_full_add_weight() {
        let config = json!({
            "scope": {"max_pages": 10, "crawl_mode": "bounded_full"},
            "capture": {"screenshots": {"desktop": true, "mobile": true, "tablet": false}}
        });
        // 10 + 5 + 5
        assert_eq!(classify(config, 3), WorkloadClass::Medium);

        let one_mode = json!({
            "scope": {"max_pages": 10},
            "capture": {"screenshots": {"desktop": true, "mobile": false}}
        });
        assert_eq!(classify(one_mode, 3), WorkloadClass::Fast);
    }

    #[test]
    fn test_max_pages_coercion() {
        // floats truncate, falsy and non-numeric count as zero
        assert_eq!(classify(json!({"scope": {"max_pages": 15.9}}), 0), WorkloadClass::Fast);
        assert_eq!(classify(json!({"scope": {"max_pages": 16.2}}), 0), WorkloadClass::Medium);
        assert_eq!(classify(json!({"scope": {"max_pages": 0}}), 20), WorkloadClass::Medium);
        assert_eq!(classify(json!({"scope": {"max_pages": "many"}}), 4), WorkloadClass::Fast);
        assert_eq!(classify(json!({"scope": {"max_pages": null}}), 4), WorkloadClass::Fast);
    }

    #[test]
    fn test_non_object_sections_are_empty() {
        let config = json!({"scope": [1, 2], "capture": "all"});
        assert_eq!(classify(config, 60), WorkloadClass::Heavy);
    }
}
