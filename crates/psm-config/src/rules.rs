//! Static rule tables: allowed values, required keys, thresholds.
//!
//! Allowed-value tables are kept sorted so `must be one of [...]`
//! messages list them in a stable order.

use serde::{Deserialize, Serialize};

pub const ALLOWED_AUDIENCES: &[&str] = &["both", "designer", "developer"];

pub const ALLOWED_INTENDED_USE: &[&str] =
    &["client_work", "internal_exploration", "rebuild_baseline"];

pub const ALLOWED_FALLBACKS: &[&str] = &["infer_ranges", "mark_unknown", "suggest_candidates"];

/// Low-value paths a crawl usually skips.
pub const DEFAULT_EXCLUDE_HINTS: &[&str] = &["/careers", "/legal", "/login", "/privacy", "/terms"];

/// Confirmation flags under `guardrails`, in reporting order.
pub const GUARDRAIL_KEYS: &[&str] = &[
    "public_access_confirmed",
    "non_clone_intent_confirmed",
    "asset_rights_warning_confirmed",
];

pub const SCREENSHOT_VIEWPORTS: &[&str] = &["desktop", "mobile", "tablet"];

pub const REQUIRED_CAPTURE_FLAGS: &[&str] =
    &["html", "css", "text", "asset_metadata", "component_candidates"];

pub const REQUIRED_QUALITY_FLAGS: &[&str] = &[
    "require_contrast_checks",
    "require_anti_pattern_report",
    "require_pnie_matrix",
];

/// Below this canonical-token confidence the validator warns.
pub const RECOMMENDED_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Substrings that mark a source URL as local/private.
pub const LOCAL_HOST_MARKERS: &[&str] = &["localhost", "127.0.0.1"];

/// How the crawler selects pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlMode {
    BoundedFull,
    CustomUrls,
    RepresentativeSample,
    Sitemap,
}

impl CrawlMode {
    /// All modes, sorted by their wire name.
    pub const ALL: [CrawlMode; 4] = [
        CrawlMode::BoundedFull,
        CrawlMode::CustomUrls,
        CrawlMode::RepresentativeSample,
        CrawlMode::Sitemap,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CrawlMode::BoundedFull => "bounded_full",
            CrawlMode::CustomUrls => "custom_urls",
            CrawlMode::RepresentativeSample => "representative_sample",
            CrawlMode::Sitemap => "sitemap",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == s)
    }

    /// Wire names of every mode, for `must be one of` messages.
    pub fn names() -> [&'static str; 4] {
        Self::ALL.map(CrawlMode::as_str)
    }
}

impl std::fmt::Display for CrawlMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(table: &[&str]) -> bool {
        table.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_allowed_tables_sorted() {
        assert!(is_sorted(ALLOWED_AUDIENCES));
        assert!(is_sorted(ALLOWED_INTENDED_USE));
        assert!(is_sorted(ALLOWED_FALLBACKS));
        assert!(is_sorted(DEFAULT_EXCLUDE_HINTS));
        assert!(is_sorted(&CrawlMode::names()));
    }

    #[test]
    fn test_crawl_mode_round_trip() {
        for mode in CrawlMode::ALL {
            assert_eq!(CrawlMode::parse(mode.as_str()), Some(mode));
            assert_eq!(
                serde_json::to_string(&mode).unwrap(),
                format!("\"{}\"", mode)
            );
        }
        assert_eq!(CrawlMode::parse("full"), None);
        assert_eq!(CrawlMode::parse("Sitemap"), None);
    }
}
