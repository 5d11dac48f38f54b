//! Expected package layout and the file inventory entry type.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Files every package must contain, relative to the package root.
pub const REQUIRED_PATHS: [&str; 14] = [
    "reports/executive-summary.md",
    "reports/source-audit.md",
    "reports/brand-dna.md",
    "reports/accessibility-audit.md",
    "reports/preserve-normalize-improve-exclude.md",
    "tokens/tokens.json",
    "tokens/tokens.css",
    "tokens/tailwind.theme.js",
    "components/component-library-spec.md",
    "components/component-contracts.json",
    "patterns/page-template-patterns.md",
    "evidence/crawl-manifest.json",
    "evidence/page-weights.json",
    "evidence/extraction-confidence.json",
];

pub const TOKENS_PATH: &str = "tokens/tokens.json";
pub const PNIE_REPORT_PATH: &str = "reports/preserve-normalize-improve-exclude.md";
pub const EXECUTIVE_SUMMARY_PATH: &str = "reports/executive-summary.md";

/// Top-level token groups a complete token file defines.
pub const RECOMMENDED_TOKEN_GROUPS: [&str; 8] = [
    "color",
    "typography",
    "spacing",
    "radius",
    "shadow",
    "border",
    "motion",
    "layout",
];

/// Terms the PNIE report must use, matched case-sensitively.
pub const PNIE_TERMS: [&str; 4] = ["Preserve", "Normalize", "Improve", "Exclude"];

/// Phrases that state the output is not a copy of the source site.
/// Matched case-insensitively; one is enough.
pub const NON_DERIVATIVE_MARKERS: [&str; 4] = [
    "not a clone",
    "brand-faithful",
    "normalize",
    "must not be copied",
];

/// Required top-level keys of an evidence file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonShape {
    pub path: &'static str,
    pub required_keys: &'static [&'static str],
}

/// Evidence file shapes, in check order.
pub const EVIDENCE_SHAPES: [JsonShape; 3] = [
    JsonShape {
        path: "evidence/crawl-manifest.json",
        required_keys: &["source_url", "crawl_mode", "pages"],
    },
    JsonShape {
        path: "evidence/page-weights.json",
        required_keys: &["clusters", "pages"],
    },
    JsonShape {
        path: "evidence/extraction-confidence.json",
        required_keys: &["threshold"],
    },
];

/// A file found in the package, with checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the package root.
    pub path: String,

    /// SHA-256 checksum (64 hex characters).
    pub sha256: String,

    /// Size in bytes.
    pub bytes: u64,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, sha256: impl Into<String>, bytes: u64) -> Self {
        Self {
            path: path.into(),
            sha256: sha256.into(),
            bytes,
        }
    }

    /// Build an entry from file contents.
    pub fn from_contents(path: impl Into<String>, data: &[u8]) -> Self {
        Self::new(path, Self::compute_checksum(data), data.len() as u64)
    }

    /// Compute SHA-256 checksum of data.
    pub fn compute_checksum(data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hex::encode(hasher.finalize())
    }
}
