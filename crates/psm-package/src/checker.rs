//! Package checker: presence, JSON shape, and report terminology.

use crate::error::{PackageError, Result};
use crate::manifest::{
    FileEntry, JsonShape, EVIDENCE_SHAPES, EXECUTIVE_SUMMARY_PATH, NON_DERIVATIVE_MARKERS,
    PNIE_REPORT_PATH, PNIE_TERMS, RECOMMENDED_TOKEN_GROUPS, REQUIRED_PATHS, TOKENS_PATH,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of checking one package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageReport {
    pub root: PathBuf,
    /// Required files that were not found, relative to the root.
    pub missing: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Required files that were found.
    pub files: Vec<FileEntry>,
}

impl PackageReport {
    /// A package is valid iff no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Finding lines for terminal output: errors first, then warnings.
    pub fn human_lines(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|e| format!("ERROR: {e}"))
            .chain(self.warnings.iter().map(|w| format!("WARN: {w}")))
            .collect()
    }

    pub fn summary_line(&self) -> String {
        if !self.missing.is_empty() {
            format!(
                "Validation failed ({} missing required files)",
                self.missing.len()
            )
        } else if !self.is_valid() {
            format!(
                "Validation failed ({} error(s), {} warning(s))",
                self.errors.len(),
                self.warnings.len()
            )
        } else {
            format!("Validation passed with {} warning(s)", self.warnings.len())
        }
    }

    /// Total size of the inventoried files.
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

/// Checks a package rooted at a directory.
#[derive(Debug, Clone)]
pub struct PackageChecker {
    root: PathBuf,
}

impl PackageChecker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Run every phase. Content problems become findings; only a root
    /// that exists but is not a directory is an error.
    pub fn check(&self) -> Result<PackageReport> {
        if self.root.exists() && !self.root.is_dir() {
            return Err(PackageError::NotADirectory(self.root.clone()));
        }

        let mut report = PackageReport {
            root: self.root.clone(),
            ..PackageReport::default()
        };

        self.check_presence(&mut report);
        report.files = self.inventory(&report.missing);
        debug!(
            present = report.files.len(),
            missing = report.missing.len(),
            "Presence phase complete"
        );

        if report.missing.is_empty() {
            self.check_tokens(&mut report);
            for shape in EVIDENCE_SHAPES {
                self.check_evidence(shape, &mut report);
            }
            debug!(errors = report.errors.len(), "Shape phase complete");

            self.check_pnie_terms(&mut report);
            self.check_executive_summary(&mut report);
        }

        info!(
            root = %self.root.display(),
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            files = report.files.len(),
            bytes = report.total_bytes(),
            "Package check complete"
        );
        Ok(report)
    }

    fn display_path(&self, rel: &str) -> String {
        self.root.join(rel).display().to_string()
    }

    fn check_presence(&self, report: &mut PackageReport) {
        for rel in REQUIRED_PATHS {
            if !self.root.join(rel).exists() {
                report
                    .errors
                    .push(format!("Missing required file: {}", self.display_path(rel)));
                report.missing.push(rel.to_string());
            }
        }
    }

    fn inventory(&self, missing: &[String]) -> Vec<FileEntry> {
        REQUIRED_PATHS
            .iter()
            .filter(|rel| !missing.iter().any(|m| m == *rel))
            .filter_map(|rel| match std::fs::read(self.root.join(rel)) {
                Ok(data) => Some(FileEntry::from_contents(*rel, &data)),
                Err(e) => {
                    warn!(path = %rel, error = %e, "Skipping unreadable file in inventory");
                    None
                }
            })
            .collect()
    }

    fn read_object(&self, rel: &str, report: &mut PackageReport) -> Option<serde_json::Map<String, Value>> {
        let path = self.display_path(rel);
        match read_json(&self.root.join(rel)) {
            Err(detail) => {
                report.errors.push(format!("{path}: invalid JSON ({detail})"));
                None
            }
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => {
                report.errors.push(format!("{path}: expected top-level object"));
                None
            }
        }
    }

    fn check_tokens(&self, report: &mut PackageReport) {
        let Some(tokens) = self.read_object(TOKENS_PATH, report) else {
            return;
        };
        let missing: Vec<&str> = RECOMMENDED_TOKEN_GROUPS
            .into_iter()
            .filter(|group| !tokens.contains_key(*group))
            .collect();
        if !missing.is_empty() {
            report.warnings.push(format!(
                "{}: missing recommended token groups {missing:?}",
                self.display_path(TOKENS_PATH)
            ));
        }
    }

    fn check_evidence(&self, shape: JsonShape, report: &mut PackageReport) {
        let Some(data) = self.read_object(shape.path, report) else {
            return;
        };
        let missing: Vec<&str> = shape
            .required_keys
            .iter()
            .copied()
            .filter(|key| !data.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            report.errors.push(format!(
                "{}: missing keys {missing:?}",
                self.display_path(shape.path)
            ));
        }
    }

    fn read_text(&self, rel: &str, report: &mut PackageReport) -> Option<String> {
        match std::fs::read_to_string(self.root.join(rel)) {
            Ok(text) => Some(text),
            Err(e) => {
                report
                    .errors
                    .push(format!("{}: unreadable ({e})", self.display_path(rel)));
                None
            }
        }
    }

    fn check_pnie_terms(&self, report: &mut PackageReport) {
        let Some(text) = self.read_text(PNIE_REPORT_PATH, report) else {
            return;
        };
        for term in PNIE_TERMS {
            if !text.contains(term) {
                report
                    .warnings
                    .push(format!("PNIE report does not mention '{term}'"));
            }
        }
    }

    fn check_executive_summary(&self, report: &mut PackageReport) {
        let Some(text) = self.read_text(EXECUTIVE_SUMMARY_PATH, report) else {
            return;
        };
        let lowered = text.to_lowercase();
        if !NON_DERIVATIVE_MARKERS.iter().any(|m| lowered.contains(m)) {
            report.warnings.push(
                "Executive summary may be missing explicit non-derivative guardrail language"
                    .to_string(),
            );
        }
    }
}

/// Check the package at `root`.
pub fn check_package(root: &Path) -> Result<PackageReport> {
    PackageChecker::new(root).check()
}

fn read_json(path: &Path) -> std::result::Result<Value, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lines() {
        let mut report = PackageReport::default();
        assert_eq!(report.summary_line(), "Validation passed with 0 warning(s)");

        report.warnings.push("PNIE report does not mention 'Exclude'".into());
        assert_eq!(report.summary_line(), "Validation passed with 1 warning(s)");

        report.errors.push("tokens/tokens.json: expected top-level object".into());
        assert_eq!(
            report.summary_line(),
            "Validation failed (1 error(s), 1 warning(s))"
        );

        report.missing = vec!["a".into(), "b".into()];
        assert_eq!(
            report.summary_line(),
            "Validation failed (2 missing required files)"
        );
    }

    #[test]
    fn test_human_lines_errors_first() {
        let report = PackageReport {
            errors: vec!["broken".into()],
            warnings: vec!["soft".into()],
            ..PackageReport::default()
        };
        assert_eq!(report.human_lines(), vec!["ERROR: broken", "WARN: soft"]);
    }

    #[test]
    fn test_root_that_is_a_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = check_package(file.path()).unwrap_err();
        assert!(matches!(err, PackageError::NotADirectory(_)));
        let common: psm_common::Error = err.into();
        assert_eq!(common.code(), 20);
    }

    #[test]
    fn test_absent_root_lists_every_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let report = check_package(&dir.path().join("nope")).unwrap();
        assert_eq!(report.missing.len(), REQUIRED_PATHS.len());
        assert!(report.files.is_empty());
        assert!(report.warnings.is_empty());
    }
}
