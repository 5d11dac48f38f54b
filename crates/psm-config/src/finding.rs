//! Validation findings and the per-run report.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Finding severity. Errors block acceptance, warnings never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Line prefix used by the human output protocol.
    pub fn prefix(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One error or warning emitted by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    /// Dotted field locator from the configuration root, e.g. `scope.max_pages`.
    pub path: String,
    pub message: String,
}

impl Finding {
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// `WARN: path: message` / `ERROR: path: message`.
    pub fn human_line(&self) -> String {
        format!("{}: {}", self.severity.prefix(), self)
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Ordered findings of a single validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    /// All findings in the order the rules were checked.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// A run is accepted iff it produced no errors.
    pub fn is_accepted(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Finding lines for terminal output: warnings first, then errors.
    pub fn human_lines(&self) -> Vec<String> {
        self.warnings()
            .chain(self.errors())
            .map(Finding::human_line)
            .collect()
    }

    pub fn summary_line(&self) -> String {
        if self.is_accepted() {
            format!("Config validation passed ({} warning(s))", self.warning_count())
        } else {
            format!(
                "Config validation failed ({} error(s), {} warning(s))",
                self.error_count(),
                self.warning_count()
            )
        }
    }
}

/// Resolve a dotted path against the configuration root.
///
/// Returns `None` when any segment is missing or traverses a non-object.
pub fn lookup_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(root, |node, segment| node.as_object()?.get(segment))
}
