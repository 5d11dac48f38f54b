//! Exit codes for the psm CLI.
//!
//! Exit codes communicate the outcome without requiring output parsing.
//! Argument errors are reported by clap and exit with 2.

use psm_config::ValidationReport;
use psm_package::PackageReport;

/// Exit codes for psm commands.
///
/// These codes are a stable contract for automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Config accepted, package valid, or plan rendered.
    Clean = 0,

    /// Config rejected, package invalid, or the command could not run.
    Failed = 1,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::Failed => "ERR_FAILED",
        }
    }

    pub fn from_validation(report: &ValidationReport) -> Self {
        if report.is_accepted() {
            ExitCode::Clean
        } else {
            ExitCode::Failed
        }
    }

    pub fn from_package(report: &PackageReport) -> Self {
        if report.is_valid() {
            ExitCode::Clean
        } else {
            ExitCode::Failed
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psm_config::Finding;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Clean.as_i32(), 0);
        assert_eq!(ExitCode::Failed.as_i32(), 1);
        assert_eq!(i32::from(ExitCode::Failed), 1);
    }

    #[test]
    fn test_warnings_do_not_fail_validation() {
        let warned = ValidationReport::new(vec![Finding::warning("output", "should be an object if provided")]);
        assert_eq!(ExitCode::from_validation(&warned), ExitCode::Clean);
        let failed = ValidationReport::new(vec![Finding::error("scope", "missing required object")]);
        assert_eq!(ExitCode::from_validation(&failed), ExitCode::Failed);
    }

    #[test]
    fn test_package_exit_codes() {
        let mut report = PackageReport::default();
        report.warnings.push("PNIE report does not mention 'Exclude'".into());
        assert_eq!(ExitCode::from_package(&report), ExitCode::Clean);
        report.errors.push("Missing required file: out/tokens/tokens.css".into());
        assert_eq!(ExitCode::from_package(&report), ExitCode::Failed);
    }

    #[test]
    fn test_code_names() {
        assert_eq!(ExitCode::Clean.code_name(), "OK_CLEAN");
        assert_eq!(ExitCode::Failed.code_name(), "ERR_FAILED");
    }
}
