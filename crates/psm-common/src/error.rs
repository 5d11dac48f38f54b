//! Error types for the public site modernizer.
//!
//! This module provides structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - Remediation suggestions for humans
//!
//! Validation findings are not errors. A configuration that fails validation
//! is a normal outcome reported as data; the variants here cover conditions
//! that prevent a command from producing its result at all (unreadable input,
//! malformed URL lists, unwritable output).
//!
//! # Agent-Facing Output
//!
//! Errors serialize to structured JSON:
//! ```json
//! {
//!   "code": 11,
//!   "category": "config",
//!   "message": "config must be a top-level JSON object",
//!   "remediation": "Wrap the configuration sections in a single JSON object."
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Crawl configuration could not be loaded.
    Config,
    /// Output package could not be inspected.
    Package,
    /// Run plan could not be rendered.
    Render,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Package => write!(f, "package"),
            ErrorCategory::Render => write!(f, "render"),
        }
    }
}

/// Unified error type for psm commands.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("failed to read JSON: {0}")]
    ConfigLoad(String),

    #[error("config must be a top-level JSON object")]
    ConfigShape,

    // Package errors (20-29)
    #[error("output package root is not a directory: {0}")]
    PackageRoot(String),

    // Render errors (30-39)
    #[error("URL input must be a list or an object with 'urls' or 'pages'")]
    UrlFormat,

    #[error("failed to write run plan to {path}: {reason}")]
    PlanWrite { path: String, reason: String },
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// Error codes are stable and grouped by category:
    /// - 10-19: Configuration errors
    /// - 20-29: Package errors
    /// - 30-39: Render errors
    pub fn code(&self) -> u32 {
        match self {
            Error::ConfigLoad(_) => 10,
            Error::ConfigShape => 11,
            Error::PackageRoot(_) => 20,
            Error::UrlFormat => 30,
            Error::PlanWrite { .. } => 31,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::ConfigLoad(_) | Error::ConfigShape => ErrorCategory::Config,
            Error::PackageRoot(_) => ErrorCategory::Package,
            Error::UrlFormat | Error::PlanWrite { .. } => ErrorCategory::Render,
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::ConfigLoad(_) => {
                "Check that the config path exists and contains valid JSON (e.g. 'jq . <file>')."
            }
            Error::ConfigShape => "Wrap the configuration sections in a single JSON object.",
            Error::PackageRoot(_) => {
                "Pass the directory the workflow wrote its deliverables to, or set PSM_OUTPUT_DIR."
            }
            Error::UrlFormat => {
                "Supply a JSON array of URLs, or an object with a 'urls' array or a 'pages' array of {\"url\": ...} records."
            }
            Error::PlanWrite { .. } => {
                "Check that the output directory exists and is writable, or omit --output to print to stdout."
            }
        }
    }
}

/// Structured error response for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Remediation hint.
    pub remediation: String,

    /// Additional structured context (e.g., file path).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        let mut context = HashMap::new();

        match err {
            Error::PackageRoot(path) => {
                context.insert("root".to_string(), serde_json::json!(path));
            }
            Error::PlanWrite { path, .. } => {
                context.insert("path".to_string(), serde_json::json!(path));
            }
            _ => {}
        }

        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            remediation: err.remediation().to_string(),
            context,
        }
    }
}
