//! Error types for run-plan rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while preparing or writing a run plan.
#[derive(Error, Debug)]
pub enum ReportError {
    /// URL input has none of the accepted shapes.
    #[error("URL input must be a list or an object with 'urls' or 'pages'")]
    UrlFormat,

    /// URL input file could not be read.
    #[error("failed to read JSON: {path}: {source}")]
    UrlRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// URL input file is not valid JSON.
    #[error("failed to read JSON: {0}")]
    UrlParse(#[from] serde_json::Error),

    /// Rendered plan could not be written.
    #[error("failed to write run plan to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ReportError> for psm_common::Error {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::UrlFormat => psm_common::Error::UrlFormat,
            ReportError::UrlRead { path, source } => {
                psm_common::Error::ConfigLoad(format!("{}: {}", path.display(), source))
            }
            ReportError::UrlParse(source) => psm_common::Error::ConfigLoad(source.to_string()),
            ReportError::Write { path, source } => psm_common::Error::PlanWrite {
                path: path.display().to_string(),
                reason: source.to_string(),
            },
        }
    }
}
