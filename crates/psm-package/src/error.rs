//! Error types for package checks.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a package from being checked at all.
///
/// Problems with the package contents are reported as findings instead.
#[derive(Error, Debug)]
pub enum PackageError {
    /// The root exists but is not a directory.
    #[error("output package root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Result type alias for package operations.
pub type Result<T> = std::result::Result<T, PackageError>;

impl From<PackageError> for psm_common::Error {
    fn from(err: PackageError) -> Self {
        match err {
            PackageError::NotADirectory(path) => {
                psm_common::Error::PackageRoot(path.display().to_string())
            }
        }
    }
}
