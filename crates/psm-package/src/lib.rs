//! Output package checker for the design-system workflow.
//!
//! A package is the directory tree the workflow leaves behind: reports,
//! design tokens, component specs, page patterns, and crawl evidence.
//! Checking runs in three phases:
//!
//! 1. Presence of every required file (stops here on any miss)
//! 2. JSON shape of the token file and the evidence files
//! 3. Terminology in the PNIE report and the executive summary
//!
//! The report also carries a SHA-256 inventory of the files it found.
//!
//! # Example
//!
//! ```no_run
//! use psm_package::check_package;
//! use std::path::Path;
//!
//! let report = check_package(Path::new("design-system-output")).unwrap();
//! for line in report.human_lines() {
//!     println!("{line}");
//! }
//! println!("{}", report.summary_line());
//! ```

pub mod checker;
pub mod error;
pub mod manifest;

pub use checker::{check_package, PackageChecker, PackageReport};
pub use error::{PackageError, Result};
pub use manifest::{FileEntry, JsonShape, REQUIRED_PATHS};
