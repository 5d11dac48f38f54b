//! Public site modernizer common types and errors.
//!
//! This crate provides foundational types shared across the psm crates:
//! - Common error type with stable codes and remediation hints
//! - Output format selection for CLI commands
//! - Workflow constants shared by the validator and the run-plan renderer

pub mod error;
pub mod output;

pub use error::{Error, ErrorCategory};
pub use output::OutputFormat;

/// Schema version for machine-readable command output.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// The only operating mode the workflow supports.
pub const SUPPORTED_MODE: &str = "brand_faithful_modernization";

/// Default root directory of a generated output package.
pub const DEFAULT_OUTPUT_DIR: &str = "design-system-output";
