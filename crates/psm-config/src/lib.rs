//! Crawl configuration loading and validation.
//!
//! This crate provides:
//! - Primitive field checkers (boolean, number, URL, allowed values)
//! - One validator per configuration section
//! - The orchestrator that runs every section and the strict guardrails pass
//! - Config loading that separates fatal load failures from findings
//!
//! Validation is a pure function of the configuration: every section runs
//! exactly once per invocation, findings come back in rule order, and the
//! configuration is never mutated.
//!
//! # Example
//!
//! ```
//! use psm_config::{parse_config, validate_config, ValidateOptions};
//!
//! let config = parse_config(r#"{"mode": "brand_faithful_modernization"}"#).unwrap();
//! let report = validate_config(&config, ValidateOptions::default());
//! assert!(!report.is_accepted());
//! assert!(report.errors().any(|f| f.path == "project"));
//! ```

pub mod checks;
pub mod finding;
pub mod load;
pub mod rules;
pub mod sections;
pub mod validate;

pub use finding::{lookup_path, Finding, Severity, ValidationReport};
pub use load::{load_config, parse_config, LoadError};
pub use rules::CrawlMode;
pub use validate::{validate_config, ValidateOptions};

/// A configuration object as read from JSON, keys in document order.
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;
