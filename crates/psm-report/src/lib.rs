//! Run-plan preview renderer for site modernization crawls.
//!
//! Turns a crawl configuration plus an optional list of candidate URLs into
//! a markdown document a human reviews before any crawling starts.
//!
//! # Sections
//!
//! - Project intent: mode, source, audience, intended use
//! - Crawl scope and excluded paths
//! - Selected URLs, truncated to `max_pages`
//! - Capture settings and quality controls
//! - Output artifacts, plan-level warnings, estimated workload
//!
//! Rendering is lenient: absent or mistyped fields fall back to the
//! workflow defaults instead of failing. Run the validator first when
//! correctness matters.
//!
//! # Example
//!
//! ```
//! use psm_config::parse_config;
//! use psm_report::{normalize_urls, RunPlan};
//! use serde_json::json;
//!
//! let config = parse_config(r#"{"project": {"name": "Acme"}, "scope": {"max_pages": 1}}"#).unwrap();
//! let urls = normalize_urls(Some(&json!(["https://acme.example/", "https://acme.example/about"]))).unwrap();
//! let markdown = RunPlan::from_config(&config, &urls).render();
//! assert!(markdown.starts_with("# Run Plan Preview: Acme\n"));
//! assert!(markdown.contains("1 additional URLs not shown"));
//! ```

pub mod error;
pub mod generator;
pub mod sections;
pub mod urls;
pub mod workload;

pub use error::{ReportError, Result};
pub use generator::{write_plan, RunPlan};
pub use urls::{load_urls, normalize_urls};
pub use workload::{workload_class, WorkloadClass};
