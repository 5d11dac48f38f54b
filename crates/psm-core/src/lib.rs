//! Public site modernizer core library.
//!
//! Shared pieces of the `psm` binary:
//! - Exit codes
//! - Structured logging on stderr
//! - JSON envelopes for machine-readable command output

pub mod envelope;
pub mod exit_codes;
pub mod logging;

pub use exit_codes::ExitCode;
