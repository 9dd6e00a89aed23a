//! Stable DTOs and IDs used across the ctrlguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted JSON report
//! - stable requirement IDs and their human-readable labels
//! - canonical root-relative path handling
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use path::RepoPath;
pub use receipt::{
    AuditData, AuditReport, Finding, ReportEnvelope, RunMeta, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
