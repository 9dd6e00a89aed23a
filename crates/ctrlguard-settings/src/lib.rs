//! Run settings and their resolution.
//!
//! This crate is intentionally IO-free: it turns caller-supplied overrides into validated
//! settings. There is no config file and nothing is read from the environment.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{AuditSettings, DEFAULT_PATTERN, DEFAULT_ROOT, OutputFormat};
pub use resolve::{Overrides, resolve_settings};

