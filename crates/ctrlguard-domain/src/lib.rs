//! Pure controller evaluation (no IO).
//!
//! Input: decoded file text (for signals) or an audit model constructed elsewhere.
//! Output: signal sets, per-file evaluations, and the run summary.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;
pub mod signals;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{evaluate, evaluate_signals};
pub use fingerprint::fingerprint_for_finding;
pub use signals::{SignalExtractor, SignalSet, TextualExtractor};
