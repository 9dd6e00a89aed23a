//! Textual signal extraction.
//!
//! Every signal is an independent substring or regex test over the whole file text. Nothing here
//! parses the source; each marker sits behind a named predicate so a parser-backed
//! [`SignalExtractor`] can replace [`TextualExtractor`] without touching evaluation or rendering.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Marker that distinguishes a real controller from a re-export shim.
pub const SUBSTANTIVE_MARKER: &str = "export class";

pub const LOGGER_REFERENCE: &str = "Logger";
pub const LOGGER_CONSTRUCTION: &str = "new Logger";
pub const TRY_BLOCK: &str = "try {";
pub const OPERATION_DOC_MARKER: &str = "@ApiOperation";
pub const RESPONSE_DOC_MARKER: &str = "@ApiResponse";
pub const GUARD_MARKER: &str = "@UseGuards";
pub const PUBLIC_MARKER: &str = "@Public";

/// At least one of these must be documented.
pub const SUCCESS_STATUSES: [u32; 2] = [200, 201];
/// All of these must be documented.
pub const REQUIRED_FAILURE_STATUSES: [u32; 4] = [400, 401, 403, 500];

static STATUS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"status\s*:\s*([0-9]+)").expect("status pattern is valid"));

/// Boolean facts derived from one file's text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SignalSet {
    pub has_logger: bool,
    pub has_error_handling: bool,
    pub has_operation_doc: bool,
    pub has_response_doc: bool,
    pub has_required_statuses: bool,
    pub has_access_control: bool,
}

impl SignalSet {
    /// A set with every signal present.
    pub fn all() -> Self {
        Self {
            has_logger: true,
            has_error_handling: true,
            has_operation_doc: true,
            has_response_doc: true,
            has_required_statuses: true,
            has_access_control: true,
        }
    }
}

/// Turns file text into a [`SignalSet`].
///
/// Implementations must be pure: the same text always yields the same signals.
pub trait SignalExtractor {
    fn extract(&self, text: &str) -> SignalSet;
}

/// The shipped extractor: substring and regex heuristics.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextualExtractor;

impl SignalExtractor for TextualExtractor {
    fn extract(&self, text: &str) -> SignalSet {
        SignalSet {
            has_logger: has_logger(text),
            has_error_handling: has_error_handling(text),
            has_operation_doc: has_operation_doc(text),
            has_response_doc: has_response_doc(text),
            has_required_statuses: covers_required_statuses(&collect_statuses(text)),
            has_access_control: has_access_control(text),
        }
    }
}

/// Whether the file declares an exported class (as opposed to re-exporting one).
pub fn is_substantive(text: &str) -> bool {
    text.contains(SUBSTANTIVE_MARKER)
}

pub fn has_logger(text: &str) -> bool {
    text.contains(LOGGER_REFERENCE) && text.contains(LOGGER_CONSTRUCTION)
}

pub fn has_error_handling(text: &str) -> bool {
    text.contains(TRY_BLOCK)
}

pub fn has_operation_doc(text: &str) -> bool {
    text.contains(OPERATION_DOC_MARKER)
}

pub fn has_response_doc(text: &str) -> bool {
    text.contains(RESPONSE_DOC_MARKER)
}

/// A guard attachment and a public exemption are equally valid evidence.
pub fn has_access_control(text: &str) -> bool {
    text.contains(GUARD_MARKER) || text.contains(PUBLIC_MARKER)
}

/// Every integer written as `status: <n>` anywhere in the file.
///
/// Only ASCII digits count. Literals too large for `u32` cannot be HTTP statuses and are skipped.
pub fn collect_statuses(text: &str) -> BTreeSet<u32> {
    STATUS_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .collect()
}

/// File-level rule: the union of all documented statuses must contain a success status and every
/// required failure status. Statuses are not attributed to individual endpoints.
pub fn covers_required_statuses(statuses: &BTreeSet<u32>) -> bool {
    SUCCESS_STATUSES.iter().any(|s| statuses.contains(s))
        && REQUIRED_FAILURE_STATUSES
            .iter()
            .all(|s| statuses.contains(s))
}
