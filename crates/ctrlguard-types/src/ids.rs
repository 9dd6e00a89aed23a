//! Stable identifiers for policy requirements.
//!
//! The id is a dotted namespace used in JSON reports and `explain`. The label is what the text
//! report prints after `missing`; labels are part of the output contract and must not change.

// Requirement ids
pub const REQ_LOGGER: &str = "controller.logger";
pub const REQ_ERROR_HANDLING: &str = "controller.error_handling";
pub const REQ_OPERATION_DOC: &str = "controller.operation_doc";
pub const REQ_RESPONSE_DOC: &str = "controller.response_doc";
pub const REQ_STATUS_SET: &str = "controller.status_set";
pub const REQ_ACCESS_CONTROL: &str = "controller.access_control";

// Labels, in the same order as the ids above
pub const LABEL_LOGGER: &str = "logger";
pub const LABEL_ERROR_HANDLING: &str = "try/catch";
pub const LABEL_OPERATION_DOC: &str = "ApiOperation";
pub const LABEL_RESPONSE_DOC: &str = "ApiResponse";
pub const LABEL_STATUS_SET: &str = "status set";
pub const LABEL_ACCESS_CONTROL: &str = "access control";
