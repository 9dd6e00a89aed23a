use crate::RepoPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for ctrlguard JSON reports.
pub const SCHEMA_REPORT_V1: &str = "ctrlguard.report.v1";

/// Overall outcome of a run.
///
/// The auditor is advisory: findings produce `warn` unless the caller opted into gating, in which
/// case they produce `fail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunMeta {
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub ended_at: OffsetDateTime,
    pub duration_ms: u64,
}

/// One non-compliant controller file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    /// Path relative to the audited root.
    pub path: RepoPath,
    /// Missing requirement ids, in policy order.
    pub missing: Vec<String>,
    /// Human-readable labels for `missing`, same order.
    pub labels: Vec<String>,
    pub message: String,

    /// SHA-256 over `path|id,id,...`; stable across runs for dedup and trending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

/// Summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct AuditData {
    pub root: String,
    pub pattern: String,

    pub files_discovered: u32,
    pub files_substantive: u32,
    pub files_non_compliant: u32,
}

/// A generic report envelope with a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = AuditData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    pub run: RunMeta,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type AuditReport = ReportEnvelope<AuditData>;
