use crate::policy::Requirement;
use ctrlguard_types::{RepoPath, Verdict};

/// Result of evaluating one file's signals against the policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub compliant: bool,
    /// Failed requirements in policy declaration order.
    pub missing: Vec<Requirement>,
}

/// A non-compliant controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditFinding {
    pub path: RepoPath,
    pub missing: Vec<Requirement>,
}

impl AuditFinding {
    pub fn missing_ids(&self) -> Vec<&'static str> {
        self.missing.iter().map(|r| r.id).collect()
    }

    pub fn missing_labels(&self) -> Vec<&'static str> {
        self.missing.iter().map(|r| r.label).collect()
    }

    /// `missing logger, try/catch`
    pub fn message(&self) -> String {
        format!("missing {}", self.missing_labels().join(", "))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditSummary {
    pub files_discovered: u32,
    pub files_substantive: u32,
    /// Non-compliant files in lexicographic path order.
    pub findings: Vec<AuditFinding>,
}

impl AuditSummary {
    pub fn files_non_compliant(&self) -> u32 {
        self.findings.len() as u32
    }
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub summary: AuditSummary,
}
