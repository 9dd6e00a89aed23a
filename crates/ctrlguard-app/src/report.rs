use anyhow::Context;
use ctrlguard_domain::fingerprint_for_finding;
use ctrlguard_domain::report::{AuditFinding, DomainReport};
use ctrlguard_render::{
    RenderableData, RenderableFinding, RenderableReport, RenderableVerdictStatus,
};
use ctrlguard_settings::AuditSettings;
use ctrlguard_types::{
    AuditData, AuditReport, Finding, ReportEnvelope, RunMeta, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
use time::OffsetDateTime;

/// Wrap a domain report in the versioned JSON envelope.
pub fn build_report(
    settings: &AuditSettings,
    domain: DomainReport,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
) -> AuditReport {
    let duration_ms = (finished_at - started_at).whole_milliseconds().max(0) as u64;
    let summary = domain.summary;

    let data = AuditData {
        root: settings.root.as_str().to_string(),
        pattern: settings.pattern.clone(),
        files_discovered: summary.files_discovered,
        files_substantive: summary.files_substantive,
        files_non_compliant: summary.files_non_compliant(),
    };

    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "ctrlguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        run: RunMeta {
            started_at,
            ended_at: finished_at,
            duration_ms,
        },
        verdict: domain.verdict,
        findings: summary.findings.iter().map(finding_from_domain).collect(),
        data,
    }
}

fn finding_from_domain(f: &AuditFinding) -> Finding {
    let ids = f.missing_ids();
    Finding {
        path: f.path.clone(),
        missing: ids.iter().map(|id| id.to_string()).collect(),
        labels: f.missing_labels().iter().map(|l| l.to_string()).collect(),
        message: f.message(),
        fingerprint: Some(fingerprint_for_finding(f.path.as_str(), &ids)),
    }
}

pub fn serialize_report(report: &AuditReport) -> anyhow::Result<Vec<u8>> {
    let mut out = serde_json::to_vec_pretty(report).context("serialize report")?;
    out.push(b'\n');
    Ok(out)
}

pub fn to_renderable(report: &AuditReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report
            .findings
            .iter()
            .map(|f| RenderableFinding {
                path: f.path.as_str().to_string(),
                labels: f.labels.clone(),
            })
            .collect(),
        data: RenderableData {
            root: report.data.root.clone(),
            files_discovered: report.data.files_discovered,
            files_substantive: report.data.files_substantive,
            files_non_compliant: report.data.files_non_compliant,
        },
    }
}
