//! The `audit` use case: discover controllers, evaluate policy, produce a report.

use anyhow::Context;
use ctrlguard_domain::TextualExtractor;
use ctrlguard_domain::policy::Policy;
use ctrlguard_settings::{AuditSettings, Overrides};
use ctrlguard_types::{AuditReport, Verdict};
use time::OffsetDateTime;

use crate::report::build_report;

/// Input for the audit use case.
#[derive(Clone, Debug, Default)]
pub struct AuditInput {
    /// CLI overrides on top of the built-in defaults.
    pub overrides: Overrides,
}

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    /// The generated report.
    pub report: AuditReport,
    /// The resolved settings used.
    pub settings: AuditSettings,
}

/// Run the audit use case: resolve settings, discover and scan controllers, evaluate policy.
///
/// Fails only when settings are invalid or discovery/reading fails; findings are normal output.
pub fn run_audit(input: AuditInput) -> anyhow::Result<AuditOutput> {
    let started_at = OffsetDateTime::now_utc();

    let settings =
        ctrlguard_settings::resolve_settings(input.overrides).context("resolve settings")?;

    let model =
        ctrlguard_repo::build_audit_model(&settings.root, &settings.pattern, &TextualExtractor)
            .context("scan controllers")?;

    let domain_report = ctrlguard_domain::evaluate(&model, &Policy::standard(), settings.fail_on);
    tracing::info!(
        non_compliant = domain_report.summary.files_non_compliant(),
        verdict = ?domain_report.verdict,
        "evaluated controllers"
    );

    let finished_at = OffsetDateTime::now_utc();
    let report = build_report(&settings, domain_report, started_at, finished_at);

    Ok(AuditOutput { report, settings })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
///
/// `Fail` only occurs when the caller opted into gating on findings.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
