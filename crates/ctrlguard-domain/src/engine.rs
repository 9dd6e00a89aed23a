use crate::model::AuditModel;
use crate::policy::{FailOn, Policy};
use crate::report::{AuditFinding, AuditSummary, DomainReport, Evaluation};
use crate::signals::SignalSet;
use ctrlguard_types::Verdict;

/// Evaluate one file's signals. Pure and total.
pub fn evaluate_signals(policy: &Policy, signals: &SignalSet) -> Evaluation {
    let missing: Vec<_> = policy
        .requirements()
        .iter()
        .filter(|req| !req.is_satisfied_by(signals))
        .copied()
        .collect();

    Evaluation {
        compliant: missing.is_empty(),
        missing,
    }
}

/// Evaluate every substantive controller in the model and build the run summary.
pub fn evaluate(model: &AuditModel, policy: &Policy, fail_on: FailOn) -> DomainReport {
    let mut findings: Vec<AuditFinding> = model
        .controllers
        .iter()
        .filter_map(|c| {
            let eval = evaluate_signals(policy, &c.signals);
            (!eval.compliant).then(|| AuditFinding {
                path: c.path.clone(),
                missing: eval.missing,
            })
        })
        .collect();

    // The model is usually sorted already; ordering must not depend on that.
    findings.sort_by(|a, b| a.path.cmp(&b.path));

    let summary = AuditSummary {
        files_discovered: model.files_discovered() as u32,
        files_substantive: model.files_substantive() as u32,
        findings,
    };

    DomainReport {
        verdict: compute_verdict(&summary, fail_on),
        summary,
    }
}

fn compute_verdict(summary: &AuditSummary, fail_on: FailOn) -> Verdict {
    if summary.findings.is_empty() {
        return Verdict::Pass;
    }
    match fail_on {
        FailOn::Never => Verdict::Warn,
        FailOn::Findings => Verdict::Fail,
    }
}
