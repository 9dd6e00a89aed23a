//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Signal extraction determinism and insensitivity to line order
//! - The file-level status-set rule
//! - Evaluation and finding order

use crate::engine::{evaluate, evaluate_signals};
use crate::model::{AuditModel, ControllerSignals};
use crate::policy::{FailOn, Policy};
use crate::signals::{
    REQUIRED_FAILURE_STATUSES, SUCCESS_STATUSES, SignalExtractor, SignalSet, TextualExtractor,
    collect_statuses, covers_required_statuses,
};
use crate::test_support::compliant_controller;
use ctrlguard_types::RepoPath;
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies
// ============================================================================

/// Lines that cannot form or break any marker.
fn arb_filler_line() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z ]{0,30}").unwrap()
}

/// The compliant controller's lines plus filler, in arbitrary order.
fn arb_reordered_controller() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_filler_line(), 0..10).prop_flat_map(|filler| {
        let mut lines: Vec<String> = compliant_controller().lines().map(str::to_string).collect();
        lines.extend(filler);
        Just(lines).prop_shuffle()
    })
}

fn arb_signal_set() -> impl Strategy<Value = SignalSet> {
    any::<(bool, bool, bool, bool, bool, bool)>().prop_map(|(a, b, c, d, e, f)| SignalSet {
        has_logger: a,
        has_error_handling: b,
        has_operation_doc: c,
        has_response_doc: d,
        has_required_statuses: e,
        has_access_control: f,
    })
}

fn arb_status() -> impl Strategy<Value = u32> {
    prop_oneof![
        prop::sample::select(vec![200u32, 201, 204, 400, 401, 403, 404, 409, 500]),
        100u32..600,
    ]
}

fn arb_controller_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}(/[a-z]{1,8}){0,2}\\.controller\\.ts").unwrap()
}

fn signal_count(s: &SignalSet) -> usize {
    [
        s.has_logger,
        s.has_error_handling,
        s.has_operation_doc,
        s.has_response_doc,
        s.has_required_statuses,
        s.has_access_control,
    ]
    .iter()
    .filter(|b| **b)
    .count()
}

// ============================================================================
// Extraction
// ============================================================================

proptest! {
    /// Extraction is a pure function of the text.
    #[test]
    fn extraction_is_deterministic(text in ".{0,400}") {
        let a = TextualExtractor.extract(&text);
        let b = TextualExtractor.extract(&text);
        prop_assert_eq!(a, b);
    }

    /// Reordering lines and adding unrelated lines never changes the signals.
    #[test]
    fn line_order_does_not_matter(lines in arb_reordered_controller()) {
        let baseline = TextualExtractor.extract(&compliant_controller());
        prop_assert_eq!(TextualExtractor.extract(&lines.join("\n")), baseline);
    }

    /// Statuses scattered among unrelated lines are collected as a set.
    #[test]
    fn status_rule_matches_set_semantics(
        statuses in prop::collection::vec(arb_status(), 0..12),
        filler in prop::collection::vec(arb_filler_line(), 0..6),
    ) {
        let mut lines: Vec<String> = statuses
            .iter()
            .map(|s| format!("  @ApiResponse({{ status: {s}, description: 'x' }})"))
            .collect();
        lines.extend(filler);
        let text = lines.join("\n");

        let expected: BTreeSet<u32> = statuses.iter().copied().collect();
        prop_assert_eq!(collect_statuses(&text), expected.clone());

        let want = SUCCESS_STATUSES.iter().any(|s| expected.contains(s))
            && REQUIRED_FAILURE_STATUSES.iter().all(|s| expected.contains(s));
        prop_assert_eq!(covers_required_statuses(&expected), want);
        prop_assert_eq!(TextualExtractor.extract(&text).has_required_statuses, want);
    }
}

// ============================================================================
// Evaluation
// ============================================================================

proptest! {
    /// One missing entry per absent signal; compliant iff nothing is missing.
    #[test]
    fn missing_count_matches_absent_signals(signals in arb_signal_set()) {
        let policy = Policy::standard();
        let eval = evaluate_signals(&policy, &signals);
        let absent = policy.requirements().len() - signal_count(&signals);
        prop_assert_eq!(eval.missing.len(), absent);
        prop_assert_eq!(eval.compliant, absent == 0);
    }

    /// Missing requirements always appear in policy declaration order.
    #[test]
    fn missing_is_a_subsequence_of_policy(signals in arb_signal_set()) {
        let policy = Policy::standard();
        let eval = evaluate_signals(&policy, &signals);
        let order: Vec<&str> = policy.requirements().iter().map(|r| r.id).collect();
        let positions: Vec<usize> = eval
            .missing
            .iter()
            .map(|r| order.iter().position(|id| *id == r.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Findings come out in path order whatever order the model lists controllers in.
    #[test]
    fn findings_are_sorted_by_path(
        entries in prop::collection::btree_map(arb_controller_path(), arb_signal_set(), 0..16),
    ) {
        let mut controllers: Vec<ControllerSignals> = entries
            .iter()
            .map(|(p, s)| ControllerSignals { path: RepoPath::new(p), signals: *s })
            .collect();
        controllers.reverse();

        let model = AuditModel {
            discovered: controllers.iter().map(|c| c.path.clone()).collect(),
            controllers,
        };

        let report = evaluate(&model, &Policy::standard(), FailOn::Never);
        let paths: Vec<&str> = report.summary.findings.iter().map(|f| f.path.as_str()).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        prop_assert_eq!(&paths, &sorted);

        let expected_failures = entries.values().filter(|s| signal_count(s) < 6).count();
        prop_assert_eq!(report.summary.findings.len(), expected_failures);
    }
}
