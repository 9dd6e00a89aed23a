//! The `explain` use case: look up requirement documentation.

use ctrlguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes the known ids and labels.
    NotFound {
        identifier: String,
        available_ids: &'static [&'static str],
        available_labels: &'static [&'static str],
    },
}

/// Look up an explanation for a requirement id or label.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_ids: explain::all_requirement_ids(),
            available_labels: explain::all_labels(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\nRemediation\n-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\nExamples\n--------\n\n");
    for (heading, code) in [
        ("Before (reported):", exp.examples.before),
        ("After (compliant):", exp.examples.after),
    ] {
        out.push_str(heading);
        out.push_str("\n```ts\n");
        out.push_str(code);
        out.push_str("\n```\n\n");
    }
    out.truncate(out.trim_end().len());
    out.push('\n');

    out
}

/// Format the "not found" message for terminal display.
pub fn format_not_found(identifier: &str, ids: &[&'static str], labels: &[&'static str]) -> String {
    let mut out = format!("Unknown requirement: {}\n\nAvailable ids:\n", identifier);
    for id in ids {
        out.push_str(&format!("  - {}\n", id));
    }
    out.push_str("\nAvailable labels:\n");
    for label in labels {
        out.push_str(&format!("  - {}\n", label));
    }
    out
}
