use crate::{RenderableReport, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Controller audit\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Root: `{}`\n- Controller files: {} (real: {})\n\
         - Needing work: {}\n\n",
        verdict,
        report.data.root,
        report.data.files_discovered,
        report.data.files_substantive,
        report.data.files_non_compliant
    ));

    if report.findings.is_empty() {
        out.push_str("All controllers satisfy the policy.\n");
        return out;
    }

    out.push_str("## Controllers needing work\n\n");
    out.push_str("| Controller | Missing |\n");
    out.push_str("| --- | --- |\n");

    for f in &report.findings {
        out.push_str(&format!(
            "| `{}` | {} |\n",
            f.path,
            escape_cell(&f.labels.join(", "))
        ));
    }

    out
}

/// `|` would end the table cell.
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
