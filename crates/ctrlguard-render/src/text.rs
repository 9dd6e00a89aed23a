use crate::RenderableReport;

/// Render the plain-text report.
///
/// Two summary lines and a blank line, then one `- <path>: missing <a>, <b>` line per finding.
/// The exact shape is an output contract; scripts diff it.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Found {} controller files (real controllers: {}).\n",
        report.data.files_discovered, report.data.files_substantive
    ));
    out.push_str(&format!(
        "Controllers needing work (heuristic): {}\n\n",
        report.data.files_non_compliant
    ));

    for f in &report.findings {
        out.push_str(&format!("- {}: missing {}\n", f.path, f.labels.join(", ")));
    }

    out
}
