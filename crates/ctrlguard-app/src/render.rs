//! Render use cases: turn an in-memory report into the requested output format.

use anyhow::Context;
use camino::Utf8Path;
use ctrlguard_settings::OutputFormat;
use ctrlguard_types::AuditReport;

use crate::report::{serialize_report, to_renderable};

pub fn render_report(report: &AuditReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(ctrlguard_render::render_text(&to_renderable(report))),
        OutputFormat::Markdown => Ok(ctrlguard_render::render_markdown(&to_renderable(report))),
        OutputFormat::Json => {
            let bytes = serialize_report(report)?;
            String::from_utf8(bytes).context("report json is not UTF-8")
        }
    }
}

/// Write rendered output, creating parent directories as needed.
pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AuditInput, run_audit};
    use ctrlguard_settings::Overrides;

    fn audited_report(root: &Utf8Path) -> AuditReport {
        std::fs::create_dir_all(root.join("orders")).expect("mkdir");
        std::fs::write(
            root.join("orders/orders.controller.ts"),
            "export class OrdersController {\n  @UseGuards(JwtAuthGuard)\n}\n",
        )
        .expect("write");
        run_audit(AuditInput {
            overrides: Overrides {
                root: Some(root.to_path_buf()),
                ..Overrides::default()
            },
        })
        .expect("run_audit")
        .report
    }

    #[test]
    fn text_format_lists_missing_labels() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8");

        let text = render_report(&audited_report(root), OutputFormat::Text).expect("render");
        assert_eq!(
            text,
            "Found 1 controller files (real controllers: 1).\n\
             Controllers needing work (heuristic): 1\n\n\
             - orders/orders.controller.ts: \
             missing logger, try/catch, ApiOperation, ApiResponse, status set\n"
        );
    }

    #[test]
    fn json_format_is_a_v1_envelope() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8");

        let json = render_report(&audited_report(root), OutputFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(value["schema"], "ctrlguard.report.v1");
        assert_eq!(value["verdict"], "warn");
        assert_eq!(value["findings"][0]["labels"][5], serde_json::Value::Null);
        assert_eq!(value["findings"][0]["labels"][4], "status set");
    }

    #[test]
    fn markdown_format_renders_table() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8");

        let md = render_report(&audited_report(root), OutputFormat::Markdown).expect("render");
        assert!(md.contains("| `orders/orders.controller.ts` |"));
    }

    #[test]
    fn write_text_creates_parents() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8");
        let out = root.join("artifacts/ctrlguard/report.md");

        write_text(&out, "hello\n").expect("write");
        assert_eq!(std::fs::read_to_string(&out).expect("read"), "hello\n");
    }
}
