use crate::model::{AuditSettings, OutputFormat};
use anyhow::Context;
use camino::Utf8PathBuf;
use ctrlguard_domain::policy::FailOn;
use globset::Glob;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub root: Option<Utf8PathBuf>,
    pub pattern: Option<String>,
    pub format: Option<String>,
    pub fail_on_findings: bool,
}

/// Apply overrides on top of the built-in defaults.
pub fn resolve_settings(overrides: Overrides) -> anyhow::Result<AuditSettings> {
    let mut settings = AuditSettings::default();

    if let Some(root) = overrides.root {
        if root.as_str().trim().is_empty() {
            anyhow::bail!("audit root must not be empty");
        }
        settings.root = root;
    }

    if let Some(pattern) = overrides.pattern {
        validate_pattern(&pattern)?;
        settings.pattern = pattern;
    }

    if let Some(format) = overrides.format.as_deref() {
        settings.format = parse_format(format)?;
    }

    if overrides.fail_on_findings {
        settings.fail_on = FailOn::Findings;
    }

    Ok(settings)
}

fn validate_pattern(pattern: &str) -> anyhow::Result<()> {
    if pattern.contains('/') || pattern.contains('\\') {
        anyhow::bail!("file pattern matches file names only, got a path: {pattern}");
    }
    Glob::new(pattern).with_context(|| format!("invalid file pattern: {pattern}"))?;
    Ok(())
}

pub(crate) fn parse_format(v: &str) -> anyhow::Result<OutputFormat> {
    match v {
        "text" | "txt" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        other => anyhow::bail!("unknown format: {other} (expected text|json|markdown)"),
    }
}
