use camino::Utf8PathBuf;
use ctrlguard_domain::policy::FailOn;

/// Source root of the audited project, relative to the working directory.
pub const DEFAULT_ROOT: &str = "backend/src";

/// File-name convention for controller-like files.
pub const DEFAULT_PATTERN: &str = "*.controller.ts";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Summary lines plus one `- path: missing ...` line per finding.
    #[default]
    Text,
    Json,
    Markdown,
}

/// Effective settings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditSettings {
    pub root: Utf8PathBuf,
    pub pattern: String,
    pub format: OutputFormat,
    pub fail_on: FailOn,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from(DEFAULT_ROOT),
            pattern: DEFAULT_PATTERN.to_string(),
            format: OutputFormat::Text,
            fail_on: FailOn::Never,
        }
    }
}
