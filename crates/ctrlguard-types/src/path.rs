use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical path of an audited file, relative to the audited root.
///
/// Normalization rules:
/// - always forward slashes (`/`), on every platform
/// - no leading `./`
/// - an empty path is spelled `.`
///
/// Ordering is plain byte-wise string ordering, which is what report ordering relies on.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct RepoPath(String);

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while let Some(rest) = v.strip_prefix("./") {
            v = rest.to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    /// Express `path` relative to `root`. Paths outside `root` are kept as given.
    pub fn relative_to(root: &Utf8Path, path: &Utf8Path) -> Self {
        let rel = path.strip_prefix(root).unwrap_or(path);
        RepoPath::new(rel.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
