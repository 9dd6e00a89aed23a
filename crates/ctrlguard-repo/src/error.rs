use camino::Utf8PathBuf;

/// Failures that abort a run before any report is produced.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("audit root does not exist: {0}")]
    RootMissing(Utf8PathBuf),

    #[error("audit root is not a directory: {0}")]
    RootNotDirectory(Utf8PathBuf),

    #[error("audit root is not readable: {path}")]
    RootUnreadable {
        path: Utf8PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("invalid file pattern: {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}
