use crate::signals::SignalSet;
use ctrlguard_types::RepoPath;

/// Everything the engine needs about one audit run, built by the repo layer.
#[derive(Clone, Debug, Default)]
pub struct AuditModel {
    /// Every file matching the name pattern, substantive or not.
    pub discovered: Vec<RepoPath>,

    /// Signals for the substantive files only.
    pub controllers: Vec<ControllerSignals>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerSignals {
    pub path: RepoPath,
    pub signals: SignalSet,
}

impl AuditModel {
    pub fn files_discovered(&self) -> usize {
        self.discovered.len()
    }

    pub fn files_substantive(&self) -> usize {
        self.controllers.len()
    }
}
