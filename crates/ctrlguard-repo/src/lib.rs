//! Repository adapters: discover controller files, read them, extract signals.
//!
//! This crate is allowed to do filesystem IO. It never writes. Extraction runs on rayon's pool;
//! the resulting model is always in root-relative path order.

#![forbid(unsafe_code)]

mod discover;
mod error;

use camino::Utf8Path;
use ctrlguard_domain::model::{AuditModel, ControllerSignals};
use ctrlguard_domain::signals::{SignalExtractor, is_substantive};
use rayon::prelude::*;
use std::borrow::Cow;

pub use discover::{DiscoveredFile, discover_controllers};
pub use error::DiscoveryError;

/// Read a file as text, substituting U+FFFD for invalid UTF-8 instead of failing.
pub fn read_lossy(path: &Utf8Path) -> Result<String, DiscoveryError> {
    let bytes = std::fs::read(path).map_err(|source| DiscoveryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match String::from_utf8_lossy(&bytes) {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => {
            tracing::debug!(path = %path, "replaced invalid UTF-8 sequences");
            s
        }
    })
}

/// Build the in-memory model the policy engine evaluates.
///
/// Every discovered file counts toward `discovered`; only substantive files are handed to the
/// extractor. File text is dropped as soon as its signals are known.
pub fn build_audit_model<E>(
    root: &Utf8Path,
    pattern: &str,
    extractor: &E,
) -> Result<AuditModel, DiscoveryError>
where
    E: SignalExtractor + Sync,
{
    let files = discover_controllers(root, pattern)?;
    tracing::info!(root = %root, pattern, files = files.len(), "discovered controller files");

    let scanned: Vec<Option<ControllerSignals>> = files
        .par_iter()
        .map(|file| scan_file(file, extractor))
        .collect::<Result<_, _>>()?;

    let mut controllers: Vec<ControllerSignals> = scanned.into_iter().flatten().collect();
    // par_iter preserves input order, but the report contract does not lean on that.
    controllers.sort_by(|a, b| a.path.cmp(&b.path));

    tracing::info!(
        substantive = controllers.len(),
        "extracted signals from substantive controllers"
    );

    Ok(AuditModel {
        discovered: files.into_iter().map(|f| f.path).collect(),
        controllers,
    })
}

fn scan_file<E: SignalExtractor>(
    file: &DiscoveredFile,
    extractor: &E,
) -> Result<Option<ControllerSignals>, DiscoveryError> {
    let text = read_lossy(&file.abs)?;
    if !is_substantive(&text) {
        tracing::debug!(path = %file.path, "skipping re-export shim");
        return Ok(None);
    }

    let signals = extractor.extract(&text);
    tracing::debug!(path = %file.path, ?signals, "extracted signals");
    Ok(Some(ControllerSignals {
        path: file.path.clone(),
        signals,
    }))
}
