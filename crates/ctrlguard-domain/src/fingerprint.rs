use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a controller finding.
///
/// Identity fields:
/// - path (root-relative)
/// - missing requirement ids, in policy order
pub fn fingerprint_for_finding(path: &str, missing_ids: &[&str]) -> String {
    let canonical = format!("{}|{}", path, missing_ids.join(","));

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
