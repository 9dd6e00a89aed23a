use crate::DiscoveryError;
use camino::{Utf8Path, Utf8PathBuf};
use ctrlguard_types::RepoPath;
use globset::{Glob, GlobMatcher};
use std::path::PathBuf;
use walkdir::WalkDir;

/// A file whose name matches the controller pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Path relative to the audited root.
    pub path: RepoPath,
    /// Path usable for reading.
    pub abs: Utf8PathBuf,
}

/// Discover files under `root` whose file name matches `pattern`.
///
/// Behavior:
/// - the pattern is matched against the file name only, never the directory part
/// - traversal is recursive; symlinked files are included (and read through the link), symlinked
///   directories are not descended into
/// - an unreadable subdirectory is skipped with a warning, an unreadable root is fatal
/// - results are sorted by root-relative path
pub fn discover_controllers(
    root: &Utf8Path,
    pattern: &str,
) -> Result<Vec<DiscoveredFile>, DiscoveryError> {
    if !root.exists() {
        return Err(DiscoveryError::RootMissing(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(DiscoveryError::RootNotDirectory(root.to_path_buf()));
    }

    let matcher = compile_pattern(pattern)?;

    let mut out: Vec<DiscoveredFile> = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) if err.depth() == 0 => {
                return Err(DiscoveryError::RootUnreadable {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        // `file_type()` describes the link itself; `path().is_file()` follows it.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file || !matcher.is_match(entry.file_name()) {
            continue;
        }

        let Some(abs) = pathbuf_to_utf8(entry.into_path()) else {
            tracing::warn!("skipping controller with non UTF-8 path");
            continue;
        };

        out.push(DiscoveredFile {
            path: RepoPath::relative_to(root, &abs),
            abs,
        });
    }

    // Stable order.
    out.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(out)
}

fn compile_pattern(pattern: &str) -> Result<GlobMatcher, DiscoveryError> {
    Glob::new(pattern)
        .map(|g| g.compile_matcher())
        .map_err(|source| DiscoveryError::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    #[test]
    fn discovers_recursively_in_path_order() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(&root.join("orders/orders.controller.ts"), "");
        write_file(&root.join("billing/controllers/plans.controller.ts"), "");
        write_file(&root.join("app.controller.ts"), "");
        write_file(&root.join("orders/orders.service.ts"), "");
        write_file(&root.join("orders/orders.controller.spec.ts"), "");

        let found = discover_controllers(&root, "*.controller.ts").expect("discover");
        let paths: Vec<&str> = found.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "app.controller.ts",
                "billing/controllers/plans.controller.ts",
                "orders/orders.controller.ts",
            ]
        );
        assert!(found.iter().all(|f| f.abs.starts_with(&root)));
    }

    #[test]
    fn pattern_matches_file_name_not_directory() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(&root.join("x.controller.ts/readme.md"), "");
        write_file(&root.join("a/b.controller.js"), "");

        let found = discover_controllers(&root, "*.controller.*").expect("discover");
        let paths: Vec<&str> = found.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["a/b.controller.js"]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp).join("nope");

        let err = discover_controllers(&root, "*.controller.ts").unwrap_err();
        assert!(matches!(err, DiscoveryError::RootMissing(_)));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn file_root_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("a.controller.ts"), "");

        let err = discover_controllers(&root.join("a.controller.ts"), "*.controller.ts")
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::RootNotDirectory(_)));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        let err = discover_controllers(&root, "[").unwrap_err();
        assert!(err.to_string().contains("invalid file pattern"));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_controller_is_discovered() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        write_file(&root.join("real/shared.ts"), "export class A {}\n");
        std::os::unix::fs::symlink(root.join("real/shared.ts"), root.join("a.controller.ts"))
            .expect("symlink");

        let found = discover_controllers(&root, "*.controller.ts").expect("discover");
        let paths: Vec<&str> = found.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["a.controller.ts"]);
        assert_eq!(
            std::fs::read_to_string(&found[0].abs).expect("read through link"),
            "export class A {}\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_not_a_candidate() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);

        std::os::unix::fs::symlink(root.join("gone.ts"), root.join("b.controller.ts"))
            .expect("symlink");

        let found = discover_controllers(&root, "*.controller.ts").expect("discover");
        assert!(found.is_empty());
    }

    #[test]
    fn pathbuf_to_utf8_rejects_invalid() {
        #[cfg(windows)]
        {
            use std::ffi::OsString;
            use std::os::windows::ffi::OsStringExt;
            let invalid = OsString::from_wide(&[0xD800]);
            let path = PathBuf::from(invalid);
            assert!(pathbuf_to_utf8(path).is_none());
        }

        #[cfg(unix)]
        {
            use std::ffi::OsString;
            use std::os::unix::ffi::OsStringExt;
            let invalid = OsString::from_vec(vec![0xFF, 0xFE, 0xFD]);
            let path = PathBuf::from(invalid);
            assert!(pathbuf_to_utf8(path).is_none());
        }
    }
}
