//! Shared test utilities for the ctrlguard workspace.
//!
//! JSON reports carry wall-clock timestamps and the tool version; everything else in them is a
//! pure function of the audited tree. Tests compare reports after masking those fields.

use serde_json::Value;
use std::path::PathBuf;

const TIMESTAMP_KEYS: [&str; 2] = ["started_at", "ended_at"];
const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
const VERSION_PLACEHOLDER: &str = "__VERSION__";

/// Mask non-deterministic fields of a ctrlguard JSON report.
///
/// - `tool.version` is masked only on the root envelope (a root object with `schema`, `tool`,
///   `run`, `verdict` and `findings`), never inside nested payloads.
/// - `started_at`/`ended_at` become `__TIMESTAMP__` and `duration_ms` becomes `0` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    let is_envelope = value.as_object().is_some_and(|obj| {
        ["schema", "tool", "run", "verdict", "findings"]
            .iter()
            .all(|k| obj.contains_key(*k))
    });
    if is_envelope
        && let Some(version) = value.pointer_mut("/tool/version")
    {
        *version = Value::String(VERSION_PLACEHOLDER.to_string());
    }
    mask_run_fields(&mut value);
    value
}

fn mask_run_fields(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                if TIMESTAMP_KEYS.contains(&key.as_str()) {
                    *val = Value::String(TIMESTAMP_PLACEHOLDER.to_string());
                } else if key == "duration_ms" {
                    *val = Value::Number(0.into());
                } else {
                    mask_run_fields(val);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(mask_run_fields),
        _ => {}
    }
}

/// `tests/fixtures` at the workspace root, given a member crate's `CARGO_MANIFEST_DIR`.
pub fn fixtures_dir(manifest_dir: &str) -> PathBuf {
    let mut dir = PathBuf::from(manifest_dir);
    // crates/<member> -> crates -> workspace root
    dir.pop();
    dir.pop();
    dir.join("tests").join("fixtures")
}
