//! Developer tasks (schema generation, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use ctrlguard_types::explain;
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Workspace root: the parent of the xtask manifest directory.
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(PathBuf::from)
            .context("xtask directory has no parent")
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(ctrlguard_types::AuditReport)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![SchemaSpec {
        filename: "ctrlguard.report.v1.json",
        generate: generate_report_schema,
    }]
}

/// Pretty-printed JSON with a trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json).with_context(|| format!("write schema: {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Fails when a checked-in schema is missing or differs from the generated one.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut stale = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        let expected = serde_json::to_value((spec.generate)()).context("serialize schema")?;
        let Ok(text) = fs::read_to_string(&path) else {
            stale.push(format!("{} (missing)", spec.filename));
            continue;
        };
        // Compared as JSON values so key order and whitespace do not matter.
        match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(actual) if actual == expected => {}
            Ok(_) => stale.push(format!("{} (out of date)", spec.filename)),
            Err(_) => stale.push(format!("{} (not valid JSON)", spec.filename)),
        }
    }

    if stale.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    for entry in &stale {
        eprintln!("  - {}", entry);
    }
    eprintln!("\nRun `cargo run -p xtask -- emit-schemas` to regenerate.");
    bail!("schema validation failed")
}

/// Every requirement id and label must resolve to a complete explanation.
fn explain_coverage() -> anyhow::Result<()> {
    let mut errors = Vec::new();

    let identifiers = explain::all_requirement_ids()
        .iter()
        .chain(explain::all_labels())
        .copied();
    for identifier in identifiers {
        let Some(exp) = explain::lookup_explanation(identifier) else {
            errors.push(format!("'{}' has no explanation", identifier));
            continue;
        };
        for (field, value) in [
            ("title", exp.title),
            ("description", exp.description),
            ("remediation", exp.remediation),
            ("before example", exp.examples.before),
            ("after example", exp.examples.after),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("'{}' has empty {}", identifier, field));
            }
        }
    }

    if errors.is_empty() {
        println!(
            "{} requirement ids and {} labels have explanations",
            explain::all_requirement_ids().len(),
            explain::all_labels().len()
        );
        return Ok(());
    }

    for error in &errors {
        eprintln!("  - {}", error);
    }
    bail!("explain coverage failed with {} errors", errors.len())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  explain-coverage  Check every requirement id and label has an explanation");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "explain-coverage" => explain_coverage(),
        other => bail!(
            "unknown xtask command: {other}\n\nRun `cargo run -p xtask -- help` for usage."
        ),
    }
    .context("xtask failed")
}
