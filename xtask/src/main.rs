//! Developer tasks (config schema generation, preset listing).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

const CONFIG_SCHEMA_FILE: &str = "audit-gate.config.v1.json";

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    // If we're in the xtask directory, go up one level
    match manifest_dir.parent() {
        Some(parent) if manifest_dir.ends_with("xtask") => parent.to_path_buf(),
        _ => manifest_dir,
    }
}

fn schema_path() -> PathBuf {
    project_root().join("schemas").join(CONFIG_SCHEMA_FILE)
}

/// Pretty-printed JSON schema for `audit-gate.toml`, with trailing newline.
fn config_schema_json() -> anyhow::Result<String> {
    let schema = schema_for!(audit_gate_settings::AuditGateConfigV1);
    let mut json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let path = schema_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create schemas directory")?;
    }
    fs::write(&path, config_schema_json()?)
        .with_context(|| format!("Failed to write schema to {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Check that the committed schema matches what would be generated (for CI).
///
/// Compared as JSON values so key order and whitespace do not matter.
fn check_schemas() -> anyhow::Result<()> {
    let path = schema_path();
    if !path.exists() {
        eprintln!("Missing schema: {}", path.display());
        eprintln!("\nRun `cargo xtask emit-schemas` to generate.");
        bail!("Schema validation failed");
    }

    let actual = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let actual: serde_json::Value = serde_json::from_str(&actual)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let expected: serde_json::Value = serde_json::from_str(&config_schema_json()?)
        .context("Failed to parse generated schema")?;

    if actual != expected {
        eprintln!("Schema out of date: {CONFIG_SCHEMA_FILE}");
        eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
        bail!("Schema validation failed");
    }

    println!("Schema is up to date.");
    Ok(())
}

fn print_presets() -> anyhow::Result<()> {
    for name in audit_gate_settings::preset_names() {
        let list = audit_gate_settings::preset(name)
            .with_context(|| format!("preset listed but not defined: {name}"))?;
        let ids: Vec<&str> = list.iter().map(|id| id.as_str()).collect();
        if ids.is_empty() {
            println!("{name}: (empty)");
        } else {
            println!("{name}: {}", ids.join(" "));
        }
    }
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate the config JSON schema to schemas/");
    eprintln!("  check-schemas     Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-presets     List ignore-list presets and their advisory ids");
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
        "check-schemas" | "validate-schemas" => check_schemas(),
        "print-presets" => print_presets(),
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
