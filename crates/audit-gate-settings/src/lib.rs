//! Config parsing and preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

#[cfg(test)]
mod proptest;

pub use model::AuditGateConfigV1;
pub use presets::{preset, preset_names};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `audit-gate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<AuditGateConfigV1> {
    let cfg: AuditGateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the invocation to run (preset + config + overrides).
pub fn resolve_config(
    cfg: AuditGateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
