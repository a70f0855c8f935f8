use crate::{model::AuditGateConfigV1, presets};
use anyhow::Context;
use audit_gate_types::ids::{
    DEFAULT_PROGRAM, DEFAULT_PROGRAM_ARGS, PROFILE_DEFAULT, SCHEMA_CONFIG_V1,
};
use audit_gate_types::{AdvisoryId, IgnoreList, Invocation};

/// Values supplied on the command line. They win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    /// Appended after the config's `ignore` entries.
    pub ignore: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub profile: String,
    pub invocation: Invocation,
}

pub fn resolve_config(
    cfg: AuditGateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| PROFILE_DEFAULT.to_string());

    let mut ignore = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected one of: {})",
            presets::preset_names().join(", ")
        )
    })?;

    // First occurrence wins: preset, then config, then command line.
    extend_unique(&mut ignore, &cfg.ignore).context("invalid ignore entry in config")?;
    extend_unique(&mut ignore, &overrides.ignore).context("invalid --ignore value")?;

    let invocation = match (cfg.command, cfg.args) {
        (None, None) => Invocation::cargo_audit(ignore),
        (command, args) => {
            let program = match command {
                Some(command) if command.trim().is_empty() => {
                    anyhow::bail!("command must not be empty")
                }
                Some(command) => command,
                None => DEFAULT_PROGRAM.to_string(),
            };
            let program_args = args.unwrap_or_else(|| {
                DEFAULT_PROGRAM_ARGS.iter().map(|a| a.to_string()).collect()
            });
            Invocation::new(program, program_args, ignore)
        }
    };

    Ok(ResolvedConfig {
        profile,
        invocation,
    })
}

fn extend_unique(list: &mut IgnoreList, raw: &[String]) -> anyhow::Result<()> {
    for entry in raw {
        list.push_unique(AdvisoryId::new(entry)?);
    }
    Ok(())
}
