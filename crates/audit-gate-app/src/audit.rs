//! The `audit` use case: resolve the ignore list and run the auditor once.

use anyhow::Context;
use audit_gate_settings::{AuditGateConfigV1, Overrides, ResolvedConfig};
use audit_gate_types::Invocation;
use tracing::{debug, info, warn};

use crate::runner::{ChildExit, ProcessRunner, RunError};

/// Exit code when the auditor could not be started. Matches the shell's "command not found".
pub const EXIT_SPAWN_FAILURE: i32 = 127;

/// Exit code for config and usage errors (same as clap's usage errors). The auditor is not run.
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Input for the audit use case.
#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Parse config and resolve the invocation. Nothing is spawned.
pub fn plan_audit(input: AuditInput<'_>) -> anyhow::Result<ResolvedConfig> {
    // Empty is allowed, defaults apply.
    let cfg = if input.config_text.trim().is_empty() {
        AuditGateConfigV1::default()
    } else {
        audit_gate_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        audit_gate_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    debug!(
        profile = %resolved.profile,
        ignored = resolved.invocation.ignore_list().len(),
        "resolved ignore list"
    );
    Ok(resolved)
}

/// Run the invocation and wait for it. The child's verdict is returned untouched.
pub fn run_audit(
    invocation: &Invocation,
    runner: &dyn ProcessRunner,
) -> Result<ChildExit, RunError> {
    info!(command = %invocation, "running auditor");

    match runner.run(invocation) {
        Ok(exit) => {
            debug!(?exit, "auditor finished");
            Ok(exit)
        }
        Err(err) => {
            warn!(program = invocation.program(), "auditor could not be run");
            Err(err)
        }
    }
}

/// Map the outcome of [`run_audit`] to this process's exit code.
pub fn run_exit_code(outcome: &Result<ChildExit, RunError>) -> i32 {
    match outcome {
        Ok(exit) => exit.exit_code(),
        Err(RunError::Spawn { .. }) => EXIT_SPAWN_FAILURE,
        Err(RunError::Wait { .. }) => 1,
    }
}
