//! CLI layer for audit-gate.
//!
//! This crate is intentionally thin: it handles argument parsing, config file I/O, logging
//! setup, and exit codes. All behavior lives in the `audit-gate-app` crate.

#![forbid(unsafe_code)]

use anyhow::Context;
use audit_gate_app::{
    AuditInput, EXIT_CONFIG_ERROR, SystemRunner, plan_audit, run_audit, run_exit_code,
};
use audit_gate_settings::Overrides;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::io::IsTerminal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Config file looked up in the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "audit-gate.toml";

#[derive(Parser, Debug)]
#[command(
    name = "audit-gate",
    version,
    about = "Run cargo audit, ignoring advisories the maintainers have accepted"
)]
struct Cli {
    /// Path to audit-gate config TOML.
    ///
    /// Without this flag, ./audit-gate.toml is loaded automatically when it exists; run with
    /// -v to see which file was used.
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Ignore-list preset (default|none).
    #[arg(long)]
    profile: Option<String>,

    /// Additional advisory id to ignore. May be repeated.
    #[arg(long = "ignore", value_name = "ADVISORY_ID", action = ArgAction::Append)]
    ignore: Vec<String>,

    /// Print the command that would run and exit without running it.
    #[arg(long)]
    dry_run: bool,

    /// Log more detail to stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Parse `args` (including the program name), run, and return the process exit code.
pub fn main_with_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return err.exit_code();
        }
    };

    init_logging(cli.verbose);

    let resolved = match load_config_text(cli.config.as_deref()).and_then(|config_text| {
        plan_audit(AuditInput {
            config_text: &config_text,
            overrides: Overrides {
                profile: cli.profile.clone(),
                ignore: cli.ignore.clone(),
            },
        })
    }) {
        Ok(resolved) => resolved,
        Err(err) => {
            eprintln!("audit-gate error: {err:#}");
            return EXIT_CONFIG_ERROR;
        }
    };

    if cli.dry_run {
        println!("{}", resolved.invocation);
        return 0;
    }

    let outcome = run_audit(&resolved.invocation, &SystemRunner);
    let code = run_exit_code(&outcome);
    // A failing audit is reported by the auditor itself; only our own failures get a message.
    if let Err(err) = outcome {
        eprintln!("audit-gate error: {:#}", anyhow::Error::from(err));
    }
    code
}

/// Read the config file. A missing file is fine only at the default location.
fn load_config_text(explicit: Option<&Utf8Path>) -> anyhow::Result<String> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let path = Utf8Path::new(DEFAULT_CONFIG_PATH);
            if !path.exists() {
                debug!(path = %path, "no config file, using built-in defaults");
                return Ok(String::new());
            }
            path
        }
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))?;
    info!(path = %path, "loaded config");
    Ok(text)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // Logs go to stderr so they never mix with the auditor's stdout.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
