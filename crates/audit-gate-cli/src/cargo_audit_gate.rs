//! `cargo audit-gate` subcommand entry point.
//!
//! Cargo runs `cargo-audit-gate audit-gate <args>`; the repeated subcommand name is dropped.

use std::ffi::OsString;

fn main() {
    let mut args: Vec<OsString> = std::env::args_os().collect();
    if args.get(1).is_some_and(|a| a == "audit-gate") {
        args.remove(1);
    }
    std::process::exit(audit_gate_cli::main_with_args(args));
}
