//! `audit-gate`: run `cargo audit` with the curated ignore list.

fn main() {
    std::process::exit(audit_gate_cli::main_with_args(std::env::args_os()));
}
