//! Use case orchestration for audit-gate.
//!
//! Resolve the ignore list, hand the invocation to a [`ProcessRunner`], and map the
//! result to a process exit code. The CLI crate depends on this; it only handles argument
//! parsing and file I/O.

#![forbid(unsafe_code)]

mod audit;
mod runner;

pub use audit::{
    AuditInput, EXIT_CONFIG_ERROR, EXIT_SPAWN_FAILURE, plan_audit, run_audit, run_exit_code,
};
pub use runner::{ChildExit, ProcessRunner, RunError, SystemRunner};
