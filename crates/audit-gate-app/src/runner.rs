//! Child process execution.

use audit_gate_types::Invocation;
use std::io;
use std::process::{Command, ExitStatus};

/// How the child process ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildExit {
    /// Exited normally with this status code.
    Code(i32),
    /// Killed by a signal (Unix only).
    Signal(i32),
    /// The platform reported neither a code nor a signal.
    Unknown,
}

impl ChildExit {
    /// Exit code this process should use to mirror the child.
    ///
    /// Signals follow the shell convention of `128 + signal`.
    pub fn exit_code(self) -> i32 {
        match self {
            ChildExit::Code(code) => code,
            ChildExit::Signal(signal) => 128 + signal,
            ChildExit::Unknown => 1,
        }
    }
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ChildExit::Code(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ChildExit::Signal(signal);
            }
        }
        ChildExit::Unknown
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The program could not be started (not found, not executable, ...).
    #[error("failed to launch `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    /// The program started but waiting on it failed.
    #[error("failed to wait for `{program}`")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Seam between the use case and the operating system.
pub trait ProcessRunner {
    /// Run `invocation` to completion. Blocks until the child exits.
    fn run(&self, invocation: &Invocation) -> Result<ChildExit, RunError>;
}

/// Spawns the real program with stdin, stdout and stderr inherited from this process.
///
/// Output is never captured or rewritten. There is no timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ChildExit, RunError> {
        let mut child = Command::new(invocation.program())
            .args(invocation.args())
            .spawn()
            .map_err(|source| RunError::Spawn {
                program: invocation.program().to_string(),
                source,
            })?;

        let status = child.wait().map_err(|source| RunError::Wait {
            program: invocation.program().to_string(),
            source,
        })?;

        Ok(ChildExit::from(status))
    }
}
