use crate::advisory::IgnoreList;
use crate::ids::{DEFAULT_PROGRAM, DEFAULT_PROGRAM_ARGS, IGNORE_FLAG};
use std::fmt;

/// Expand an ignore list into `--ignore <id>` pairs, in list order.
///
/// No deduplication or sorting happens here; the output has exactly
/// `2 * list.len()` elements.
pub fn build_arguments(list: &IgnoreList) -> Vec<String> {
    let mut args = Vec::with_capacity(list.len() * 2);
    for id in list {
        args.push(IGNORE_FLAG.to_string());
        args.push(id.as_str().to_string());
    }
    args
}

/// A fully resolved command line for the external auditor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    program_args: Vec<String>,
    ignore: IgnoreList,
}

impl Invocation {
    pub fn new(program: impl Into<String>, program_args: Vec<String>, ignore: IgnoreList) -> Self {
        Self {
            program: program.into(),
            program_args,
            ignore,
        }
    }

    /// `cargo audit` with the given ignore list.
    pub fn cargo_audit(ignore: IgnoreList) -> Self {
        Self::new(
            DEFAULT_PROGRAM,
            DEFAULT_PROGRAM_ARGS.iter().map(|a| a.to_string()).collect(),
            ignore,
        )
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn ignore_list(&self) -> &IgnoreList {
        &self.ignore
    }

    /// Leading program arguments followed by the ignore flags.
    pub fn args(&self) -> Vec<String> {
        let mut args = self.program_args.clone();
        args.extend(build_arguments(&self.ignore));
        args
    }
}

impl fmt::Display for Invocation {
    /// Single-line, shell-like rendering used for dry runs and logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_word(&self.program))?;
        for arg in self.args() {
            write!(f, " {}", shell_word(&arg))?;
        }
        Ok(())
    }
}

/// Quote `s` for a POSIX shell unless every character is known to be inert.
fn shell_word(s: &str) -> String {
    let inert = |c: char| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c);
    if !s.is_empty() && s.chars().all(inert) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', r"'\''"))
}
