//! Stable tokens shared with the external auditor and the config file.

/// Flag that makes `cargo audit` skip one advisory. Always followed by the id.
pub const IGNORE_FLAG: &str = "--ignore";

/// Program and leading arguments of the default audit command (`cargo audit`).
pub const DEFAULT_PROGRAM: &str = "cargo";
pub const DEFAULT_PROGRAM_ARGS: &[&str] = &["audit"];

/// Schema string accepted in `audit-gate.toml`.
pub const SCHEMA_CONFIG_V1: &str = "audit-gate.config.v1";

// Profiles
pub const PROFILE_DEFAULT: &str = "default";
pub const PROFILE_NONE: &str = "none";
