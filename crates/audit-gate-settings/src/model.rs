use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `audit-gate.toml` schema v1.
///
/// Every field is optional. An empty file behaves like no file at all.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AuditGateConfigV1 {
    /// Optional schema string for tooling (`audit-gate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Named ignore-list preset: `default` or `none`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Program to run instead of `cargo`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Leading arguments for `command` (default `["audit"]`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    /// Extra advisory ids, appended after the preset in order.
    #[serde(default)]
    pub ignore: Vec<String>,
}
