//! Stable types used across the audit-gate workspace.
//!
//! This crate is intentionally boring:
//! - advisory ids and the ordered ignore list
//! - the command line handed to the external auditor
//! - stable flag tokens and defaults

#![forbid(unsafe_code)]

pub mod advisory;
pub mod ids;
pub mod invocation;

#[cfg(test)]
mod proptest;

pub use advisory::{AdvisoryId, IgnoreList, InvalidAdvisoryId};
pub use invocation::{Invocation, build_arguments};
