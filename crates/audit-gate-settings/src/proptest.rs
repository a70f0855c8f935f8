//! Property-based tests for ignore-list resolution.

use crate::{AuditGateConfigV1, Overrides, resolve_config};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn arb_id() -> impl Strategy<Value = String> {
    (2016u32..2030, 1u32..40).prop_map(|(year, n)| format!("RUSTSEC-{year}-{n:04}"))
}

fn arb_ids() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_id(), 0..12)
}

proptest! {
    #[test]
    fn resolved_list_is_first_occurrence_order_of_all_sources(
        from_config in arb_ids(),
        from_cli in arb_ids(),
    ) {
        let cfg = AuditGateConfigV1 {
            profile: Some("none".to_string()),
            ignore: from_config.clone(),
            ..AuditGateConfigV1::default()
        };
        let overrides = Overrides { profile: None, ignore: from_cli.clone() };
        let resolved = resolve_config(cfg, overrides).unwrap();

        let mut seen = BTreeSet::new();
        let expected: Vec<String> = from_config
            .iter()
            .chain(from_cli.iter())
            .filter(|id| seen.insert(id.to_string()))
            .cloned()
            .collect();
        let actual: Vec<String> = resolved
            .invocation
            .ignore_list()
            .iter()
            .map(|id| id.to_string())
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn default_preset_always_leads(from_cli in arb_ids()) {
        let overrides = Overrides { profile: None, ignore: from_cli };
        let resolved = resolve_config(AuditGateConfigV1::default(), overrides).unwrap();
        let args = resolved.invocation.args();
        prop_assert_eq!(
            &args[..5],
            &["audit", "--ignore", "RUSTSEC-2022-0093", "--ignore", "RUSTSEC-2024-0344"]
        );
    }
}
