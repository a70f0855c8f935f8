//! Property-based tests for argument generation.
//!
//! These tests use proptest to verify invariants around:
//! - Output length and flag/value interleaving
//! - Order preservation under permutation
//! - Determinism

use crate::advisory::{AdvisoryId, IgnoreList};
use crate::ids::IGNORE_FLAG;
use crate::invocation::build_arguments;
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for RUSTSEC-shaped advisory ids.
fn arb_rustsec_id() -> impl Strategy<Value = String> {
    (2016u32..2030, 1u32..10000).prop_map(|(year, n)| format!("RUSTSEC-{year}-{n:04}"))
}

/// Strategy for arbitrary opaque ids (anything non-blank).
fn arb_opaque_id() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9][A-Za-z0-9_.:-]{0,24}").unwrap()
}

fn arb_id() -> impl Strategy<Value = AdvisoryId> {
    prop_oneof![arb_rustsec_id(), arb_opaque_id()]
        .prop_map(|raw| AdvisoryId::new(raw).expect("generated ids are non-empty"))
}

/// Lists may repeat ids on purpose: generation must not deduplicate.
fn arb_ignore_list() -> impl Strategy<Value = IgnoreList> {
    prop::collection::vec(arb_id(), 0..16).prop_map(IgnoreList::from_iter)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn output_interleaves_flag_and_id(list in arb_ignore_list()) {
        let args = build_arguments(&list);
        prop_assert_eq!(args.len(), 2 * list.len());
        for (i, id) in list.iter().enumerate() {
            prop_assert_eq!(args[2 * i].as_str(), IGNORE_FLAG);
            prop_assert_eq!(args[2 * i + 1].as_str(), id.as_str());
        }
    }

    #[test]
    fn generation_is_deterministic(list in arb_ignore_list()) {
        prop_assert_eq!(build_arguments(&list), build_arguments(&list.clone()));
    }

    #[test]
    fn permuting_the_list_permutes_the_pairs(
        (list, shuffled) in arb_ignore_list().prop_flat_map(|list| {
            let ids: Vec<AdvisoryId> = list.iter().cloned().collect();
            (Just(list), Just(ids).prop_shuffle())
        })
    ) {
        let shuffled: IgnoreList = shuffled.into_iter().collect();
        let pairs = |l: &IgnoreList| -> Vec<(String, String)> {
            build_arguments(l)
                .chunks(2)
                .map(|c| (c[0].clone(), c[1].clone()))
                .collect()
        };

        let expected: Vec<(String, String)> = shuffled
            .iter()
            .map(|id| (IGNORE_FLAG.to_string(), id.as_str().to_string()))
            .collect();
        prop_assert_eq!(pairs(&shuffled), expected);

        let mut original = pairs(&list);
        let mut permuted = pairs(&shuffled);
        original.sort();
        permuted.sort();
        prop_assert_eq!(original, permuted);
    }
}
