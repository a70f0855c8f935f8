use audit_gate_types::IgnoreList;
use audit_gate_types::ids::{PROFILE_DEFAULT, PROFILE_NONE};

/// Advisories accepted until upstream fixes land.
///
/// - RUSTSEC-2022-0093: ed25519-dalek double public key signing oracle.
/// - RUSTSEC-2024-0344: curve25519-dalek timing variability in scalar subtraction.
const DEFAULT_IGNORES: &[&str] = &["RUSTSEC-2022-0093", "RUSTSEC-2024-0344"];

/// Compiled-in ignore list for a profile name, or `None` if unknown.
pub fn preset(profile: &str) -> Option<IgnoreList> {
    match profile {
        PROFILE_DEFAULT => Some(IgnoreList::from_static(DEFAULT_IGNORES)),
        PROFILE_NONE => Some(IgnoreList::new()),
        _ => None,
    }
}

pub fn preset_names() -> &'static [&'static str] {
    &[PROFILE_DEFAULT, PROFILE_NONE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_matches_the_accepted_advisories() {
        let list = preset("default").unwrap();
        let ids: Vec<&str> = list.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["RUSTSEC-2022-0093", "RUSTSEC-2024-0344"]);
    }

    #[test]
    fn none_preset_is_empty() {
        assert!(preset("none").unwrap().is_empty());
    }

    #[test]
    fn unknown_preset_is_none() {
        assert!(preset("strict").is_none());
    }

    #[test]
    fn every_named_preset_resolves_and_holds_non_blank_ids() {
        for name in preset_names() {
            let list = preset(name).unwrap();
            for id in &list {
                assert!(!id.as_str().trim().is_empty(), "{name}: blank id");
            }
        }
    }
}
