//! The admissibility predicate used while assigning consonants to onsets.

use crate::config::Phonology;

/// Can `phoneme` be prepended to `onset` (the consonants already assigned,
/// nearest-to-nucleus first) without violating English onset phonology?
///
/// `onset.len()` is capped by `phonology.max_onset_consonants`; an empty
/// onset accepts anything not in `banned_onset_initial`; a non-empty onset
/// is governed by `phonology.pair_rules`, evaluated in order, tried against
/// `onset[0]` (the consonant closest to the nucleus) and `phoneme`.
pub fn can_prepend_to_onset(phoneme: &str, onset: &[String], phonology: &Phonology) -> bool {
    if onset.len() >= phonology.max_onset_consonants {
        return false;
    }

    if onset.is_empty() {
        return !phonology.banned_onset_initial.iter().any(|p| p == phoneme);
    }

    let prev = &onset[0];
    phonology.pair_rules.iter().any(|rule| rule.matches(prev, phoneme, onset.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::rules::PairRule;

    fn phonology() -> Phonology {
        Phonology {
            max_onset_consonants: 3,
            banned_onset_initial: vec!["ŋ".to_string()],
            pair_rules: vec![PairRule {
                onset_len_equals: None,
                prev_in: vec!["ɹ".to_string()],
                phoneme_in: Some(vec!["p".to_string()]),
                phoneme_not_in: None,
            }],
        }
    }

    #[test]
    fn empty_onset_rejects_banned_initial() {
        assert!(!can_prepend_to_onset("ŋ", &[], &phonology()));
        assert!(can_prepend_to_onset("p", &[], &phonology()));
    }

    #[test]
    fn pair_rule_allows_configured_cluster() {
        let onset = vec!["ɹ".to_string()];
        assert!(can_prepend_to_onset("p", &onset, &phonology()));
        assert!(!can_prepend_to_onset("b", &onset, &phonology()));
    }

    #[test]
    fn onset_at_max_length_rejects_everything() {
        let onset = vec!["ɹ".to_string(), "t".to_string(), "s".to_string()];
        assert!(!can_prepend_to_onset("p", &onset, &phonology()));
    }
}
