//! Per-sequence and whole-dictionary postprocessing.

pub mod dedupe;
pub mod fold;
pub mod vowel_drop;

use crate::config::PostprocessingConfig;
use crate::steno::{Key, StrokeSequence};
use crate::syllabify::Syllable;

pub use dedupe::disambiguate;

/// Apply per-sequence postprocessing, returning every resulting candidate
/// (vowel-dropping and folding rules with `keep_original` set can turn one
/// input sequence into several). Returns an empty vector if `sequence` turns
/// out to be invalid and should be discarded entirely rather than offered as
/// a translation (e.g. it ends in a disallowed `F`-for-`/s/`).
///
/// The `F`-for-`/s/` check runs first, against the original syllable-aligned
/// sequence: folding can merge strokes and break the 1:1 stroke-to-syllable
/// correspondence it relies on, and vowel-dropping never touches the
/// consonant keys it inspects, so checking before either rule set runs is
/// both correct and sufficient.
pub fn postprocess_sequence(
    sequence: StrokeSequence,
    syllables: &[Syllable],
    config: &PostprocessingConfig,
) -> Vec<StrokeSequence> {
    if config.disallow_final_f_for_s && !final_f_is_valid(&sequence, syllables) {
        return Vec::new();
    }

    let candidates = vowel_drop::apply(vec![sequence], &config.vowel_drop_rules);
    fold::apply(candidates, &config.fold_rules)
}

/// A stroke's final key may only be `F` if the syllable it represents
/// doesn't end on an `/s/` sound — `/s/` must use the dedicated `S` key
/// even though `F` is an otherwise-valid way to write it mid-syllable.
fn final_f_is_valid(sequence: &StrokeSequence, syllables: &[Syllable]) -> bool {
    for (stroke, syllable) in sequence.strokes().iter().zip(syllables.iter()) {
        if stroke.get_last_key() == Some(Key::Rf) && syllable.coda.last().map(String::as_str) == Some("s") {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steno::Stroke;
    use std::str::FromStr;

    #[test]
    fn rejects_final_f_for_s_coda() {
        let sequence = StrokeSequence::from_strokes(vec![Stroke::from_str("KAF").unwrap()]);
        let syllables = vec![Syllable::new(vec!["k".to_string()], "æ".to_string(), vec!["s".to_string()])];
        let config = PostprocessingConfig {
            disallow_final_f_for_s: true,
            vowel_drop_rules: vec![],
            fold_rules: vec![],
            disambiguate_homophones: true,
            disambiguator_stroke: "W-B".to_string(),
        };
        assert!(postprocess_sequence(sequence, &syllables, &config).is_empty());
    }

    #[test]
    fn allows_final_f_for_non_s_coda() {
        let sequence = StrokeSequence::from_strokes(vec![Stroke::from_str("KAF").unwrap()]);
        let syllables = vec![Syllable::new(vec!["k".to_string()], "æ".to_string(), vec!["f".to_string()])];
        let config = PostprocessingConfig {
            disallow_final_f_for_s: true,
            vowel_drop_rules: vec![],
            fold_rules: vec![],
            disambiguate_homophones: true,
            disambiguator_stroke: "W-B".to_string(),
        };
        assert_eq!(postprocess_sequence(sequence, &syllables, &config).len(), 1);
    }
}
