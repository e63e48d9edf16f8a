//! Folds specific strokes into a neighboring stroke, e.g. collapsing a
//! trailing `SH-PB` stroke into the previous stroke as `-GS`.

use crate::config::{FoldRule, FoldTarget};
use crate::steno::{Key, Stroke, StrokeSequence};

/// Run every rule, in order, over the growing set of candidate sequences. A
/// rule that matches a stroke in a candidate replaces that candidate with
/// the folded form; when `keep_original` is set, the pre-rule candidate is
/// kept alongside it instead of being discarded.
pub fn apply(sequences: Vec<StrokeSequence>, rules: &[FoldRule]) -> Vec<StrokeSequence> {
    let mut candidates = sequences;

    for rule in rules {
        let mut next = Vec::with_capacity(candidates.len());
        for sequence in candidates {
            match fold_one(&sequence, rule) {
                Some(folded) => {
                    if rule.keep_original {
                        next.push(sequence);
                    }
                    next.push(folded);
                }
                None => next.push(sequence),
            }
        }
        candidates = next;
    }

    candidates
}

/// Folds the first stroke matching `rule.match_stroke` into its neighbor,
/// wherever in the sequence it occurs — the original's equivalent only ever
/// fired on the final stroke, but the rule itself carries no position
/// restriction (unlike vowel-drop's `applies_to` scope), so matching
/// anywhere is the more general, spec-faithful behavior.
fn fold_one(sequence: &StrokeSequence, rule: &FoldRule) -> Option<StrokeSequence> {
    let mut strokes: Vec<Stroke> = sequence.strokes().to_vec();

    let match_index = strokes.iter().position(|s| s.to_string() == rule.match_stroke)?;

    let neighbor_index = match rule.fold_into {
        FoldTarget::PreviousStroke => match_index.checked_sub(1),
        FoldTarget::NextStroke => {
            let next = match_index + 1;
            (next < strokes.len()).then_some(next)
        }
    }?;

    let neighbor_text = strokes[neighbor_index].to_string();
    if rule.skip_if_neighbor_ends_with.iter().any(|suffix| neighbor_text.ends_with(suffix.as_str())) {
        return None;
    }
    if rule.skip_if_neighbor_contains.iter().any(|needle| neighbor_text.contains(needle.as_str())) {
        return None;
    }

    let add_keys: Vec<Key> = rule
        .add_keys
        .iter()
        .filter_map(|letters| letters.chars().next())
        .filter_map(|ch| Key::right_consonant_from_letter(ch).or_else(|| Key::left_consonant_from_letter(ch)))
        .collect();
    strokes[neighbor_index].add_keys_ignore_steno_order(&add_keys);

    strokes.remove(match_index);

    Some(StrokeSequence::from_strokes(strokes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sh_pb_rule() -> FoldRule {
        FoldRule {
            match_stroke: "SH-PB".to_string(),
            fold_into: FoldTarget::PreviousStroke,
            add_keys: vec!["G".to_string(), "S".to_string()],
            skip_if_neighbor_ends_with: vec!["T".to_string(), "D".to_string(), "Z".to_string()],
            skip_if_neighbor_contains: vec!["GS".to_string()],
            keep_original: false,
        }
    }

    fn sequence(strokes: &[&str]) -> StrokeSequence {
        StrokeSequence::from_strokes(strokes.iter().map(|s| Stroke::from_str(s).unwrap()).collect())
    }

    #[test]
    fn folds_trailing_stroke_into_previous() {
        let result = apply(vec![sequence(&["KAP", "SH-PB"])], &[sh_pb_rule()]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].strokes().len(), 1);
        assert_eq!(result[0].strokes()[0].to_string(), "KAPGS");
    }

    #[test]
    fn does_not_fold_when_neighbor_ends_in_banned_key() {
        let result = apply(vec![sequence(&["KAT", "SH-PB"])], &[sh_pb_rule()]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].strokes().len(), 2);
    }

    #[test]
    fn no_match_leaves_sequence_untouched() {
        let result = apply(vec![sequence(&["KAT"])], &[sh_pb_rule()]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].strokes().len(), 1);
        assert_eq!(result[0].strokes()[0].to_string(), "KAT");
    }

    #[test]
    fn keep_original_adds_a_second_candidate() {
        let mut keep_rule = sh_pb_rule();
        keep_rule.keep_original = true;
        let result = apply(vec![sequence(&["KAP", "SH-PB"])], &[keep_rule]);
        assert_eq!(result.len(), 2);
        let lengths: Vec<usize> = result.iter().map(|s| s.strokes().len()).collect();
        assert!(lengths.contains(&1));
        assert!(lengths.contains(&2));
    }
}
