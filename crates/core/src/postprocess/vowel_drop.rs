//! Drops a stroke's vowel cluster when it's redundant: past the first
//! stroke, folded vowels like `U`, `EU`, `E` carry no information once a
//! following consonant is present, so the middle of the stroke becomes a
//! bare `-` (or `*`, if starred).

use crate::config::VowelDropRule;
use crate::steno::{Key, Stroke, StrokeSequence};

/// Run every rule, in order, over the growing set of candidate sequences. A
/// rule that matches a stroke in a candidate replaces that candidate with
/// the vowel-dropped form; when `keep_original` is set, the pre-rule
/// candidate is kept alongside it instead of being discarded.
pub fn apply(sequences: Vec<StrokeSequence>, rules: &[VowelDropRule]) -> Vec<StrokeSequence> {
    let mut candidates = sequences;

    for rule in rules {
        let mut next = Vec::with_capacity(candidates.len());
        for sequence in candidates {
            match drop_vowels(&sequence, rule) {
                Some(dropped) => {
                    if rule.keep_original {
                        next.push(sequence);
                    }
                    next.push(dropped);
                }
                None => next.push(sequence),
            }
        }
        candidates = next;
    }

    candidates
}

/// The sequence with every stroke matching `rule` vowel-cleared, or `None`
/// if no stroke in the sequence matched.
fn drop_vowels(sequence: &StrokeSequence, rule: &VowelDropRule) -> Option<StrokeSequence> {
    let len = sequence.strokes().len();
    let mut strokes: Vec<Stroke> = sequence.strokes().to_vec();
    let mut matched = false;

    for (index, stroke) in strokes.iter_mut().enumerate() {
        if !rule.applies_to.matches(index, len) {
            continue;
        }
        if has_ao(stroke) {
            continue;
        }
        if !rule.left_consonant.matches(&stroke.left_consonant_letters()) {
            continue;
        }
        if !rule.right_consonant.matches(&stroke.right_consonant_letters()) {
            continue;
        }
        if rule.vowel_cluster_in.iter().any(|c| c == &eu_cluster(stroke)) {
            stroke.clear_all_vowels();
            matched = true;
        }
    }

    matched.then(|| StrokeSequence::from_strokes(strokes))
}

fn has_ao(stroke: &Stroke) -> bool {
    stroke.get_vowels().iter().any(|k| matches!(k, Key::A | Key::O))
}

/// The stroke's `E`/`U` vowels, in steno order, as a literal string (`"E"`,
/// `"U"`, or `"EU"`) for comparison against configured patterns.
fn eu_cluster(stroke: &Stroke) -> String {
    stroke
        .get_vowels()
        .into_iter()
        .filter(|k| matches!(k, Key::E | Key::U))
        .map(|k| k.letter())
        .collect()
}
