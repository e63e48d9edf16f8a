//! Turns syllables into candidate stroke sequences.
//!
//! For each syllable, every phoneme in the onset/nucleus/coda is looked up
//! in the configured mapping tables, producing (possibly several) candidate
//! key clusters per phoneme. The Cartesian product of those candidates,
//! across onset then nucleus then coda, gives every way to stroke the
//! syllable; each candidate is assembled into a [`Stroke`] with steno-order
//! checking, discarding any that come out of order or end up with no vowel
//! key at all. The per-syllable candidate lists are then combined, again by
//! Cartesian product, into whole-word [`StrokeSequence`] candidates.

use crate::config::{Config, Mapping};
use crate::error::Error;
use crate::steno::{Key, Stroke, StrokeSequence};
use crate::syllabify::Syllable;

/// Every way to stroke a single syllable, as fully assembled strokes.
pub fn syllable_to_strokes(syllable: &Syllable, config: &Config) -> Vec<Stroke> {
    let onset_clusters = match expand_clusters(&syllable.onset, &config.left_consonants) {
        Some(c) => c,
        None => return Vec::new(),
    };
    let nucleus_clusters = match expand_clusters(std::slice::from_ref(&syllable.nucleus), &config.vowels) {
        Some(c) => c,
        None => return Vec::new(),
    };
    let coda_clusters = match expand_clusters(&syllable.coda, &config.right_consonants) {
        Some(c) => c,
        None => return Vec::new(),
    };

    let mut strokes = Vec::new();
    for onset in &onset_clusters {
        for nucleus in &nucleus_clusters {
            for coda in &coda_clusters {
                let mut keys = Vec::new();
                append_keys(onset, Side::Left, &mut keys);
                append_keys(nucleus, Side::Vowel, &mut keys);
                append_keys(coda, Side::Right, &mut keys);

                if let Ok(stroke) = Stroke::from_keys(&keys) {
                    // Every English syllable has a vowel; a stroke with none
                    // has no valid printable form and is discarded.
                    if !stroke.get_vowels().is_empty() {
                        strokes.push(stroke);
                    }
                }
            }
        }
    }
    strokes
}

/// Every way to stroke a whole syllable sequence, as whole-word
/// [`StrokeSequence`] candidates (the Cartesian product of each syllable's
/// candidate strokes).
pub fn syllables_to_stroke_sequences(syllables: &[Syllable], config: &Config) -> Vec<StrokeSequence> {
    let mut sequences: Vec<Vec<Stroke>> = vec![Vec::new()];

    for syllable in syllables {
        let candidates = syllable_to_strokes(syllable, config);
        if candidates.is_empty() {
            return Vec::new();
        }

        let mut next = Vec::with_capacity(sequences.len() * candidates.len());
        for prefix in &sequences {
            for stroke in &candidates {
                let mut extended = prefix.clone();
                extended.push(*stroke);
                next.push(extended);
            }
        }
        sequences = next;
    }

    sequences.into_iter().map(StrokeSequence::from_strokes).collect()
}

enum Side {
    Left,
    Vowel,
    Right,
}

fn append_keys(cluster: &str, side: Side, keys: &mut Vec<Key>) {
    for ch in cluster.chars() {
        if ch == '*' {
            keys.push(Key::Star);
            continue;
        }
        let key = match side {
            Side::Left => Key::left_consonant_from_letter(ch),
            Side::Right => Key::right_consonant_from_letter(ch),
            Side::Vowel => Key::vowel_from_letter(ch),
        };
        if let Some(key) = key {
            keys.push(key);
        }
    }
}

/// Expand a run of phonemes into every combination of their configured
/// cluster alternatives. Returns `None` if any phoneme is unmapped
/// (`NoMapping`) or missing from the table entirely — both mean there is no
/// way to stroke this syllable at all.
fn expand_clusters(
    phonemes: &[String],
    table: &std::collections::HashMap<String, Mapping>,
) -> Option<Vec<String>> {
    let mut ways: Vec<String> = vec![String::new()];

    for phoneme in phonemes {
        let mapping = match table.get(phoneme) {
            Some(m) => m,
            None => {
                log::warn!("unknown phoneme `{phoneme}`, skipping candidate");
                return None;
            }
        };

        let alternatives: &[String] = match mapping {
            Mapping::NoMapping => {
                log::warn!("no steno mapping for phoneme `{phoneme}`");
                return None;
            }
            Mapping::Single(s) => std::slice::from_ref(s),
            Mapping::Alternatives(v) => v.as_slice(),
        };

        let mut next = Vec::with_capacity(ways.len() * alternatives.len());
        for prefix in &ways {
            for alt in alternatives {
                next.push(format!("{prefix}{alt}"));
            }
        }
        ways = next;
    }

    Some(ways)
}

/// Constructed at the pipeline boundary (`pipeline::compile_word`) when none
/// of a word's pronunciations yielded a single valid stroke sequence.
pub fn untranslatable(word: &str) -> Error {
    Error::Untranslatable(word.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        let yaml = r#"
vowels:
  æ: "A"
left_consonants:
  k: "K"
  s: ["S"]
right_consonants:
  t: "T"
  s: ["S", "F"]
phonology:
  max_onset_consonants: 3
  banned_onset_initial: []
  pair_rules: []
postprocessing:
  disallow_final_f_for_s: true
  disambiguate_homophones: true
  disambiguator_stroke: "W-B"
"#;
        Config::from_yaml_str(yaml).unwrap()
    }

    #[test]
    fn builds_simple_stroke() {
        let config = test_config();
        let syllable = Syllable::new(vec!["k".to_string()], "æ".to_string(), vec!["t".to_string()]);
        let strokes = syllable_to_strokes(&syllable, &config);
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].to_string(), "KAT");
    }

    #[test]
    fn alternative_coda_clusters_produce_multiple_strokes() {
        let config = test_config();
        let syllable = Syllable::new(vec!["k".to_string()], "æ".to_string(), vec!["s".to_string()]);
        let mut printable: Vec<String> = syllable_to_strokes(&syllable, &config).iter().map(|s| s.to_string()).collect();
        printable.sort();
        assert_eq!(printable, vec!["KAF".to_string(), "KAS".to_string()]);
    }

    #[test]
    fn unmapped_phoneme_yields_no_strokes() {
        let config = test_config();
        let syllable = Syllable::new(vec!["z".to_string()], "æ".to_string(), vec![]);
        assert!(syllable_to_strokes(&syllable, &config).is_empty());
    }
}
