//! Whole-dictionary homophone disambiguation: once every word's candidate
//! stroke sequences are chosen, append a disambiguator stroke to any
//! sequence whose printable text collides with one already used, processed
//! in input order.

use std::collections::HashSet;
use std::str::FromStr;

use crate::steno::{Stroke, StrokeSequence};

pub fn disambiguate(entries: &mut [(String, Vec<StrokeSequence>)], disambiguator_stroke: &str) {
    let Ok(disambiguator) = Stroke::from_str(disambiguator_stroke) else {
        log::warn!("disambiguator stroke `{disambiguator_stroke}` does not parse, skipping disambiguation");
        return;
    };

    let mut used = HashSet::new();
    for (_, sequences) in entries.iter_mut() {
        for sequence in sequences.iter_mut() {
            while used.contains(&sequence.to_string()) {
                sequence.append_stroke(disambiguator);
            }
            used.insert(sequence.to_string());
        }
    }
}
