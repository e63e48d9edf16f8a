//! A series of strokes making up one translation.

use std::cmp::Ordering;
use std::fmt;

use super::stroke::Stroke;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StrokeSequence {
    strokes: Vec<Stroke>,
}

impl StrokeSequence {
    pub fn new() -> StrokeSequence {
        StrokeSequence { strokes: Vec::new() }
    }

    pub fn from_strokes(strokes: Vec<Stroke>) -> StrokeSequence {
        StrokeSequence { strokes }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn append_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn set_strokes(&mut self, strokes: Vec<Stroke>) {
        self.strokes = strokes;
    }
}

impl PartialOrd for StrokeSequence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StrokeSequence {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.strokes.len().cmp(&other.strokes.len()) {
            Ordering::Equal => {}
            non_eq => return non_eq,
        }

        for (a, b) in self.strokes.iter().zip(other.strokes.iter()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                non_eq => return non_eq,
            }
        }
        Ordering::Equal
    }
}

impl fmt::Display for StrokeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let printable: Vec<String> = self
            .strokes
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();
        write!(f, "{}", printable.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steno::key::Key;

    #[test]
    fn display_joins_non_empty_strokes_with_slash() {
        let mut seq = StrokeSequence::new();
        seq.append_stroke(Stroke::from_keys(&[Key::Ls, Key::A]).unwrap());
        seq.append_stroke(Stroke::empty());
        seq.append_stroke(Stroke::from_keys(&[Key::Rp]).unwrap());
        assert_eq!(seq.to_string(), "SA/-P");
    }

    #[test]
    fn shorter_sequence_sorts_first() {
        let mut short = StrokeSequence::new();
        short.append_stroke(Stroke::from_keys(&[Key::Ls]).unwrap());

        let mut long = StrokeSequence::new();
        long.append_stroke(Stroke::from_keys(&[Key::Ls]).unwrap());
        long.append_stroke(Stroke::from_keys(&[Key::Rp]).unwrap());

        assert!(short < long);
    }
}
