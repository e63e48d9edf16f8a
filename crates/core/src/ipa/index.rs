//! Parses the `word,/ipa1/,/ipa2/...` notation file into a lookup table.
//!
//! This is deliberately not parsed with a general CSV crate: only the first
//! comma is structural (a word can legally contain a comma-adjacent gloss in
//! some source dictionaries), and pronunciations are delimited by slashes,
//! not commas, matching the original tool's hand-rolled line parser.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Error;

#[derive(Debug, Clone, Default)]
pub struct IpaIndex {
    word_to_pronunciations: HashMap<String, Vec<String>>,
}

impl IpaIndex {
    pub fn load(path: &Path) -> Result<IpaIndex, Error> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::IpaMissing(format!("{}: {e}", path.display())))?;
        Ok(Self::parse(&text))
    }

    pub fn parse(text: &str) -> IpaIndex {
        let mut word_to_pronunciations = HashMap::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if let Some((word, pronunciations)) = parse_line(line) {
                word_to_pronunciations.insert(word, pronunciations);
            }
        }
        IpaIndex { word_to_pronunciations }
    }

    pub fn pronunciations(&self, word: &str) -> Option<&[String]> {
        self.word_to_pronunciations.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.word_to_pronunciations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_to_pronunciations.is_empty()
    }
}

/// Splits at the first comma only, then keeps every odd-indexed slash-split
/// token (the text strictly between a pair of slashes).
fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
    let line = line.trim();
    let (word, rest) = line.split_once(',')?;
    let pronunciations: Vec<String> =
        rest.split('/').skip(1).step_by(2).map(str::to_string).collect();
    Some((word.to_string(), pronunciations))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_word_with_single_pronunciation() {
        let index = IpaIndex::parse("cat,/kæt/\n");
        assert_eq!(index.pronunciations("cat"), Some(&["kæt".to_string()][..]));
    }

    #[test]
    fn parses_word_with_multiple_pronunciations() {
        let index = IpaIndex::parse("read,/ɹiːd/,/ɹɛd/\n");
        assert_eq!(index.pronunciations("read"), Some(&["ɹiːd".to_string(), "ɹɛd".to_string()][..]));
    }

    #[test]
    fn skips_blank_lines() {
        let index = IpaIndex::parse("cat,/kæt/\n\ndog,/dɔɡ/\n");
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn missing_word_returns_none() {
        let index = IpaIndex::parse("cat,/kæt/\n");
        assert_eq!(index.pronunciations("dog"), None);
    }
}
