//! Longest-match phoneme tokenizer.
//!
//! Scans an IPA string once, at each position taking the longest phoneme
//! from the supplied table that matches as a prefix. This replaces the
//! marker-substitution trick of placing `(\d+)` sentinels in the string and
//! re-splitting on them: that approach risks a placeholder colliding with a
//! literal IPA character sequence from a future substitution pass. Direct
//! longest-match scanning has no such risk and needs no intermediate string.
///
/// `phonemes` must already be sorted longest-first (see
/// [`crate::config::Config::vowels_by_length`] /
/// `consonants_by_length`), since the scan always takes the first match in
/// the slice that fits at the current position.
pub fn tokenize<'a>(text: &str, phonemes: &'a [String]) -> Vec<(&'a str, usize, usize)> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let bytes_len = text.len();

    while pos < bytes_len {
        let remaining = &text[pos..];
        let found = phonemes.iter().find(|p| remaining.starts_with(p.as_str()));

        match found {
            Some(phoneme) => {
                let end = pos + phoneme.len();
                tokens.push((phoneme.as_str(), pos, end));
                pos = end;
            }
            None => {
                // Skip one character (e.g. a stress marker, or a consonant
                // while only scanning for vowels).
                let next = remaining.char_indices().nth(1).map(|(i, _)| i).unwrap_or(remaining.len());
                pos += next;
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_longest_match() {
        let phonemes = vec!["a".to_string(), "aɪ".to_string()];
        // Sorted longest-first, as callers are required to do.
        let mut sorted = phonemes.clone();
        sorted.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));
        let tokens = tokenize("aɪ", &sorted);
        assert_eq!(tokens, vec![("aɪ", 0, "aɪ".len())]);
    }

    #[test]
    fn skips_unmatched_characters() {
        let phonemes = vec!["æ".to_string()];
        let tokens = tokenize("kæt", &phonemes);
        assert_eq!(tokens, vec![("æ", "k".len(), "kæ".len())]);
    }
}
