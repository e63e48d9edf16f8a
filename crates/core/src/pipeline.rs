//! Orchestrates the full word-list-plus-IPA to steno-dictionary compile.

use std::collections::BTreeSet;

use crate::build;
use crate::build::syllables_to_stroke_sequences;
use crate::config::Config;
use crate::ipa::IpaIndex;
use crate::postprocess::{disambiguate, postprocess_sequence};
use crate::steno::StrokeSequence;
use crate::syllabify::syllabify_ipa;

/// One word and the stroke sequences that translate to it, deduplicated and
/// sorted.
pub type DictionaryEntry = (String, Vec<StrokeSequence>);

/// Compile every candidate stroke sequence for a single pronunciation.
fn compile_pronunciation(ipa: &str, config: &Config) -> Vec<StrokeSequence> {
    let syllables = match syllabify_ipa(ipa, config) {
        Ok(syllables) => syllables,
        Err(e) => {
            log::warn!("{e}");
            return Vec::new();
        }
    };

    syllables_to_stroke_sequences(&syllables, config)
        .into_iter()
        .flat_map(|sequence| postprocess_sequence(sequence, &syllables, &config.postprocessing))
        .collect()
}

/// Compile every translation for `word`, trying each of its configured
/// pronunciations and deduplicating the resulting stroke sequences.
pub fn compile_word(word: &str, ipa_index: &IpaIndex, config: &Config) -> Vec<StrokeSequence> {
    let Some(pronunciations) = ipa_index.pronunciations(&word.to_lowercase()) else {
        log::warn!("no IPA pronunciation found for `{word}`, skipping");
        return Vec::new();
    };

    let mut sequences: BTreeSet<StrokeSequence> = BTreeSet::new();
    for ipa in pronunciations {
        sequences.extend(compile_pronunciation(ipa, config));
    }

    if sequences.is_empty() {
        log::warn!("{}", build::untranslatable(word));
    }

    sequences.into_iter().collect()
}

/// Compile a dictionary for every word in `words`, in input order, then run
/// whole-dictionary homophone disambiguation.
pub fn compile_dictionary(words: &[String], ipa_index: &IpaIndex, config: &Config) -> Vec<DictionaryEntry> {
    let mut entries: Vec<DictionaryEntry> = Vec::with_capacity(words.len());
    let mut generated = 0;

    for word in words {
        let sequences = compile_word(word, ipa_index, config);
        if !sequences.is_empty() {
            generated += 1;
        }
        entries.push((word.clone(), sequences));
    }

    log::info!("Generated translations for {generated} out of {} words", words.len());

    entries.retain(|(_, sequences)| !sequences.is_empty());

    if config.postprocessing.disambiguate_homophones {
        disambiguate(&mut entries, &config.postprocessing.disambiguator_stroke);
    }

    let num_entries: usize = entries.iter().map(|(_, s)| s.len()).sum();
    let num_strokes: usize =
        entries.iter().flat_map(|(_, s)| s.iter()).map(|seq| seq.strokes().len()).sum();
    log::info!("Generated {num_strokes} strokes for {num_entries} entries");

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config::default_config()
    }

    #[test]
    fn compiles_a_simple_word() {
        let ipa_index = IpaIndex::parse("cat,/kæt/\n");
        let config = test_config();
        let sequences = compile_word("cat", &ipa_index, &config);
        assert!(!sequences.is_empty());
    }

    #[test]
    fn missing_word_produces_no_sequences() {
        let ipa_index = IpaIndex::parse("cat,/kæt/\n");
        let config = test_config();
        assert!(compile_word("dog", &ipa_index, &config).is_empty());
    }

    #[test]
    fn homophones_get_disambiguated() {
        let ipa_index = IpaIndex::parse("here,/hɪɹ/\nhear,/hɪɹ/\n");
        let config = test_config();
        let entries = compile_dictionary(
            &["here".to_string(), "hear".to_string()],
            &ipa_index,
            &config,
        );
        assert_eq!(entries.len(), 2);
        let printed: Vec<String> =
            entries.iter().flat_map(|(_, seqs)| seqs.iter().map(|s| s.to_string())).collect();
        assert_eq!(printed.len(), 2);
        assert_ne!(printed[0], printed[1]);
    }
}
