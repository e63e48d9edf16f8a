//! Splits an IPA pronunciation into syllables using the maximum onset
//! principle.

pub mod phonotactics;
pub mod syllable;
pub mod tokenizer;

pub use syllable::Syllable;

use crate::config::Config;
use crate::error::Error;

use phonotactics::can_prepend_to_onset;
use tokenizer::tokenize;

struct PartialSyllable {
    raw_onset: String,
    nucleus: String,
    coda: Vec<String>,
}

/// Syllabify an IPA pronunciation.
///
/// 1. Locate each nucleus (longest-match vowel tokenizing of the whole
///    string), splitting the string into onset/nucleus runs plus a trailing
///    leftover that becomes the final syllable's coda.
/// 2. Walk the syllables from last to first. For each syllable, tokenize its
///    raw consonant run and try to prepend each phoneme (nearest the nucleus
///    first) onto the syllable's onset, consulting
///    [`phonotactics::can_prepend_to_onset`]. Phonemes that can't be
///    prepended are handed to the *previous* syllable's coda; if there is no
///    previous syllable, the pronunciation is unsyllabifiable.
pub fn syllabify_ipa(ipa: &str, config: &Config) -> Result<Vec<Syllable>, Error> {
    let vowel_tokens = tokenize(ipa, config.vowels_by_length());
    if vowel_tokens.is_empty() {
        return Err(Error::Unsyllabifiable(ipa.to_string()));
    }

    let mut syllables = Vec::with_capacity(vowel_tokens.len());
    let mut prev_end = 0;
    for (phoneme, start, end) in &vowel_tokens {
        syllables.push(PartialSyllable {
            raw_onset: ipa[prev_end..*start].to_string(),
            nucleus: (*phoneme).to_string(),
            coda: Vec::new(),
        });
        prev_end = *end;
    }

    let leftover = &ipa[prev_end..];
    let coda_tokens: Vec<String> =
        tokenize(leftover, config.consonants_by_length()).into_iter().map(|(p, _, _)| p.to_string()).collect();
    if let Some(last) = syllables.last_mut() {
        last.coda = coda_tokens;
    }

    let n = syllables.len();
    let mut final_onsets: Vec<Vec<String>> = vec![Vec::new(); n];
    let mut coda_overrides: Vec<Option<Vec<String>>> = vec![None; n];

    for i in (0..n).rev() {
        let onset_tokens: Vec<String> = tokenize(&syllables[i].raw_onset, config.consonants_by_length())
            .into_iter()
            .map(|(p, _, _)| p.to_string())
            .collect();

        let mut new_onset: Vec<String> = Vec::new();
        for k in (0..onset_tokens.len()).rev() {
            let phoneme = &onset_tokens[k];
            if can_prepend_to_onset(phoneme, &new_onset, &config.phonology) {
                new_onset.insert(0, phoneme.clone());
            } else {
                if i == 0 {
                    return Err(Error::Unsyllabifiable(ipa.to_string()));
                }
                coda_overrides[i - 1] = Some(onset_tokens[..=k].to_vec());
                break;
            }
        }
        final_onsets[i] = new_onset;
    }

    let syllables_out = (0..n)
        .map(|i| {
            let coda = coda_overrides[i].clone().unwrap_or_else(|| syllables[i].coda.clone());
            Syllable::new(std::mem::take(&mut final_onsets[i]), syllables[i].nucleus.clone(), coda)
        })
        .collect();

    Ok(syllables_out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        let yaml = r#"
vowels:
  æ: "A"
  ə: "U"
  ɪ: "EU"
left_consonants:
  k: "K"
  t: "T"
  s: "S"
right_consonants:
  t: "T"
  s: "S"
  n: "PB"
phonology:
  max_onset_consonants: 3
  banned_onset_initial: []
  pair_rules:
    - prev_in: ["t"]
      phoneme_in: ["s"]
postprocessing:
  disallow_final_f_for_s: true
  disambiguate_homophones: true
  disambiguator_stroke: "W-B"
"#;
        Config::from_yaml_str(yaml).unwrap()
    }

    #[test]
    fn single_vowel_syllable() {
        let config = test_config();
        let syllables = syllabify_ipa("kæt", &config).unwrap();
        assert_eq!(syllables.len(), 1);
        assert_eq!(syllables[0].onset, vec!["k".to_string()]);
        assert_eq!(syllables[0].nucleus, "æ");
        assert_eq!(syllables[0].coda, vec!["t".to_string()]);
    }

    #[test]
    fn onset_cluster_respects_phonotactics() {
        let config = test_config();
        // "st" splits as onset [s, t] only if the pair rule allows s before t.
        let syllables = syllabify_ipa("stæt", &config).unwrap();
        assert_eq!(syllables.len(), 1);
        assert_eq!(syllables[0].onset, vec!["s".to_string(), "t".to_string()]);
    }

    #[test]
    fn no_vowel_is_unsyllabifiable() {
        let config = test_config();
        assert!(matches!(syllabify_ipa("kt", &config), Err(Error::Unsyllabifiable(_))));
    }

    #[test]
    fn two_syllables_split_consonant_between_them() {
        let config = test_config();
        let syllables = syllabify_ipa("ətə", &config).unwrap();
        assert_eq!(syllables.len(), 2);
        assert_eq!(syllables[0].nucleus, "ə");
        assert_eq!(syllables[1].nucleus, "ə");
        // The medial 't' should go to the onset of the second syllable
        // under maximum onset, since the pair rule table has no entry
        // forcing it back to the first syllable's coda.
        assert_eq!(syllables[1].onset, vec!["t".to_string()]);
        assert_eq!(syllables[0].coda, Vec::<String>::new());
    }
}
