//! The validated configuration used by the rest of the pipeline.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Error;

use super::rules::{ConsonantConstraint, FoldRule, Phonology, VowelDropRule};
use super::schema::{RawConfig, RawMapping};

/// A phoneme's steno mapping, lowered from [`RawMapping`]. `NoMapping` means
/// the phoneme is deliberately unstrokeable (the YAML equivalent of the
/// original's `NO_STENO_MAPPING` sentinel): any syllable needing it produces
/// no candidate strokes at all.
#[derive(Debug, Clone)]
pub enum Mapping {
    NoMapping,
    Single(String),
    Alternatives(Vec<String>),
}

impl From<&RawMapping> for Mapping {
    fn from(raw: &RawMapping) -> Self {
        match raw {
            RawMapping::None => Mapping::NoMapping,
            RawMapping::Single(s) => Mapping::Single(s.clone()),
            RawMapping::Alternatives(v) => Mapping::Alternatives(v.clone()),
        }
    }
}

impl Mapping {
    /// Every cluster string this mapping could produce, used to validate
    /// that each one parses as a legal stroke on its own.
    pub fn clusters(&self) -> Vec<&str> {
        match self {
            Mapping::NoMapping => vec![],
            Mapping::Single(s) => vec![s.as_str()],
            Mapping::Alternatives(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostprocessingConfig {
    pub disallow_final_f_for_s: bool,
    pub vowel_drop_rules: Vec<VowelDropRule>,
    pub fold_rules: Vec<FoldRule>,
    pub disambiguate_homophones: bool,
    pub disambiguator_stroke: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub vowels: HashMap<String, Mapping>,
    pub left_consonants: HashMap<String, Mapping>,
    pub right_consonants: HashMap<String, Mapping>,
    pub phonology: Phonology,
    pub postprocessing: PostprocessingConfig,

    /// Vowel phonemes, longest first, for longest-match tokenizing.
    vowels_by_length: Vec<String>,
    /// Consonant phonemes (the union of left/right keys), longest first.
    consonants_by_length: Vec<String>,
}

/// The bundled phoneme mapping and phonotactics, used whenever the caller
/// doesn't supply their own YAML configuration.
const DEFAULT_CONFIG_YAML: &str = include_str!("../config/default.yaml");

impl Config {
    /// Load the bundled default configuration. Panics only if the bundled
    /// YAML itself is malformed, which would be a packaging defect.
    pub fn default_config() -> Config {
        Config::from_yaml_str(DEFAULT_CONFIG_YAML).expect("bundled default.yaml is valid")
    }

    pub fn load(path: &Path) -> Result<Config, Error> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::ConfigInvalid(format!("reading {}: {e}", path.display())))?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Config, Error> {
        let raw: RawConfig =
            serde_yaml::from_str(text).map_err(|e| Error::ConfigInvalid(format!("parsing YAML: {e}")))?;
        Config::from_raw(&raw)
    }

    fn from_raw(raw: &RawConfig) -> Result<Config, Error> {
        let vowels: HashMap<String, Mapping> =
            raw.vowels.iter().map(|(k, v)| (k.clone(), Mapping::from(v))).collect();
        let left_consonants: HashMap<String, Mapping> = raw
            .left_consonants
            .iter()
            .map(|(k, v)| (k.clone(), Mapping::from(v)))
            .collect();
        let right_consonants: HashMap<String, Mapping> = raw
            .right_consonants
            .iter()
            .map(|(k, v)| (k.clone(), Mapping::from(v)))
            .collect();
        let phonology = Phonology::from(&raw.phonology);
        let postprocessing = PostprocessingConfig {
            disallow_final_f_for_s: raw.postprocessing.disallow_final_f_for_s,
            vowel_drop_rules: raw.postprocessing.vowel_drop_rules.iter().map(VowelDropRule::from).collect(),
            fold_rules: raw.postprocessing.fold_rules.iter().map(FoldRule::from).collect(),
            disambiguate_homophones: raw.postprocessing.disambiguate_homophones,
            disambiguator_stroke: raw.postprocessing.disambiguator_stroke.clone(),
        };

        let mut consonants: Vec<String> =
            left_consonants.keys().chain(right_consonants.keys()).cloned().collect();
        consonants.sort();
        consonants.dedup();

        let mut vowels_by_length: Vec<String> = vowels.keys().cloned().collect();
        vowels_by_length.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));

        let mut consonants_by_length: Vec<String> = consonants.clone();
        consonants_by_length.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));

        let config = Config {
            vowels,
            left_consonants,
            right_consonants,
            phonology,
            postprocessing,
            vowels_by_length,
            consonants_by_length,
        };

        config.validate(&consonants)?;
        Ok(config)
    }

    fn validate(&self, consonants: &[String]) -> Result<(), Error> {
        for phoneme in &self.phonology.banned_onset_initial {
            if !consonants.contains(phoneme) {
                return Err(Error::ConfigInvalid(format!(
                    "phonology.banned_onset_initial references unknown consonant `{phoneme}`"
                )));
            }
        }
        for rule in &self.phonology.pair_rules {
            for prev in &rule.prev_in {
                if !consonants.contains(prev) {
                    return Err(Error::ConfigInvalid(format!(
                        "phonology.pair_rules references unknown consonant `{prev}`"
                    )));
                }
            }
        }

        for (phoneme, mapping) in self.left_consonants.iter().chain(self.right_consonants.iter()) {
            for cluster in mapping.clusters() {
                cluster_keys_are_valid(cluster, false).map_err(|e| {
                    Error::ConfigInvalid(format!("consonant `{phoneme}` cluster `{cluster}`: {e}"))
                })?;
            }
        }
        for (phoneme, mapping) in self.vowels.iter() {
            for cluster in mapping.clusters() {
                cluster_keys_are_valid(cluster, true)
                    .map_err(|e| Error::ConfigInvalid(format!("vowel `{phoneme}` cluster `{cluster}`: {e}")))?;
            }
        }

        if self.phonology.max_onset_consonants == 0 {
            return Err(Error::ConfigInvalid("phonology.max_onset_consonants must be at least 1".into()));
        }

        for rule in &self.postprocessing.vowel_drop_rules {
            for constraint in [&rule.left_consonant, &rule.right_consonant] {
                if let ConsonantConstraint::Literal(pattern) = constraint {
                    cluster_keys_are_valid(pattern, false).map_err(|e| {
                        Error::ConfigInvalid(format!(
                            "postprocessing.vowel_drop_rules literal consonant pattern `{pattern}`: {e}"
                        ))
                    })?;
                }
            }
        }

        Ok(())
    }

    pub fn vowels_by_length(&self) -> &[String] {
        &self.vowels_by_length
    }

    pub fn consonants_by_length(&self) -> &[String] {
        &self.consonants_by_length
    }

    pub fn is_known_consonant(&self, phoneme: &str) -> bool {
        self.left_consonants.contains_key(phoneme) || self.right_consonants.contains_key(phoneme)
    }
}

/// Every character in a cluster string must be a valid key letter for its
/// side (or `*`), confirming config clusters are themselves legal strokes.
fn cluster_keys_are_valid(cluster: &str, is_vowel: bool) -> Result<(), String> {
    for ch in cluster.chars() {
        if ch == '*' {
            continue;
        }
        let known = if is_vowel {
            crate::steno::Key::vowel_from_letter(ch).is_some()
        } else {
            crate::steno::Key::left_consonant_from_letter(ch).is_some()
                || crate::steno::Key::right_consonant_from_letter(ch).is_some()
        };
        if !known {
            return Err(format!("`{ch}` is not a valid key letter"));
        }
    }
    Ok(())
}
