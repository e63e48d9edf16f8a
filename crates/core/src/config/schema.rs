//! The on-disk shape of the configuration YAML.
//!
//! Deserialized as-is, then lowered and validated into [`crate::config::Config`]
//! by `Config::load`. Kept separate from the validated model so a malformed
//! document fails with serde's own message before any domain validation runs.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// A phoneme's steno mapping, as written in YAML. Can be a single cluster
/// string (`"TKPW"`), a list of alternative clusters (`["FT", "*S"]`), or
/// `null`, meaning the phoneme has no steno representation at all.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawMapping {
    None,
    Single(String),
    Alternatives(Vec<String>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPairRule {
    /// Only apply this rule when the onset built so far has exactly this
    /// many consonants. Absent means "any length".
    #[serde(default)]
    pub onset_len_equals: Option<usize>,
    pub prev_in: Vec<String>,
    #[serde(default)]
    pub phoneme_in: Option<Vec<String>>,
    #[serde(default)]
    pub phoneme_not_in: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPhonology {
    pub max_onset_consonants: usize,
    #[serde(default)]
    pub banned_onset_initial: Vec<String>,
    #[serde(default)]
    pub pair_rules: Vec<RawPairRule>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawFoldTarget {
    NextStroke,
    PreviousStroke,
}

/// A literal stroke-folding rule: when the matched stroke appears (by its
/// printable text) in the configured position, fold it into its neighbor.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFoldRule {
    pub match_stroke: String,
    pub fold_into: RawFoldTarget,
    /// Keys to add to the stroke being folded into, e.g. `["G", "S"]`.
    pub add_keys: Vec<String>,
    /// Don't fold if the neighbor's last key is one of these.
    #[serde(default)]
    pub skip_if_neighbor_ends_with: Vec<String>,
    /// Don't fold if the neighbor already contains all of these keys.
    #[serde(default)]
    pub skip_if_neighbor_contains: Vec<String>,
    /// If true, keep the unfolded sequence as a candidate alongside the
    /// folded one instead of discarding it.
    #[serde(default)]
    pub keep_original: bool,
}

/// A constraint on the consonant letters present on one side of a stroke, as
/// written in YAML. Either of the reserved sentinel strings `ANY_SET_OF_KEYS`
/// / `ANY_NON_EMPTY_SET_OF_KEYS`, or any other string, taken as a literal key
/// pattern to match exactly.
#[derive(Debug, Clone)]
pub enum RawConsonantConstraint {
    AnySetOfKeys,
    AnyNonEmptySetOfKeys,
    Literal(String),
}

impl<'de> Deserialize<'de> for RawConsonantConstraint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "ANY_SET_OF_KEYS" => RawConsonantConstraint::AnySetOfKeys,
            "ANY_NON_EMPTY_SET_OF_KEYS" => RawConsonantConstraint::AnyNonEmptySetOfKeys,
            _ => RawConsonantConstraint::Literal(raw),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawVowelDropScope {
    First,
    Middle,
    Last,
    NotFirst,
    Any,
}

/// A vowel-dropping rule: if a stroke's vowel cluster matches one of
/// `vowel_cluster_in` and its left/right consonant clusters satisfy the
/// configured constraints, drop the vowels (keeping the star, if any).
#[derive(Debug, Clone, Deserialize)]
pub struct RawVowelDropRule {
    pub applies_to: RawVowelDropScope,
    pub vowel_cluster_in: Vec<String>,
    pub left_consonant: RawConsonantConstraint,
    pub right_consonant: RawConsonantConstraint,
    /// If true, keep the un-dropped sequence as a candidate alongside the
    /// dropped one instead of discarding it.
    #[serde(default)]
    pub keep_original: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPostprocessing {
    #[serde(default = "default_true")]
    pub disallow_final_f_for_s: bool,
    #[serde(default)]
    pub vowel_drop_rules: Vec<RawVowelDropRule>,
    #[serde(default)]
    pub fold_rules: Vec<RawFoldRule>,
    #[serde(default = "default_true")]
    pub disambiguate_homophones: bool,
    #[serde(default = "default_disambiguator_stroke")]
    pub disambiguator_stroke: String,
}

fn default_true() -> bool {
    true
}

fn default_disambiguator_stroke() -> String {
    "W-B".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    pub vowels: HashMap<String, RawMapping>,
    pub left_consonants: HashMap<String, RawMapping>,
    pub right_consonants: HashMap<String, RawMapping>,
    pub phonology: RawPhonology,
    pub postprocessing: RawPostprocessing,
}
