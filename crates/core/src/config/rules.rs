//! Validated, lowered rule tables used by syllabification and postprocessing.

use super::schema::{
    RawConsonantConstraint, RawFoldRule, RawFoldTarget, RawPairRule, RawPhonology, RawVowelDropRule,
    RawVowelDropScope,
};

#[derive(Debug, Clone)]
pub struct PairRule {
    pub onset_len_equals: Option<usize>,
    pub prev_in: Vec<String>,
    pub phoneme_in: Option<Vec<String>>,
    pub phoneme_not_in: Option<Vec<String>>,
}

impl PairRule {
    pub fn matches(&self, prev: &str, phoneme: &str, onset_len: usize) -> bool {
        if let Some(n) = self.onset_len_equals {
            if onset_len != n {
                return false;
            }
        }
        if !self.prev_in.iter().any(|p| p == prev) {
            return false;
        }
        if let Some(allowed) = &self.phoneme_in {
            if !allowed.iter().any(|p| p == phoneme) {
                return false;
            }
        }
        if let Some(excluded) = &self.phoneme_not_in {
            if excluded.iter().any(|p| p == phoneme) {
                return false;
            }
        }
        true
    }
}

impl From<&RawPairRule> for PairRule {
    fn from(raw: &RawPairRule) -> Self {
        PairRule {
            onset_len_equals: raw.onset_len_equals,
            prev_in: raw.prev_in.clone(),
            phoneme_in: raw.phoneme_in.clone(),
            phoneme_not_in: raw.phoneme_not_in.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Phonology {
    pub max_onset_consonants: usize,
    pub banned_onset_initial: Vec<String>,
    pub pair_rules: Vec<PairRule>,
}

impl From<&RawPhonology> for Phonology {
    fn from(raw: &RawPhonology) -> Self {
        Phonology {
            max_onset_consonants: raw.max_onset_consonants,
            banned_onset_initial: raw.banned_onset_initial.clone(),
            pair_rules: raw.pair_rules.iter().map(PairRule::from).collect(),
        }
    }
}

/// Which stroke(s) in a sequence a vowel-drop rule is eligible to apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VowelDropScope {
    First,
    Middle,
    Last,
    NotFirst,
    Any,
}

impl VowelDropScope {
    pub fn matches(self, index: usize, len: usize) -> bool {
        match self {
            VowelDropScope::First => index == 0,
            VowelDropScope::Last => index + 1 == len,
            VowelDropScope::Middle => index != 0 && index + 1 != len,
            VowelDropScope::NotFirst => index != 0,
            VowelDropScope::Any => true,
        }
    }
}

impl From<&RawVowelDropScope> for VowelDropScope {
    fn from(raw: &RawVowelDropScope) -> Self {
        match raw {
            RawVowelDropScope::First => VowelDropScope::First,
            RawVowelDropScope::Middle => VowelDropScope::Middle,
            RawVowelDropScope::Last => VowelDropScope::Last,
            RawVowelDropScope::NotFirst => VowelDropScope::NotFirst,
            RawVowelDropScope::Any => VowelDropScope::Any,
        }
    }
}

/// A constraint on the consonant letters present on one side of a stroke.
#[derive(Debug, Clone)]
pub enum ConsonantConstraint {
    /// Any set of keys, including none at all.
    AnySetOfKeys,
    /// At least one key must be present.
    AnyNonEmptySetOfKeys,
    /// The consonant letters must match this pattern exactly.
    Literal(String),
}

impl ConsonantConstraint {
    pub fn matches(&self, letters: &str) -> bool {
        match self {
            ConsonantConstraint::AnySetOfKeys => true,
            ConsonantConstraint::AnyNonEmptySetOfKeys => !letters.is_empty(),
            ConsonantConstraint::Literal(pattern) => letters == pattern,
        }
    }
}

impl From<&RawConsonantConstraint> for ConsonantConstraint {
    fn from(raw: &RawConsonantConstraint) -> Self {
        match raw {
            RawConsonantConstraint::AnySetOfKeys => ConsonantConstraint::AnySetOfKeys,
            RawConsonantConstraint::AnyNonEmptySetOfKeys => ConsonantConstraint::AnyNonEmptySetOfKeys,
            RawConsonantConstraint::Literal(pattern) => ConsonantConstraint::Literal(pattern.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct VowelDropRule {
    pub applies_to: VowelDropScope,
    pub vowel_cluster_in: Vec<String>,
    pub left_consonant: ConsonantConstraint,
    pub right_consonant: ConsonantConstraint,
    pub keep_original: bool,
}

impl From<&RawVowelDropRule> for VowelDropRule {
    fn from(raw: &RawVowelDropRule) -> Self {
        VowelDropRule {
            applies_to: VowelDropScope::from(&raw.applies_to),
            vowel_cluster_in: raw.vowel_cluster_in.clone(),
            left_consonant: ConsonantConstraint::from(&raw.left_consonant),
            right_consonant: ConsonantConstraint::from(&raw.right_consonant),
            keep_original: raw.keep_original,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldTarget {
    NextStroke,
    PreviousStroke,
}

impl From<&RawFoldTarget> for FoldTarget {
    fn from(raw: &RawFoldTarget) -> Self {
        match raw {
            RawFoldTarget::NextStroke => FoldTarget::NextStroke,
            RawFoldTarget::PreviousStroke => FoldTarget::PreviousStroke,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FoldRule {
    pub match_stroke: String,
    pub fold_into: FoldTarget,
    pub add_keys: Vec<String>,
    pub skip_if_neighbor_ends_with: Vec<String>,
    pub skip_if_neighbor_contains: Vec<String>,
    pub keep_original: bool,
}

impl From<&RawFoldRule> for FoldRule {
    fn from(raw: &RawFoldRule) -> Self {
        FoldRule {
            match_stroke: raw.match_stroke.clone(),
            fold_into: FoldTarget::from(&raw.fold_into),
            add_keys: raw.add_keys.clone(),
            skip_if_neighbor_ends_with: raw.skip_if_neighbor_ends_with.clone(),
            skip_if_neighbor_contains: raw.skip_if_neighbor_contains.clone(),
            keep_original: raw.keep_original,
        }
    }
}
