//! A single steno chord: a set of keys obeying steno order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

use super::key::Key;

/// A single steno stroke: a bitmap over the 23 keys plus the index of the
/// last key placed in it (used to check steno order as keys are appended).
#[derive(Debug, Clone, Copy, Eq)]
pub struct Stroke {
    bitmap: u32,
    last_active_pos: Option<u8>,
}

impl Stroke {
    pub fn empty() -> Stroke {
        Stroke { bitmap: 0, last_active_pos: None }
    }

    /// Build a stroke from keys given in steno order, checking that order.
    pub fn from_keys(keys: &[Key]) -> Result<Stroke, Error> {
        let mut stroke = Stroke::empty();
        stroke.add_keys_maintain_steno_order(keys)?;
        Ok(stroke)
    }

    pub fn add_keys_maintain_steno_order(&mut self, keys: &[Key]) -> Result<(), Error> {
        for &key in keys {
            if key.participates_in_order() {
                if let Some(last) = self.last_active_pos {
                    if key.index() < last {
                        return Err(Error::OutOfStenoOrder(String::new()));
                    }
                }
                self.last_active_pos = Some(key.index());
            }
            self.bitmap |= 1 << key.index();
        }
        Ok(())
    }

    /// Add keys without checking or maintaining steno order. Mirrors the
    /// reference implementation's quirk: `last_active_pos` is set to
    /// whichever non-star/non-num key was added last, not the maximum.
    pub fn add_keys_ignore_steno_order(&mut self, keys: &[Key]) {
        for &key in keys {
            if key.participates_in_order() {
                self.last_active_pos = Some(key.index());
            }
            self.bitmap |= 1 << key.index();
        }
    }

    pub fn clear_keys(&mut self, keys: &[Key]) {
        for &key in keys {
            self.bitmap &= !(1 << key.index());
        }

        self.last_active_pos = None;
        for &key in Key::ALL.iter().rev() {
            if self.is_active(key) && key.participates_in_order() {
                self.last_active_pos = Some(key.index());
                break;
            }
        }
    }

    pub fn clear_all_vowels(&mut self) {
        self.clear_keys(&[Key::A, Key::O, Key::E, Key::U]);
    }

    fn is_active(&self, key: Key) -> bool {
        self.bitmap & (1 << key.index()) != 0
    }

    pub fn get_vowels(&self) -> Vec<Key> {
        [Key::A, Key::O, Key::E, Key::U]
            .into_iter()
            .filter(|&k| self.is_active(k))
            .collect()
    }

    pub fn get_last_key(&self) -> Option<Key> {
        self.last_active_pos.map(Key::from_index)
    }

    pub fn get_keys(&self) -> Vec<Key> {
        Key::ALL.into_iter().filter(|&k| self.is_active(k)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bitmap == 0
    }

    pub fn has_left_consonant(&self) -> bool {
        self.has_active_key_between(Key::Ls, Key::Lr)
    }

    pub fn has_right_consonant(&self) -> bool {
        self.has_active_key_between(Key::Rf, Key::Rz)
    }

    /// The left-consonant keys present, as letters in steno order, for
    /// comparison against a configured literal key pattern.
    pub fn left_consonant_letters(&self) -> String {
        self.active_keys_between(Key::Ls, Key::Lr).into_iter().map(|k| k.letter()).collect()
    }

    /// The right-consonant keys present, as letters in steno order, for
    /// comparison against a configured literal key pattern.
    pub fn right_consonant_letters(&self) -> String {
        self.active_keys_between(Key::Rf, Key::Rz).into_iter().map(|k| k.letter()).collect()
    }

    fn has_active_key_between(&self, min_key: Key, max_key: Key) -> bool {
        (min_key.index()..=max_key.index()).any(|i| self.bitmap & (1 << i) != 0)
    }

    pub fn left_consonants_match(&self, other: &Stroke) -> bool {
        self.region_matches(other, Key::Ls, Key::Lr)
    }

    pub fn vowels_match(&self, other: &Stroke) -> bool {
        self.region_matches(other, Key::A, Key::U)
    }

    pub fn right_consonants_match(&self, other: &Stroke) -> bool {
        self.region_matches(other, Key::Rf, Key::Rz)
    }

    fn region_matches(&self, other: &Stroke, min_key: Key, max_key: Key) -> bool {
        self.active_keys_between(min_key, max_key) == other.active_keys_between(min_key, max_key)
    }

    /// Active keys in `[min_key, max_key]`, ignoring the star key.
    fn active_keys_between(&self, min_key: Key, max_key: Key) -> Vec<Key> {
        (min_key.index()..=max_key.index())
            .filter(|&i| self.bitmap & (1 << i) != 0 && i != Key::Star.index())
            .map(Key::from_index)
            .collect()
    }
}

impl Default for Stroke {
    fn default() -> Stroke {
        Stroke::empty()
    }
}

impl PartialEq for Stroke {
    fn eq(&self, other: &Self) -> bool {
        self.last_active_pos == other.last_active_pos && self.bitmap == other.bitmap
    }
}

impl std::hash::Hash for Stroke {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bitmap.hash(state);
    }
}

impl PartialOrd for Stroke {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Stroke {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in 0..=Key::Rz.index() {
            let active_self = self.bitmap & (1 << i) != 0;
            let active_other = other.bitmap & (1 << i) != 0;

            if active_self && !active_other {
                return if other.last_active_pos.is_some_and(|p| p > i) {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
            if active_other && !active_self {
                return if self.last_active_pos.is_some_and(|p| p < i) {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
        }
        Ordering::Equal
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut has_vowel_or_star = false;

        for &key in Key::ALL.iter() {
            if self.is_active(key) {
                write!(f, "{}", key.letter())?;
                if key.is_vowel_or_star() {
                    has_vowel_or_star = true;
                }
            }
            if key == Key::U && !has_vowel_or_star {
                write!(f, "-")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Stroke {
    type Err = Error;

    /// Parse a stroke's printable form, e.g. `"TP*EURS"`, `"S-P"`.
    ///
    /// A string with no vowel and no star must contain a `-` marking the
    /// split between left and right consonants.
    fn from_str(stroke_str: &str) -> Result<Stroke, Error> {
        let mut keys = Vec::new();
        let mut past_middle = false;

        for ch in stroke_str.chars() {
            if ch == '-' {
                past_middle = true;
                continue;
            }
            if ch == '#' {
                keys.push(Key::Num);
                continue;
            }

            let mut matched = false;
            for key in [Key::A, Key::O, Key::Star, Key::E, Key::U] {
                if ch == key.letter() {
                    past_middle = true;
                    keys.push(key);
                    matched = true;
                    break;
                }
            }
            if matched {
                continue;
            }

            let consonants: &[Key] = if past_middle {
                &Key::RIGHT_CONSONANTS
            } else {
                &Key::LEFT_CONSONANTS
            };
            for &key in consonants {
                if ch == key.letter() {
                    keys.push(key);
                    break;
                }
            }
        }

        if !past_middle {
            return Err(Error::MissingDashInStroke(stroke_str.to_string()));
        }

        Stroke::from_keys(&keys).map_err(|_| Error::OutOfStenoOrder(stroke_str.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stroke_has_no_keys() {
        let s = Stroke::empty();
        assert!(s.is_empty());
        assert_eq!(s.get_keys(), Vec::<Key>::new());
        assert_eq!(s.to_string(), "");
    }

    #[test]
    fn star_out_of_order_is_fine() {
        let s = Stroke::from_keys(&[Key::Lr, Key::Star, Key::Ls]).unwrap();
        assert!(s.get_keys().contains(&Key::Star));
    }

    #[test]
    fn non_star_out_of_order_errors() {
        let err = Stroke::from_keys(&[Key::Lr, Key::Ls]);
        assert!(matches!(err, Err(Error::OutOfStenoOrder(_))));
    }

    #[test]
    fn display_inserts_dash_when_no_vowel_or_star() {
        let s = Stroke::from_keys(&[Key::Ls, Key::Rp]).unwrap();
        assert_eq!(s.to_string(), "S-P");
    }

    #[test]
    fn display_omits_dash_with_vowel() {
        let s = Stroke::from_keys(&[Key::Ls, Key::A, Key::Rp]).unwrap();
        assert_eq!(s.to_string(), "SAP");
    }

    #[test]
    fn display_omits_dash_with_star_only() {
        let s = Stroke::from_keys(&[Key::Lt, Key::Star]).unwrap();
        assert_eq!(s.to_string(), "T*");
    }

    #[test]
    fn from_str_round_trips() {
        let s = Stroke::from_str("TP*EURS").unwrap();
        assert_eq!(s.to_string(), "TP*EURS");
    }

    #[test]
    fn from_str_requires_dash_without_vowel_or_star() {
        assert!(matches!(Stroke::from_str("SP"), Err(Error::MissingDashInStroke(_))));
    }

    #[test]
    fn from_str_dash_only_stroke_is_empty() {
        let s = Stroke::from_str("-").unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn equality_ignores_key_insertion_path() {
        let a = Stroke::from_keys(&[Key::Ls, Key::A]).unwrap();
        let b = Stroke::from_str("SA").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ordering_places_unstarred_before_starred() {
        let unstarred = Stroke::from_keys(&[Key::Ls, Key::A]).unwrap();
        let starred = Stroke::from_keys(&[Key::Ls, Key::A, Key::Star]).unwrap();
        assert!(unstarred < starred);
    }

    #[test]
    fn has_left_and_right_consonant() {
        let s = Stroke::from_keys(&[Key::Ls, Key::A, Key::Rp]).unwrap();
        assert!(s.has_left_consonant());
        assert!(s.has_right_consonant());
    }

    #[test]
    fn clear_all_vowels_leaves_consonants() {
        let mut s = Stroke::from_keys(&[Key::Ls, Key::A, Key::Rp]).unwrap();
        s.clear_all_vowels();
        assert_eq!(s.get_vowels(), Vec::<Key>::new());
        assert!(s.has_left_consonant());
        assert!(s.has_right_consonant());
    }
}
