//! A single syllable: onset, nucleus, and coda phoneme sequences.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    pub onset: Vec<String>,
    pub nucleus: String,
    pub coda: Vec<String>,
}

impl Syllable {
    pub fn new(onset: Vec<String>, nucleus: String, coda: Vec<String>) -> Syllable {
        Syllable { onset, nucleus, coda }
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.onset.join(""), self.nucleus, self.coda.join(""))
    }
}
