//! Loading the word-to-IPA-pronunciation index from the input CSV-ish file.

pub mod index;

pub use index::IpaIndex;
