//! Error taxonomy for the dictionary compiler.
//!
//! `ConfigInvalid` and `IpaMissing` are fatal: callers should propagate them
//! out of the pipeline. The rest are recoverable — the orchestrator logs
//! them and skips the offending word, pronunciation, or candidate stroke.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("IPA notation file missing or unreadable: {0}")]
    IpaMissing(String),

    #[error("`{0}` is out of steno order")]
    OutOfStenoOrder(String),

    #[error("stroke string `{0}` has no vowel, star, or dash to mark the middle")]
    MissingDashInStroke(String),

    #[error("could not syllabify `{0}`")]
    Unsyllabifiable(String),

    #[error("no valid stroke sequence found for `{0}`")]
    Untranslatable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
