use std::convert::Infallible;
use std::io;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid count {count}: must be between {min} and {max}")]
    InvalidCount { count: usize, min: usize, max: usize },

    #[error("invalid length {length}: must be between {min} and {max}")]
    InvalidLength { length: usize, min: usize, max: usize },

    #[error("invalid word count {word_count}: must be between {min} and {max}")]
    InvalidWordCount { word_count: usize, min: usize, max: usize },

    #[error("alphabet has {len} characters, at least {min} are required")]
    InvalidAlphabet { len: usize, min: usize },

    /// Too few words, or some of them are empty strings.
    #[error("word list has {len} words ({empty} empty), need {min} non-empty words")]
    InvalidWordList { len: usize, min: usize, empty: usize },

    #[error("unrecognized casing '{value}'")]
    InvalidCasing { value: String },

    #[error("random source exhausted")]
    RandomSourceExhausted,

    #[error("random source failed: {0}")]
    RandomSource(#[source] io::Error),

    #[error("cannot select from an empty candidate set")]
    EmptyCandidateSet,
}

impl Error {
    /// Returns true for errors raised by parameter validation, before any
    /// randomness was consumed.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidCount { .. }
                | Error::InvalidLength { .. }
                | Error::InvalidWordCount { .. }
                | Error::InvalidAlphabet { .. }
                | Error::InvalidWordList { .. }
                | Error::InvalidCasing { .. }
        )
    }
}

// Lets an already-typed casing flow through the same `TryInto` bound as raw values.
impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
