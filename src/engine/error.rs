use thiserror::Error;

use crate::text::Position;

pub type Result<T> = std::result::Result<T, FrontendError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrontendError {
    /// A code point in the tokenized text has no vocabulary entry.
    #[error("Character {symbol:?} at position {position} is not in the vocabulary")]
    UnknownSymbol { symbol: char, position: usize },

    #[error("Token id {0} is out of range for the vocabulary")]
    InvalidId(usize),

    /// The segments handed to `restore` cannot satisfy the run sequence.
    #[error(
        "Cannot restore {position:?} run #{run_index}: {segments_left} segment(s) left"
    )]
    InconsistentRestore {
        run_index: usize,
        position: Position,
        segments_left: usize,
    },

    #[error("Vocabulary has neither a blank nor a pad symbol to intersperse")]
    MissingFiller,

    #[error("Invalid punctuation set: {0}")]
    InvalidPunctuation(String),

    #[error("Phonemizer failed on segment {segment}: {message}")]
    Phonemizer { segment: usize, message: String },

    #[error("Acoustic model failed: {0}")]
    Inference(String),
}
