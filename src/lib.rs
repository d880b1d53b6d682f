//! Text front-end for neural speech synthesis.
//!
//! Raw text is normalized, split around punctuation, phonemized segment by
//! segment, re-punctuated and finally encoded as interspersed vocabulary ids
//! for the acoustic model.

pub mod engine;
pub mod pipeline;
pub mod text;
pub mod tokenizer;

pub use engine::{FrontendConfig, FrontendError, Result};
pub use pipeline::{AcousticModel, FrontEnd, ModelInput, Phonemizer, Synthesizer};
pub use text::{Normalizer, Position, PunctuationRun, Punctuator, SymbolNormalizer};
pub use tokenizer::{intersperse, Tokenizer, Vocabulary};
