pub mod normalize;
pub mod punctuation;

pub use normalize::{Normalizer, SymbolNormalizer};
pub use punctuation::{Position, PunctuationRun, Punctuator};
