pub mod frontend;
pub mod phonemizer;
pub mod synthesizer;

pub use frontend::{FrontEnd, ModelInput};
pub use phonemizer::{clean_phonemizer_output, Phonemizer};
pub use synthesizer::{AcousticModel, Synthesizer};
