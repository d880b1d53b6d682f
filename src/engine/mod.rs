pub mod config;
pub mod error;

pub use config::{
    FrontendConfig, InferenceOptions, PhonemizerConfig, PunctuationConfig, SegmentFailurePolicy,
    SynthesisScales, VocabConfig, VocabLayout,
};
pub use error::{FrontendError, Result};
