use rayon::prelude::*;

use super::phonemizer::{clean_phonemizer_output, Phonemizer};
use crate::engine::config::{FrontendConfig, SegmentFailurePolicy, SynthesisScales};
use crate::engine::error::{FrontendError, Result};
use crate::text::{Normalizer, Punctuator};
use crate::tokenizer::Tokenizer;

/// Tensors for a single utterance, batch size 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInput {
    /// Interspersed token ids
    pub input_ids: Vec<i64>,
    pub input_lengths: Vec<i64>,
    /// noise, length, noise_dp
    pub scales: [f32; 3],
}

impl ModelInput {
    pub fn new(ids: &[usize], scales: SynthesisScales) -> Self {
        let input_ids: Vec<i64> = ids.iter().map(|&id| id as i64).collect();
        let input_lengths = vec![input_ids.len() as i64];
        Self {
            input_ids,
            input_lengths,
            scales: scales.to_array(),
        }
    }

    /// `[batch, sequence]` shape of `input_ids`.
    pub fn shape(&self) -> [usize; 2] {
        [1, self.input_ids.len()]
    }
}

/// Text → phonemes → model input, keeping punctuation the phonemizer would drop.
pub struct FrontEnd<N, P> {
    config: FrontendConfig,
    punctuator: Punctuator,
    tokenizer: Tokenizer,
    normalizer: N,
    phonemizer: P,
}

impl<N: Normalizer, P: Phonemizer> FrontEnd<N, P> {
    pub fn new(config: FrontendConfig, normalizer: N, phonemizer: P) -> Result<Self> {
        let punctuator = Punctuator::new(&config.punctuation.punctuations)?;
        let tokenizer = Tokenizer::new(config.vocab.clone());
        Ok(Self {
            config,
            punctuator,
            tokenizer,
            normalizer,
            phonemizer,
        })
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn punctuator(&self) -> &Punctuator {
        &self.punctuator
    }

    /// Normalizes `text`, phonemizes each punctuation-free segment and puts the
    /// punctuation back.
    pub fn phonemize(&self, text: &str) -> Result<String> {
        let language = &self.config.phonemizer.language;
        let normalized = self.normalizer.normalize(text, language);
        let (segments, runs) = self.punctuator.strip_to_restore(&normalized);
        log::debug!(
            "phonemizing {} segment(s) around {} punctuation run(s)",
            segments.len(),
            runs.len()
        );

        let phonemized = self.phonemize_segments(&segments)?;
        Punctuator::restore(&phonemized, &runs)
    }

    // Segments are phonemized in parallel; collect keeps them in source order,
    // which restore depends on.
    fn phonemize_segments(&self, segments: &[String]) -> Result<Vec<String>> {
        let language = &self.config.phonemizer.language;
        let ipa_variant = self.config.phonemizer.ipa_variant;
        let policy = self.config.on_segment_failure;

        segments
            .par_iter()
            .enumerate()
            .map(|(index, segment)| {
                match self
                    .phonemizer
                    .phonemize_segment(segment, language, ipa_variant)
                {
                    Ok(raw) => Ok(clean_phonemizer_output(&raw)),
                    Err(err) => match policy {
                        SegmentFailurePolicy::Abort => Err(tag_segment(err, index)),
                        SegmentFailurePolicy::SubstituteEmpty => {
                            log::warn!("segment {} phonemized as empty: {}", index, err);
                            Ok(String::new())
                        }
                    },
                }
            })
            .collect()
    }

    /// Full front-end: phonemize, tokenize and intersperse the blank.
    pub fn encode(&self, text: &str) -> Result<ModelInput> {
        let phonemes = self.phonemize(text)?;
        let tokens = self.tokenizer.tokenize(&phonemes)?;
        let ids = self.tokenizer.intersperse_blank(&tokens)?;
        log::debug!("encoded {} phoneme token(s) into {} ids", tokens.len(), ids.len());
        Ok(ModelInput::new(&ids, self.config.scales))
    }
}

fn tag_segment(err: FrontendError, segment: usize) -> FrontendError {
    match err {
        FrontendError::Phonemizer { message, .. } => {
            FrontendError::Phonemizer { segment, message }
        }
        other => FrontendError::Phonemizer {
            segment,
            message: other.to_string(),
        },
    }
}
