pub mod vocab;

pub use vocab::Vocabulary;

use crate::engine::config::VocabConfig;
use crate::engine::error::{FrontendError, Result};

/// Converts phonemized text into vocabulary ids for the acoustic model.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    vocab: Vocabulary,
    config: VocabConfig,
}

impl Tokenizer {
    pub fn new(config: VocabConfig) -> Self {
        let vocab = Vocabulary::from_config(&config);
        log::debug!(
            "tokenizer vocabulary: {} symbols ({:?} layout)",
            vocab.len(),
            config.layout
        );
        Self { vocab, config }
    }

    pub fn new_with_default_config() -> Self {
        Self::new(VocabConfig::default())
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn config(&self) -> &VocabConfig {
        &self.config
    }

    pub fn pad_id(&self) -> Option<usize> {
        self.vocab.id(&self.config.pad)
    }

    pub fn blank_id(&self) -> Option<usize> {
        self.vocab.id(&self.config.blank)
    }

    pub fn bos_id(&self) -> Option<usize> {
        self.vocab.id(&self.config.bos)
    }

    pub fn eos_id(&self) -> Option<usize> {
        self.vocab.id(&self.config.eos)
    }

    /// Id placed between tokens: the blank, or the pad when no blank is configured.
    pub fn filler_id(&self) -> Option<usize> {
        self.blank_id().or_else(|| self.pad_id())
    }

    /// Maps every code point of `text` to its id.
    ///
    /// Fails on the first code point missing from the vocabulary; nothing is
    /// skipped or substituted.
    pub fn tokenize(&self, text: &str) -> Result<Vec<usize>> {
        text.chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.vocab
                    .char_id(symbol)
                    .ok_or(FrontendError::UnknownSymbol { symbol, position })
            })
            .collect()
    }

    pub fn decode(&self, ids: &[usize]) -> Result<String> {
        let mut text = String::new();
        for &id in ids {
            let symbol = self.vocab.symbol(id).ok_or(FrontendError::InvalidId(id))?;
            text.push_str(symbol);
        }
        Ok(text)
    }

    /// Puts the filler id before, between and after all tokens (`2n + 1` ids).
    pub fn intersperse_blank(&self, tokens: &[usize]) -> Result<Vec<usize>> {
        let filler = self.filler_id().ok_or(FrontendError::MissingFiller)?;
        Ok(intersperse(tokens, filler))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new_with_default_config()
    }
}

/// `[f, t0, f, t1, f, ..., f]`: even slots hold `filler`, slot `2k + 1` holds `tokens[k]`.
pub fn intersperse(tokens: &[usize], filler: usize) -> Vec<usize> {
    let mut result = vec![filler; tokens.len() * 2 + 1];
    for (k, &token) in tokens.iter().enumerate() {
        result[k * 2 + 1] = token;
    }
    result
}
