use std::collections::HashMap;

use crate::engine::config::{VocabConfig, VocabLayout};

/// Symbol table shared with the acoustic model. Ids are contiguous from `0`.
///
/// Symbols are strings so multi-character specials such as `<BLNK>` live in
/// the same table as single code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    id_to_symbol: Vec<String>,
    symbol_to_id: HashMap<String, usize>,
}

impl Vocabulary {
    /// Builds a vocabulary from symbols in order. Empty symbols are skipped and
    /// the first occurrence of a duplicate keeps its id.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab = Self {
            id_to_symbol: Vec::new(),
            symbol_to_id: HashMap::new(),
        };
        for symbol in symbols {
            vocab.insert(symbol.into());
        }
        vocab
    }

    /// Lays out specials and alphabet characters in the order `config.layout` dictates.
    pub fn from_config(config: &VocabConfig) -> Self {
        let characters = config
            .graphemes
            .chars()
            .chain(config.ipa_characters.chars())
            .map(String::from);
        let punctuations = config.punctuations.chars().map(String::from);

        let symbols: Vec<String> = match config.layout {
            VocabLayout::SpecialsFirst => [&config.pad, &config.eos, &config.bos, &config.blank]
                .into_iter()
                .cloned()
                .chain(characters)
                .chain(punctuations)
                .collect(),
            VocabLayout::PadPunctuationFirst => std::iter::once(config.pad.clone())
                .chain(punctuations)
                .chain(characters)
                .chain(std::iter::once(config.blank.clone()))
                .collect(),
        };
        Self::new(symbols)
    }

    fn insert(&mut self, symbol: String) {
        if symbol.is_empty() || self.symbol_to_id.contains_key(&symbol) {
            return;
        }
        let id = self.id_to_symbol.len();
        self.id_to_symbol.push(symbol.clone());
        self.symbol_to_id.insert(symbol, id);
    }

    pub fn len(&self) -> usize {
        self.id_to_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_symbol.is_empty()
    }

    pub fn id(&self, symbol: &str) -> Option<usize> {
        self.symbol_to_id.get(symbol).copied()
    }

    /// Looks up a single code point without allocating a key.
    pub fn char_id(&self, c: char) -> Option<usize> {
        let mut buf = [0u8; 4];
        self.id(c.encode_utf8(&mut buf))
    }

    pub fn symbol(&self, id: usize) -> Option<&str> {
        self.id_to_symbol.get(id).map(String::as_str)
    }

    /// Symbols in id order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.id_to_symbol.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(layout: VocabLayout) -> VocabConfig {
        VocabConfig {
            graphemes: "ab".to_string(),
            ipa_characters: "ə".to_string(),
            punctuations: ".,".to_string(),
            pad: "_".to_string(),
            eos: String::new(),
            bos: String::new(),
            blank: "<BLNK>".to_string(),
            layout,
        }
    }

    #[test]
    fn test_specials_first_layout() {
        let vocab = Vocabulary::from_config(&small_config(VocabLayout::SpecialsFirst));
        let symbols: Vec<&str> = vocab.symbols().collect();
        assert_eq!(symbols, vec!["_", "<BLNK>", "a", "b", "ə", ".", ","]);
    }

    #[test]
    fn test_pad_punctuation_first_layout() {
        let vocab = Vocabulary::from_config(&small_config(VocabLayout::PadPunctuationFirst));
        let symbols: Vec<&str> = vocab.symbols().collect();
        assert_eq!(symbols, vec!["_", ".", ",", "a", "b", "ə", "<BLNK>"]);
    }

    #[test]
    fn test_pad_punctuation_first_leaves_out_sequence_markers() {
        let mut config = small_config(VocabLayout::PadPunctuationFirst);
        config.eos = "<EOS>".to_string();
        config.bos = "<BOS>".to_string();
        let vocab = Vocabulary::from_config(&config);
        assert_eq!(vocab.id("<EOS>"), None);
        assert_eq!(vocab.id("<BOS>"), None);
        assert_eq!(vocab.len(), 7);
    }

    #[test]
    fn test_sequence_markers_follow_pad() {
        let mut config = small_config(VocabLayout::SpecialsFirst);
        config.eos = "<EOS>".to_string();
        config.bos = "<BOS>".to_string();
        let vocab = Vocabulary::from_config(&config);
        assert_eq!(vocab.id("_"), Some(0));
        assert_eq!(vocab.id("<EOS>"), Some(1));
        assert_eq!(vocab.id("<BOS>"), Some(2));
        assert_eq!(vocab.id("<BLNK>"), Some(3));
        assert_eq!(vocab.id("a"), Some(4));
    }

    #[test]
    fn test_empty_specials_are_omitted() {
        let mut config = small_config(VocabLayout::SpecialsFirst);
        config.pad = String::new();
        config.blank = String::new();
        let vocab = Vocabulary::from_config(&config);
        assert_eq!(vocab.id("a"), Some(0));
        assert_eq!(vocab.len(), 5);
    }

    #[test]
    fn test_duplicates_keep_first_id() {
        let vocab = Vocabulary::new(["a", "b", "a", "", "c", "b"]);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.id("a"), Some(0));
        assert_eq!(vocab.id("c"), Some(2));
    }

    #[test]
    fn test_blank_equal_to_pad_shares_id() {
        let mut config = small_config(VocabLayout::SpecialsFirst);
        config.blank = "_".to_string();
        let vocab = Vocabulary::from_config(&config);
        assert_eq!(vocab.id("_"), Some(0));
        assert_eq!(vocab.id("a"), Some(1));
    }

    #[test]
    fn test_char_id_and_symbol_lookup() {
        let vocab = Vocabulary::from_config(&small_config(VocabLayout::SpecialsFirst));
        assert_eq!(vocab.char_id('ə'), Some(4));
        assert_eq!(vocab.char_id('z'), None);
        assert_eq!(vocab.symbol(1), Some("<BLNK>"));
        assert_eq!(vocab.symbol(99), None);
    }

    #[test]
    fn test_default_alphabet_is_deterministic() {
        let first = Vocabulary::from_config(&VocabConfig::default());
        let second = Vocabulary::from_config(&VocabConfig::default());
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
