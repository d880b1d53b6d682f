use lazy_static::lazy_static;
use regex::Regex;

use crate::engine::error::Result;

lazy_static! {
    static ref LINE_BREAKS: Regex = Regex::new(r"\r\n|\n|\r").unwrap();
    static ref INVISIBLES: Regex = Regex::new(r"[\x{0}\x{200B}-\x{200D}\x{FEFF}]").unwrap();
}

/// Grapheme-to-phoneme engine (e.g. espeak-ng) called once per punctuation-free segment.
///
/// Segments may be phonemized concurrently, so implementations must not rely
/// on being called in order.
pub trait Phonemizer: Send + Sync {
    fn phonemize_segment(&self, text: &str, lang: &str, ipa_variant: u8) -> Result<String>;
}

/// Flattens line breaks and drops NULs and zero-width characters that
/// phonemizers leave in their output but no vocabulary contains.
pub fn clean_phonemizer_output(raw: &str) -> String {
    let flattened = LINE_BREAKS.replace_all(raw, " ");
    INVISIBLES.replace_all(flattened.trim(), "").into_owned()
}
