// Configuration for the speech front-end.
// Defaults reproduce the English VITS model the front-end was built for.

/// Punctuation kept out of phonemizer input and restored afterwards.
pub const DEFAULT_PUNCTUATIONS: &str = ";:,.!?¡¿—…\"«»“”";

pub const DEFAULT_GRAPHEMES: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Vocabulary punctuation. Unlike [`DEFAULT_PUNCTUATIONS`] this includes the space.
pub const DEFAULT_VOCAB_PUNCTUATIONS: &str = ";:,.!?¡¿—…\"«»“” ";

pub const DEFAULT_IPA_CHARACTERS: &str = "ɑɐɒæɓʙβɔɕçɗɖðʤəɘɚɛɜɝɞɟʄɡɠɢʛɦɧħɥʜɨɪʝɭɬɫɮʟɱɯɰŋɳɲɴøɵɸθœɶʘɹɺɾɻʀʁɽʂʃʈʧʉʊʋⱱʌɣɤʍχʎʏʑʐʒʔʡʕʢǀǁǂǃˈˌːˑʼʴʰʱʲʷˠˤ˞↓↑→↗↘'̩'ᵻ";

pub const DEFAULT_PAD: &str = "_";
pub const DEFAULT_BLANK: &str = "<BLNK>";

/// Punctuation segmenter configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PunctuationConfig {
    pub punctuations: String,
}

impl Default for PunctuationConfig {
    fn default() -> Self {
        Self {
            punctuations: DEFAULT_PUNCTUATIONS.to_string(),
        }
    }
}

/// Order in which vocabulary ids are handed out.
///
/// The ids are consumed by a pretrained model, so the layout must match the
/// table the model was exported with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VocabLayout {
    /// pad, eos, bos, blank, then graphemes + IPA, then punctuation.
    #[default]
    SpecialsFirst,
    /// pad, punctuation, graphemes + IPA, blank.
    ///
    /// This layout has no slot for sequence markers: `bos` and `eos` are left
    /// out of the vocabulary even when set.
    PadPunctuationFirst,
}

/// Vocabulary configuration. An empty special symbol is left out of the vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabConfig {
    pub graphemes: String,

    /// Extra phonetic symbols, appended to the graphemes
    pub ipa_characters: String,

    pub punctuations: String,

    pub pad: String,
    pub eos: String,
    pub bos: String,

    /// Filler interspersed between tokens (falls back to pad when empty)
    pub blank: String,

    pub layout: VocabLayout,
}

impl VocabConfig {
    /// Base text tokenizer variant with explicit sequence markers.
    pub fn with_sequence_markers() -> Self {
        Self {
            pad: "<PAD>".to_string(),
            eos: "<EOS>".to_string(),
            bos: "<BOS>".to_string(),
            ..Self::default()
        }
    }
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            graphemes: DEFAULT_GRAPHEMES.to_string(),
            ipa_characters: DEFAULT_IPA_CHARACTERS.to_string(),
            punctuations: DEFAULT_VOCAB_PUNCTUATIONS.to_string(),
            pad: DEFAULT_PAD.to_string(),
            eos: String::new(),
            bos: String::new(),
            blank: DEFAULT_BLANK.to_string(),
            layout: VocabLayout::SpecialsFirst,
        }
    }
}

/// Arguments handed to the external phonemizer for every segment
#[derive(Debug, Clone, PartialEq)]
pub struct PhonemizerConfig {
    /// Voice / language code (default "en-us")
    pub language: String,

    /// IPA output variant (default 3)
    pub ipa_variant: u8,
}

impl Default for PhonemizerConfig {
    fn default() -> Self {
        Self {
            language: "en-us".to_string(),
            ipa_variant: 3,
        }
    }
}

/// Sampling scales fed to the acoustic model next to the token ids
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisScales {
    pub noise_scale: f32,    // default 0.667
    pub length_scale: f32,   // default 1.0
    pub noise_scale_dp: f32, // default 0.8
}

impl SynthesisScales {
    pub fn to_array(self) -> [f32; 3] {
        [self.noise_scale, self.length_scale, self.noise_scale_dp]
    }
}

impl Default for SynthesisScales {
    fn default() -> Self {
        Self {
            noise_scale: 0.667,
            length_scale: 1.0,
            noise_scale_dp: 0.8,
        }
    }
}

/// Runtime knobs passed to the acoustic model when a session is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceOptions {
    pub intra_op_threads: usize,
    pub allow_remote_models: bool,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            intra_op_threads: 1,
            allow_remote_models: false,
        }
    }
}

/// What the front-end does when the phonemizer fails on one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentFailurePolicy {
    /// Fail the whole utterance
    #[default]
    Abort,
    /// Phonemize the segment as an empty string and keep going
    SubstituteEmpty,
}

/// Master configuration combining all front-end settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrontendConfig {
    pub punctuation: PunctuationConfig,
    pub vocab: VocabConfig,
    pub phonemizer: PhonemizerConfig,
    pub scales: SynthesisScales,
    pub inference: InferenceOptions,
    pub on_segment_failure: SegmentFailurePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocab_has_no_sequence_markers() {
        let config = VocabConfig::default();
        assert!(config.bos.is_empty());
        assert!(config.eos.is_empty());
        assert_eq!(config.blank, "<BLNK>");
        assert_eq!(config.pad, "_");
    }

    #[test]
    fn test_sequence_marker_variant_keeps_alphabet() {
        let config = VocabConfig::with_sequence_markers();
        assert_eq!(config.bos, "<BOS>");
        assert_eq!(config.eos, "<EOS>");
        assert_eq!(config.graphemes, DEFAULT_GRAPHEMES);
    }

    #[test]
    fn test_vocab_punctuation_contains_space() {
        assert!(DEFAULT_VOCAB_PUNCTUATIONS.ends_with(' '));
        assert!(!DEFAULT_PUNCTUATIONS.contains(' '));
    }

    #[test]
    fn test_scales_array_order() {
        assert_eq!(SynthesisScales::default().to_array(), [0.667, 1.0, 0.8]);
    }

    #[test]
    fn test_inference_defaults_are_single_threaded_and_local() {
        let options = InferenceOptions::default();
        assert_eq!(options.intra_op_threads, 1);
        assert!(!options.allow_remote_models);
    }
}
