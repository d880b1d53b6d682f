// Lexical clean-up applied once before segmentation.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref AUX_SYMBOLS: Regex = Regex::new(r#"[<>()\[\]"]+"#).unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Stateless text normalization. Implementations must be idempotent.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str, lang: &str) -> String;
}

/// Symbol replacement, auxiliary-symbol removal and whitespace collapsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolNormalizer;

impl Normalizer for SymbolNormalizer {
    fn normalize(&self, text: &str, lang: &str) -> String {
        let text = replace_symbols(text, lang);
        let text = remove_aux_symbols(&text);
        collapse_whitespace(&text)
    }
}

/// Rewrites symbols that have a spoken form in `lang`.
///
/// Only the primary subtag counts, so "en-us" behaves like "en".
pub fn replace_symbols(text: &str, lang: &str) -> String {
    let primary = lang.split(&['-', '_'][..]).next().unwrap_or(lang);

    let mut text = text.replace(&[';', ':'][..], ",");
    text = if primary == "ca" {
        text.replace('-', "")
    } else {
        text.replace('-', " ")
    };

    match primary {
        "en" => text.replace('&', " and "),
        "fr" => text.replace('&', " et "),
        "pt" => text.replace('&', " e "),
        "ca" => text.replace('&', " i ").replace('\'', ""),
        _ => text,
    }
}

/// Drops symbols with no spoken form: `< > ( ) [ ] "`.
pub fn remove_aux_symbols(text: &str) -> String {
    AUX_SYMBOLS.replace_all(text, "").into_owned()
}

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_semicolon_and_colon() {
        assert_eq!(replace_symbols("a; b: c", "en"), "a, b, c");
    }

    #[test]
    fn test_replace_hyphen_by_language() {
        assert_eq!(replace_symbols("well-known", "en"), "well known");
        assert_eq!(replace_symbols("dit-li", "ca"), "ditli");
    }

    #[test]
    fn test_replace_ampersand_by_language() {
        assert_eq!(replace_symbols("A&B", "en"), "A and B");
        assert_eq!(replace_symbols("A&B", "fr"), "A et B");
        assert_eq!(replace_symbols("A&B", "pt"), "A e B");
        assert_eq!(replace_symbols("A&B", "ca"), "A i B");
        assert_eq!(replace_symbols("A&B", "de"), "A&B");
    }

    #[test]
    fn test_catalan_drops_apostrophe() {
        assert_eq!(replace_symbols("l'home", "ca"), "lhome");
        assert_eq!(replace_symbols("it's", "en"), "it's");
    }

    #[test]
    fn test_region_subtag_is_ignored() {
        assert_eq!(replace_symbols("A&B", "en-us"), "A and B");
    }

    #[test]
    fn test_remove_aux_symbols() {
        assert_eq!(remove_aux_symbols("<a> (b) [c] \"d\""), "a b c d");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn test_normalize_pipeline() {
        let normalizer = SymbolNormalizer;
        assert_eq!(
            normalizer.normalize("  Tom & Jerry (the cartoon):  well-loved ", "en"),
            "Tom and Jerry the cartoon, well loved"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let normalizer = SymbolNormalizer;
        let samples = [
            "Tom & Jerry",
            "a;b:c-d",
            "  \"quoted\"  [x] ",
            "Hello, world!",
        ];
        for sample in samples {
            let once = normalizer.normalize(sample, "en");
            let twice = normalizer.normalize(&once, "en");
            assert_eq!(once, twice, "normalize({:?}) not idempotent", sample);
        }
    }
}
