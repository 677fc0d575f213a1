//! Canonical text folding.
//!
//! Every string entering the engine is folded to the canonical alphabet
//! `[a-z0-9]` before it is compared, tokenized or windowed into trigrams.
//!
//! ## What It Does
//!
//! 1. Substitutes configured symbols with words (`#` → `sharp`, `+` → `plus`)
//! 2. Lowercases ASCII letters
//! 3. Removes everything else: whitespace, punctuation, non-ASCII
//!
//! Removed characters are not replaced by a separator, so fragments on
//! either side merge: `"Programming-Skills"` becomes `"programmingskills"`.
//!
//! ```rust
//! use sift_core::analyzer::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::default();
//! assert_eq!(normalizer.normalize("C++"), "cplusplus");
//! assert_eq!(normalizer.normalize("Hello, World!"), "helloworld");
//! ```

use memchr::memchr;
use sift_types::AnalyzerConfig;

/// Maps a byte to its canonical form, or 0 if the byte is removed.
const fn build_canonical_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let b = i as u8;
        table[i] = if b.is_ascii_lowercase() || b.is_ascii_digit() {
            b
        } else if b.is_ascii_uppercase() {
            b.to_ascii_lowercase()
        } else {
            0
        };
        i += 1;
    }
    table
}

static CANONICAL_TABLE: [u8; 256] = build_canonical_table();

#[inline(always)]
fn canonical(b: u8) -> Option<char> {
    match CANONICAL_TABLE[b as usize] {
        0 => None,
        c => Some(char::from(c)),
    }
}

/// Folds raw text to the canonical lowercase alphanumeric alphabet.
///
/// The output contains only `[a-z0-9]`, so normalizing twice is the same as
/// normalizing once. Empty input yields empty output; nothing here can fail.
///
/// # Examples
///
/// ```
/// use sift_core::analyzer::normalizer::TextNormalizer;
/// use sift_types::AnalyzerConfig;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("C#"), "csharp");
///
/// let folding = TextNormalizer::new(AnalyzerConfig::folding());
/// assert_eq!(folding.normalize("Café"), "cafe");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer {
    config: AnalyzerConfig,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::new())
    }
}

impl TextNormalizer {
    /// Creates a normalizer closing over `config`.
    pub const fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let bytes = input.as_bytes();
        let substitute = self
            .config
            .substitutions
            .iter()
            .any(|&(symbol, _)| memchr(symbol, bytes).is_some());

        // Plain ASCII without substitution symbols is a byte filter.
        if !substitute && input.is_ascii() {
            out.extend(bytes.iter().copied().filter_map(canonical));
            return;
        }

        for ch in input.chars() {
            if ch.is_ascii() {
                let b = ch as u8;
                if substitute {
                    if let Some(word) = self.config.substitution(b) {
                        out.push_str(word);
                        continue;
                    }
                }
                if let Some(c) = canonical(b) {
                    out.push(c);
                }
            } else if self.config.fold_diacritics {
                // Some lowercase mappings expand to ASCII, e.g. 'İ' → "i\u{307}".
                for lowered in ch.to_lowercase() {
                    if lowered.is_ascii() {
                        out.extend(canonical(lowered as u8));
                    } else if let Some(base) = fold_latin(lowered) {
                        out.push_str(base);
                    }
                }
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }

    /// Returns the configuration this normalizer closes over.
    #[inline(always)]
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

/// ASCII base of a lowercase Latin letter with diacritics.
#[inline(always)]
fn fold_latin(c: char) -> Option<&'static str> {
    let base = match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'ç' | 'ć' | 'č' | 'ĉ' | 'ċ' => "c",
        'ð' | 'đ' | 'ď' => "d",
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'í' | 'ì' | 'î' | 'ï' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'ñ' | 'ń' | 'ň' | 'ņ' => "n",
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ō' | 'ŏ' | 'ő' | 'ø' => "o",
        'ú' | 'ù' | 'û' | 'ü' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'ý' | 'ÿ' => "y",
        'ś' | 'š' | 'ş' => "s",
        'ź' | 'ž' | 'ż' => "z",
        'ř' => "r",
        'ť' | 'ţ' => "t",
        'ł' => "l",
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        _ => return None,
    };
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        TextNormalizer::default().normalize(input)
    }

    fn norm_fold(input: &str) -> String {
        TextNormalizer::new(AnalyzerConfig::folding()).normalize(input)
    }

    #[test]
    fn ascii_basic_lowercase() {
        assert_eq!(norm("HELLO"), "hello");
        assert_eq!(norm("HeLlO"), "hello");
        assert_eq!(norm("123 ABC!"), "123abc");
    }

    #[test]
    fn ascii_full_alphabet() {
        let upper: String = (b'A'..=b'Z').map(char::from).collect();
        let lower: String = (b'a'..=b'z').map(char::from).collect();
        assert_eq!(norm(&upper), lower);
    }

    #[test]
    fn punctuation_removed_not_replaced() {
        assert_eq!(norm("foo-bar_baz"), "foobarbaz");
        assert_eq!(norm("Programming-Skills"), "programmingskills");
        assert_eq!(norm("e.g."), "eg");
    }

    #[test]
    fn whitespace_removed() {
        assert_eq!(norm("hello   world"), "helloworld");
        assert_eq!(norm("hello\t\nworld"), "helloworld");
        assert_eq!(norm("   "), "");
    }

    #[test]
    fn empty_input() {
        assert_eq!(norm(""), "");
    }

    #[test]
    fn symbol_substitution() {
        assert_eq!(norm("C#"), "csharp");
        assert_eq!(norm("C++"), "cplusplus");
        assert_eq!(norm("F# / C#"), "fsharpcsharp");
    }

    #[test]
    fn substitution_with_unicode() {
        assert_eq!(norm("Ç++"), "plusplus");
        assert_eq!(norm_fold("Ç++"), "cplusplus");
    }

    #[test]
    fn only_symbols() {
        assert_eq!(norm("!?.,;:"), "");
        assert_eq!(norm("#"), "sharp");
    }

    #[test]
    fn unicode_removed_by_default() {
        assert_eq!(norm("café"), "caf");
        assert_eq!(norm("ПРИВЕТ"), "");
        assert_eq!(norm("naïve"), "nave");
    }

    #[test]
    fn diacritics_folded_when_enabled() {
        assert_eq!(norm_fold("café"), "cafe");
        assert_eq!(norm_fold("Müller"), "muller");
        assert_eq!(norm_fold("São Paulo"), "saopaulo");
        assert_eq!(norm_fold("Żółć"), "zolc");
    }

    #[test]
    fn folding_expands_ligatures() {
        assert_eq!(norm_fold("straße"), "strasse");
        assert_eq!(norm_fold("Æsir"), "aesir");
    }

    #[test]
    fn folding_drops_unknown_scripts() {
        assert_eq!(norm_fold("こんにちは abc"), "abc");
        assert_eq!(norm_fold("İstanbul"), "istanbul");
    }

    #[test]
    fn custom_substitution_table() {
        let config = AnalyzerConfig {
            substitutions: &[(b'&', "and")],
            ..AnalyzerConfig::new()
        };
        let n = TextNormalizer::new(config);
        assert_eq!(n.normalize("R&D"), "randd");
        assert_eq!(n.normalize("C#"), "c");
    }

    #[test]
    fn normalize_into_reuses_capacity() {
        let normalizer = TextNormalizer::default();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        normalizer.normalize_into("HELLO", &mut buf);
        assert_eq!(buf, "hello");
        assert_eq!(buf.capacity(), cap);

        normalizer.normalize_into("WORLD", &mut buf);
        assert_eq!(buf, "world");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn output_is_canonical() {
        let inputs = [
            "hello",
            "café",
            "İstanbul",
            "ΠΡΟΒΛΗΜΑ",
            "مرحبا",
            "C# and C++",
            "Tab\there",
        ];

        for input in inputs {
            for out in [norm(input), norm_fold(input)] {
                assert!(out
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn idempotent() {
        let samples = ["Hello World", "C# and C++", "ÜBER Café", "foo-bar 42", ""];

        for s in samples {
            let once = norm(s);
            assert_eq!(norm(&once), once);

            let once = norm_fold(s);
            assert_eq!(norm_fold(&once), once);
        }
    }
}
