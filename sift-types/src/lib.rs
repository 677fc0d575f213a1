//! Core types and configuration for the Sift matching engine.
//!
//! This crate holds the values that flow between the analysis stages and
//! whatever search or UI layer consumes them. Keeping them separate gives:
//!
//! - **Small, copyable values**: trigrams pack into a `u32`, configs are `Copy`
//! - **Swappable tables**: stop-words and symbol substitutions live in data,
//!   not in control flow
//! - **Clean boundaries**: the pipeline crate depends on this one, never the
//!   other way round

#![warn(missing_docs)]

use core::fmt;
use thiserror::Error;

/// Stop-words dropped by the tokenizer under the default configuration.
/// `"and"` is not a stop-word.
pub const DEFAULT_STOP_WORDS: &[&str] = &["a", "an", "the", "in", "on", "at", "of", "to"];

/// Symbol-to-word substitutions applied before non-alphanumeric stripping.
///
/// Maps `"C#"` to `"csharp"` and `"C++"` to `"cplusplus"`.
pub const DEFAULT_SUBSTITUTIONS: &[(u8, &str)] = &[(b'#', "sharp"), (b'+', "plus")];

/// A candidate scored against a query.
///
/// Ordering treats the better match as the greater value: higher score
/// first, then the earlier candidate position. Sorting descending therefore
/// yields a stable, deterministic ranking.
#[derive(Debug, Clone, Copy)]
pub struct Match {
    /// Position of the candidate in the input sequence
    pub index: usize,
    /// Similarity score in `[0.0, 1.0]`
    pub score: f64,
}

impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == core::cmp::Ordering::Equal
    }
}

impl Eq for Match {}

impl PartialOrd for Match {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Match {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        // Earlier candidates win ties, so the index comparison is reversed.
        match self.score.total_cmp(&other.score) {
            core::cmp::Ordering::Equal => other.index.cmp(&self.index),
            ord => ord,
        }
    }
}

impl Match {
    /// Creates a new match.
    #[inline(always)]
    pub const fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "candidate={} score={:.3}", self.index, self.score)
    }
}

/// A trigram (3-byte sequence) packed into a 24-bit integer.
///
/// Trigrams are packed as `(b0 << 16) | (b1 << 8) | b2`, which makes
/// equality a single integer compare and lets trigram sets hash without
/// allocating. Canonical text is ASCII, so every byte is one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Trigram(pub u32);

impl Trigram {
    /// Maximum possible trigram value (0xFFFFFF).
    pub const MAX: u32 = 0xFFFFFF;

    /// Creates a trigram from three bytes.
    #[inline(always)]
    pub const fn from_bytes(b0: u8, b1: u8, b2: u8) -> Self {
        Self(((b0 as u32) << 16) | ((b1 as u32) << 8) | (b2 as u32))
    }

    /// Returns the three bytes of this trigram.
    #[inline(always)]
    pub const fn to_bytes(self) -> [u8; 3] {
        [
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        ]
    }

    /// Returns the underlying u32 value.
    #[inline(always)]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for Trigram {
    #[inline(always)]
    fn from(value: u32) -> Self {
        Self(value & Self::MAX)
    }
}

impl From<Trigram> for u32 {
    #[inline(always)]
    fn from(t: Trigram) -> Self {
        t.0
    }
}

impl TryFrom<&str> for Trigram {
    type Error = TrigramError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if !s.is_ascii() {
            return Err(TrigramError::NonAscii);
        }
        match *s.as_bytes() {
            [b0, b1, b2] => Ok(Self::from_bytes(b0, b1, b2)),
            _ => Err(TrigramError::Length { len: s.len() }),
        }
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.to_bytes() {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}

/// Errors from building a [`Trigram`] out of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrigramError {
    /// The text was not exactly three bytes long.
    #[error("trigram requires exactly 3 bytes, got {len}")]
    Length {
        /// Byte length of the rejected text.
        len: usize,
    },
    /// The text contained non-ASCII characters.
    #[error("trigram text must be ASCII")]
    NonAscii,
}

/// Set-overlap coefficient used to turn shared trigram counts into a score.
///
/// Both coefficients are symmetric and bounded in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapCoefficient {
    /// `|A ∩ B| / |A ∪ B|`
    #[default]
    Jaccard,
    /// `2 |A ∩ B| / (|A| + |B|)`
    Dice,
}

impl OverlapCoefficient {
    /// Scores two sets of sizes `left` and `right` sharing `shared` members.
    ///
    /// Returns 0.0 when both sets are empty.
    #[must_use]
    pub fn score(self, shared: usize, left: usize, right: usize) -> f64 {
        let shared = shared.min(left).min(right);
        let (num, den) = match self {
            OverlapCoefficient::Jaccard => (shared, left + right - shared),
            OverlapCoefficient::Dice => (2 * shared, left + right),
        };
        if den == 0 {
            0.0
        } else {
            num as f64 / den as f64
        }
    }
}

/// Immutable analysis configuration.
///
/// Every stage of the pipeline closes over one of these. Swapping the
/// stop-word set or substitution table never touches control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Symbol bytes replaced by a word before stripping, e.g. `#` → `sharp`.
    pub substitutions: &'static [(u8, &'static str)],
    /// Canonical words the tokenizer drops.
    pub stop_words: &'static [&'static str],
    /// Tokens shorter than this are dropped.
    pub min_token_len: usize,
    /// Only tokens strictly longer than this produce trigrams.
    pub min_trigram_token_len: usize,
    /// Fold Latin diacritics to their ASCII base instead of dropping them.
    pub fold_diacritics: bool,
    /// Coefficient used by the similarity scorer.
    pub coefficient: OverlapCoefficient,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzerConfig {
    /// The default configuration.
    pub const fn new() -> Self {
        Self {
            substitutions: DEFAULT_SUBSTITUTIONS,
            stop_words: DEFAULT_STOP_WORDS,
            min_token_len: 2,
            min_trigram_token_len: 3,
            fold_diacritics: false,
            coefficient: OverlapCoefficient::Jaccard,
        }
    }

    /// Default configuration with diacritic folding ("café" → "cafe").
    pub const fn folding() -> Self {
        Self {
            fold_diacritics: true,
            ..Self::new()
        }
    }

    /// Returns `true` if `word` is in the stop-word set.
    #[inline]
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word)
    }

    /// Returns the replacement word for a substitution symbol.
    #[inline]
    #[must_use]
    pub fn substitution(&self, symbol: u8) -> Option<&'static str> {
        self.substitutions
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, word)| *word)
    }

    /// Checks that the tables are consistent with the canonical alphabet.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found. Replacements and stop-words
    /// must already be canonical, otherwise normalization would stop being
    /// idempotent and stop-words could never match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_token_len == 0 {
            return Err(ConfigError::ZeroTokenLength);
        }
        if self.min_trigram_token_len < 3 {
            return Err(ConfigError::TrigramThreshold {
                min: self.min_trigram_token_len,
            });
        }
        for &(symbol, replacement) in self.substitutions {
            if !symbol.is_ascii()
                || symbol.is_ascii_alphanumeric()
                || symbol.is_ascii_whitespace()
            {
                return Err(ConfigError::InvalidSymbol { symbol });
            }
            if !is_canonical(replacement) {
                return Err(ConfigError::InvalidReplacement {
                    symbol: char::from(symbol),
                    replacement,
                });
            }
        }
        if let Some(&word) = self.stop_words.iter().find(|w| !is_canonical(w)) {
            return Err(ConfigError::NonCanonicalStopWord { word });
        }
        Ok(())
    }
}

/// Returns `true` for non-empty lowercase ASCII alphanumeric text.
#[inline]
#[must_use]
pub fn is_canonical(text: &str) -> bool {
    !text.is_empty()
        && text
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Errors reported by [`AnalyzerConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `min_token_len` was zero, which would admit empty tokens.
    #[error("minimum token length must be at least 1")]
    ZeroTokenLength,
    /// `min_trigram_token_len` was below the trigram width.
    #[error("trigram token threshold must be at least 3, got {min}")]
    TrigramThreshold {
        /// The rejected threshold.
        min: usize,
    },
    /// A substitution symbol was alphanumeric, whitespace or non-ASCII.
    #[error("substitution symbol {symbol:#04x} must be ASCII punctuation")]
    InvalidSymbol {
        /// The rejected symbol byte.
        symbol: u8,
    },
    /// A substitution replacement was not canonical text.
    #[error("replacement {replacement:?} for {symbol:?} must be lowercase alphanumeric")]
    InvalidReplacement {
        /// The symbol being replaced.
        symbol: char,
        /// The rejected replacement.
        replacement: &'static str,
    },
    /// A stop-word was not canonical text and could never match a token.
    #[error("stop-word {word:?} must be lowercase alphanumeric")]
    NonCanonicalStopWord {
        /// The rejected stop-word.
        word: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_ordering() {
        let m1 = Match::new(1, 0.9);
        let m2 = Match::new(2, 0.5);
        let m3 = Match::new(3, 0.9); // Same score as m1

        assert!(m1 > m2);
        assert_ne!(m1, m3);

        // Earlier candidate is the better match on a tie
        assert_eq!(m1.cmp(&m3), core::cmp::Ordering::Greater);
    }

    #[test]
    fn match_eq_agrees_with_cmp() {
        let pairs = [
            (Match::new(0, 0.0), Match::new(0, -0.0)),
            (Match::new(0, 0.5), Match::new(0, 0.5)),
            (Match::new(0, f64::NAN), Match::new(0, f64::NAN)),
            (Match::new(0, 0.5), Match::new(1, 0.5)),
        ];
        for (a, b) in pairs {
            assert_eq!(a == b, a.cmp(&b) == core::cmp::Ordering::Equal, "{a:?} vs {b:?}");
        }
        assert_ne!(Match::new(0, 0.0), Match::new(0, -0.0));
        assert_eq!(Match::new(0, f64::NAN), Match::new(0, f64::NAN));
    }

    #[test]
    fn match_sorts_descending() {
        let mut matches = vec![
            Match::new(0, 0.2),
            Match::new(1, 0.8),
            Match::new(2, 0.8),
            Match::new(3, 1.0),
        ];
        matches.sort_unstable_by(|a, b| b.cmp(a));
        let order: Vec<usize> = matches.iter().map(|m| m.index).collect();
        assert_eq!(order, vec![3, 1, 2, 0]);
    }

    #[test]
    fn trigram_from_bytes() {
        let t = Trigram::from_bytes(b'a', b'b', b'c');
        assert_eq!(t.as_u32(), 0x00616263);
        assert_eq!(t.to_bytes(), [b'a', b'b', b'c']);
    }

    #[test]
    fn trigram_try_from_str() {
        assert_eq!(Trigram::try_from("abc"), Ok(Trigram(0x00616263)));
        assert_eq!(
            Trigram::try_from("ab"),
            Err(TrigramError::Length { len: 2 })
        );
        assert_eq!(
            Trigram::try_from("abcd"),
            Err(TrigramError::Length { len: 4 })
        );
        assert_eq!(Trigram::try_from("é1"), Err(TrigramError::NonAscii));
    }

    #[test]
    fn trigram_display() {
        let t = Trigram::from_bytes(b'p', b'r', b'o');
        assert_eq!(t.to_string(), "pro");
    }

    #[test]
    fn trigram_from_u32_masks() {
        let t = Trigram::from(0xFF61_6263);
        assert_eq!(t.as_u32(), 0x0061_6263);
    }

    #[test]
    fn jaccard_score() {
        let c = OverlapCoefficient::Jaccard;
        assert_eq!(c.score(6, 9, 8), 6.0 / 11.0);
        assert_eq!(c.score(0, 9, 8), 0.0);
        assert_eq!(c.score(3, 3, 3), 1.0);
        assert_eq!(c.score(0, 0, 0), 0.0);
    }

    #[test]
    fn dice_score() {
        let c = OverlapCoefficient::Dice;
        assert_eq!(c.score(6, 9, 8), 12.0 / 17.0);
        assert_eq!(c.score(0, 0, 0), 0.0);
        assert_eq!(c.score(4, 4, 4), 1.0);
    }

    #[test]
    fn coefficients_are_symmetric() {
        for c in [OverlapCoefficient::Jaccard, OverlapCoefficient::Dice] {
            assert_eq!(c.score(2, 5, 7), c.score(2, 7, 5));
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(AnalyzerConfig::default().validate(), Ok(()));
        assert_eq!(AnalyzerConfig::folding().validate(), Ok(()));
    }

    #[test]
    fn default_stop_words() {
        let config = AnalyzerConfig::new();
        assert!(config.is_stop_word("a"));
        assert!(config.is_stop_word("the"));
        assert!(config.is_stop_word("in"));
        assert!(!config.is_stop_word("and"));
    }

    #[test]
    fn default_substitutions() {
        let config = AnalyzerConfig::new();
        assert_eq!(config.substitution(b'#'), Some("sharp"));
        assert_eq!(config.substitution(b'+'), Some("plus"));
        assert_eq!(config.substitution(b'-'), None);
    }

    #[test]
    fn rejects_non_canonical_replacement() {
        let config = AnalyzerConfig {
            substitutions: &[(b'&', "And")],
            ..AnalyzerConfig::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidReplacement {
                symbol: '&',
                replacement: "And",
            })
        );
    }

    #[test]
    fn rejects_alphanumeric_symbol() {
        let config = AnalyzerConfig {
            substitutions: &[(b'x', "times")],
            ..AnalyzerConfig::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSymbol { symbol: b'x' })
        );
    }

    #[test]
    fn rejects_non_canonical_stop_word() {
        let config = AnalyzerConfig {
            stop_words: &["the", "The"],
            ..AnalyzerConfig::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonCanonicalStopWord { word: "The" })
        );
    }

    #[test]
    fn rejects_small_thresholds() {
        let config = AnalyzerConfig {
            min_trigram_token_len: 2,
            ..AnalyzerConfig::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TrigramThreshold { min: 2 })
        );

        let config = AnalyzerConfig {
            min_token_len: 0,
            ..AnalyzerConfig::new()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTokenLength));
    }

    #[test]
    fn error_messages() {
        let err = ConfigError::InvalidSymbol { symbol: b'x' };
        assert_eq!(
            err.to_string(),
            "substitution symbol 0x78 must be ASCII punctuation"
        );
        assert_eq!(
            TrigramError::Length { len: 5 }.to_string(),
            "trigram requires exactly 3 bytes, got 5"
        );
    }
}
