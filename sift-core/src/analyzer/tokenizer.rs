//! Streaming Tokenizer Module
//!
//! Splits raw text into canonical tokens. It's the second stage of the
//! pipeline, sitting on top of the normalizer.
//!
//! ## What It Does
//!
//! Given raw input like `"Java a the in Programming"`, it:
//!
//! 1. Splits on whitespace into raw words
//! 2. Normalizes each word (`"Programming"` → `"programming"`)
//! 3. Drops words shorter than the minimum token length and stop-words
//! 4. Emits the survivors with their position among emitted tokens
//!
//! ```ignore
//! ("java", 0)
//! ("programming", 1)
//! ```
//!
//! Punctuation inside a word is removed by normalization rather than treated
//! as a boundary, so `"Programming-Skills"` is one token.
//!
//! Repeats are kept; see [`crate::analyzer::dedup`] for collapsing them.

use crate::analyzer::normalizer::TextNormalizer;
use sift_types::AnalyzerConfig;

/// Streaming tokenizer - splits raw text into canonical tokens.
///
/// Tokens are emitted through a callback as slices of one reusable buffer,
/// so the streaming path allocates once per call rather than once per token.
///
/// ## Example
///
/// ```
/// use sift_core::analyzer::tokenizer::Tokenizer;
///
/// let tokenizer = Tokenizer::default();
/// let mut seen = Vec::new();
///
/// tokenizer.tokenize("Java and C#", |text, pos| {
///     seen.push((text.to_owned(), pos));
/// });
///
/// assert_eq!(seen, vec![
///     ("java".to_owned(), 0),
///     ("and".to_owned(), 1),
///     ("csharp".to_owned(), 2),
/// ]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    normalizer: TextNormalizer,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::new())
    }
}

impl Tokenizer {
    /// Creates a tokenizer closing over `config`.
    #[inline]
    pub const fn new(config: AnalyzerConfig) -> Self {
        Self {
            normalizer: TextNormalizer::new(config),
        }
    }

    /// Returns `true` if a normalized word survives filtering.
    #[inline(always)]
    fn keep(&self, word: &str) -> bool {
        let config = self.normalizer.config();
        word.len() >= config.min_token_len && !config.is_stop_word(word)
    }

    /// Tokenizes raw input and emits `(token, position)`.
    ///
    /// Position counts emitted tokens only. After emitting a token at
    /// position `u32::MAX`, further emissions stop (overflow protection).
    #[inline]
    pub fn tokenize<F>(&self, text: &str, mut emit: F)
    where
        F: FnMut(&str, u32),
    {
        let mut word = String::new();
        let mut pos = 0u32;

        for raw in text.split_whitespace() {
            self.normalizer.normalize_into(raw, &mut word);
            if !self.keep(&word) {
                continue;
            }
            emit(&word, pos);
            if pos == u32::MAX {
                return;
            }
            pos += 1;
        }
    }

    /// Tokenizes raw input into an owned, ordered token list.
    pub fn collect(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        self.tokenize(text, |token, _| tokens.push(token.to_owned()));
        tokens
    }
}
