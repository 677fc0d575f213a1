//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Folds raw text to the canonical alphabet
//! - **Tokenizer**: Splits raw text into filtered canonical tokens
//! - **Dedup**: Collapses repeated tokens in first-seen order
//! - **Trigram**: Extracts 3-character windows for fuzzy matching
//!
//! [`Analyzer`] bundles them behind one configuration. The query processor
//! and similarity scorer extend it in their own modules.

pub mod dedup;
pub mod normalizer;
pub mod tokenizer;
pub mod trigram;

pub use dedup::remove_duplicates;
pub use normalizer::TextNormalizer;
pub use tokenizer::Tokenizer;
pub use trigram::{extract_trigrams, generate_all_trigrams, generate_trigrams};

use sift_types::{AnalyzerConfig, ConfigError};
use tracing::debug;

/// The matching engine.
///
/// Holds nothing but its configuration, so it is `Copy`, `Send` and `Sync`
/// and every method is a pure function of its arguments. Text arguments
/// accept either `&str` or `Option<&str>`; `None` behaves like `""`.
///
/// # Example
///
/// ```
/// use sift_core::Analyzer;
///
/// let analyzer = Analyzer::new();
/// assert_eq!(analyzer.tokenize("Java a the in Programming"), vec!["java", "programming"]);
/// assert_eq!(analyzer.tokenize(None), Vec::<String>::new());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Analyzer {
    pub(crate) config: AnalyzerConfig,
    pub(crate) normalizer: TextNormalizer,
    pub(crate) tokenizer: Tokenizer,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Creates an engine with the default configuration.
    pub const fn new() -> Self {
        Self::from_config(AnalyzerConfig::new())
    }

    /// Creates an engine with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`AnalyzerConfig::validate`].
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            debug!(error = %err, "rejected analyzer config");
            return Err(err);
        }
        Ok(Self::from_config(config))
    }

    const fn from_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            normalizer: TextNormalizer::new(config),
            tokenizer: Tokenizer::new(config),
        }
    }

    /// Returns the configuration.
    #[inline(always)]
    #[must_use]
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Folds text to lowercase ASCII alphanumerics.
    #[must_use]
    pub fn normalize<'a>(&self, text: impl Into<Option<&'a str>>) -> String {
        self.normalizer.normalize(text.into().unwrap_or_default())
    }

    /// Splits text into ordered tokens, dropping short words and stop-words.
    #[must_use]
    pub fn tokenize<'a>(&self, text: impl Into<Option<&'a str>>) -> Vec<String> {
        self.tokenizer.collect(text.into().unwrap_or_default())
    }

    /// Collapses repeated tokens, keeping first-seen order.
    #[must_use]
    pub fn remove_duplicates<I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        dedup::remove_duplicates(tokens)
    }

    /// Generates the trigrams of one token, empty for short tokens.
    #[must_use]
    pub fn generate_trigrams<'a>(&self, token: impl Into<Option<&'a str>>) -> Vec<String> {
        trigram::generate_trigrams_with(
            token.into().unwrap_or_default(),
            self.config.min_trigram_token_len,
        )
    }

    /// Generates the distinct trigrams of a batch of tokens.
    #[must_use]
    pub fn generate_all_trigrams<I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        trigram::generate_all_trigrams_with(tokens, self.config.min_trigram_token_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sift_types::OverlapCoefficient;

    #[test]
    fn absent_text_behaves_like_empty() {
        let a = Analyzer::new();
        assert_eq!(a.normalize(None), "");
        assert!(a.tokenize(None).is_empty());
        assert!(a.generate_trigrams(None).is_empty());
    }

    #[test]
    fn tokenize_degenerate_inputs() {
        let a = Analyzer::new();
        assert_eq!(a.tokenize(None), a.tokenize(""));
        assert_eq!(a.tokenize(""), a.tokenize("   "));
        assert!(a.tokenize("   ").is_empty());
    }

    #[test]
    fn normalize_is_idempotent() {
        let a = Analyzer::new();
        for s in ["Hello, World!", "C# & C++", "  spaced  out ", "Ünïcödé"] {
            let once = a.normalize(s);
            assert_eq!(a.normalize(once.as_str()), once);
        }
    }

    #[test]
    fn with_config_validates() {
        let bad = AnalyzerConfig {
            stop_words: &["The"],
            ..AnalyzerConfig::new()
        };
        assert_eq!(
            Analyzer::with_config(bad).unwrap_err(),
            ConfigError::NonCanonicalStopWord { word: "The" }
        );

        let good = AnalyzerConfig {
            coefficient: OverlapCoefficient::Dice,
            ..AnalyzerConfig::new()
        };
        let analyzer = Analyzer::with_config(good).unwrap();
        assert_eq!(analyzer.config().coefficient, OverlapCoefficient::Dice);
    }

    #[test]
    fn trigram_threshold_follows_config() {
        let config = AnalyzerConfig {
            min_trigram_token_len: 4,
            ..AnalyzerConfig::new()
        };
        let a = Analyzer::with_config(config).unwrap();
        assert!(a.generate_trigrams("java").is_empty());
        assert_eq!(a.generate_trigrams("rusty").len(), 3);
        assert_eq!(a.generate_all_trigrams(["java", "rusty"]).len(), 3);
    }

    #[test]
    fn remove_duplicates_delegates() {
        let a = Analyzer::new();
        let tokens = a.tokenize("Java Programming Java");
        assert_eq!(a.remove_duplicates(&tokens), vec!["java", "programming"]);
    }

    #[test]
    fn analyzer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Analyzer>();
    }
}
