//! Fuzzy token matching for search and autocomplete.
//!
//! Sift turns free text into comparable tokens, fingerprints tokens with
//! character trigrams, and scores how alike two strings are. It performs no
//! I/O and holds no state: every operation is a pure function, so callers
//! may share it across threads freely.
//!
//! Pipeline:
//!
//! ```text
//! raw text → normalize → tokenize ─┬→ remove_duplicates
//!                                  ├→ generate_trigrams → process_search_query
//!                                  └→ calculate_similarity (pairwise)
//! ```
//!
//! The free functions below use the default [`AnalyzerConfig`]. Build an
//! [`Analyzer`] to swap the stop-word set, substitution table or overlap
//! coefficient.
//!
//! ```rust
//! assert_eq!(sift_core::normalize("C++"), "cplusplus");
//! assert_eq!(sift_core::tokenize("Java a the in Programming"), ["java", "programming"]);
//! assert_eq!(sift_core::calculate_similarity("Java", "JAVA"), 1.0);
//! ```

use std::collections::BTreeSet;

pub mod analyzer;
pub mod query;
pub mod similarity;

pub use analyzer::{Analyzer, TextNormalizer, Tokenizer};
pub use sift_types::{AnalyzerConfig, ConfigError, Match, OverlapCoefficient, Trigram};

const DEFAULT: Analyzer = Analyzer::new();

/// Folds text to lowercase ASCII alphanumerics; `None` yields `""`.
#[must_use]
pub fn normalize<'a>(text: impl Into<Option<&'a str>>) -> String {
    DEFAULT.normalize(text)
}

/// Splits text into ordered tokens, dropping short words and stop-words.
#[must_use]
pub fn tokenize<'a>(text: impl Into<Option<&'a str>>) -> Vec<String> {
    DEFAULT.tokenize(text)
}

/// Collapses repeated tokens, keeping first-seen order.
#[must_use]
pub fn remove_duplicates<I>(tokens: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    DEFAULT.remove_duplicates(tokens)
}

/// Generates the trigrams of one token; empty for tokens of 3 characters or fewer.
#[must_use]
pub fn generate_trigrams<'a>(token: impl Into<Option<&'a str>>) -> Vec<String> {
    DEFAULT.generate_trigrams(token)
}

/// Generates the distinct trigrams of a batch of tokens.
#[must_use]
pub fn generate_all_trigrams<I>(tokens: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    DEFAULT.generate_all_trigrams(tokens)
}

/// Expands a query into its tokens plus their trigrams.
#[must_use]
pub fn process_search_query<'a>(text: impl Into<Option<&'a str>>) -> BTreeSet<String> {
    DEFAULT.process_search_query(text)
}

/// Scores how alike two strings are, in `[0.0, 1.0]`.
#[must_use]
pub fn calculate_similarity<'a, 'b>(
    a: impl Into<Option<&'a str>>,
    b: impl Into<Option<&'b str>>,
) -> f64 {
    DEFAULT.calculate_similarity(a, b)
}
