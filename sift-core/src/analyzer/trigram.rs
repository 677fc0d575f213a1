//! Trigram extraction module.
//!
//! Trigrams are the fuzzy fingerprint of a token: overlapping 3-character
//! windows that survive small edits elsewhere in the word.
//!
//! Two layers live here:
//!
//! - [`extract_trigrams`] windows canonical (ASCII) text into packed
//!   [`Trigram`] values with no allocation. The similarity scorer uses it.
//! - [`generate_trigrams`] / [`generate_all_trigrams`] apply the token length
//!   policy and return owned strings for index lookups.

use rustc_hash::FxHashSet;
use sift_types::Trigram;
use smallvec::SmallVec;

/// Tokens must be longer than this to produce trigrams.
pub(crate) const DEFAULT_MIN_LEN: usize = 3;

/// Extracts packed trigrams from canonical text using a sliding window.
///
/// For text shorter than 3 bytes, no trigrams are emitted.
/// For text of length N, exactly N-2 trigrams are emitted.
///
/// # Example
///
/// ```
/// use sift_core::analyzer::trigram::extract_trigrams;
///
/// let mut trigrams = Vec::new();
/// extract_trigrams("hello", |t| trigrams.push(t));
///
/// assert_eq!(trigrams.len(), 3); // "hel", "ell", "llo"
/// ```
#[inline(always)]
pub fn extract_trigrams<F>(text: &str, mut callback: F)
where
    F: FnMut(Trigram),
{
    for window in text.as_bytes().windows(3) {
        callback(Trigram::from_bytes(window[0], window[1], window[2]));
    }
}

/// Counts trigrams without allocating.
///
/// Returns 0 for text shorter than 3 bytes.
#[inline(always)]
pub fn count_trigrams(text: &str) -> usize {
    text.len().saturating_sub(2)
}

/// Windows `token` into 3-character substrings if it is longer than
/// `min_len` characters.
///
/// Windows are taken over characters, not bytes, so arbitrary text never
/// splits a UTF-8 sequence. Repeated windows are kept, left to right.
pub(crate) fn windows(token: &str, min_len: usize) -> SmallVec<[&str; 16]> {
    let mut bounds: SmallVec<[usize; 32]> = token.char_indices().map(|(i, _)| i).collect();
    let chars = bounds.len();
    let mut out = SmallVec::new();

    if chars <= min_len.max(2) {
        return out;
    }

    bounds.push(token.len());
    for i in 0..chars - 2 {
        out.push(&token[bounds[i]..bounds[i + 3]]);
    }
    out
}

/// Generates the trigrams of a single token.
///
/// Tokens of 3 characters or fewer yield nothing; a token of length L > 3
/// yields exactly L−2 trigrams in left-to-right order, repeats included.
///
/// # Example
///
/// ```
/// use sift_core::analyzer::trigram::generate_trigrams;
///
/// assert_eq!(generate_trigrams("java"), vec!["jav", "ava"]);
/// assert!(generate_trigrams("sql").is_empty());
/// ```
pub fn generate_trigrams(token: &str) -> Vec<String> {
    generate_trigrams_with(token, DEFAULT_MIN_LEN)
}

pub(crate) fn generate_trigrams_with(token: &str, min_len: usize) -> Vec<String> {
    windows(token, min_len)
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Generates the distinct trigrams of a batch of tokens.
///
/// The result is the union over every token, in order of first appearance.
/// An empty batch yields an empty result.
///
/// # Example
///
/// ```
/// use sift_core::analyzer::trigram::generate_all_trigrams;
///
/// let all = generate_all_trigrams(["programming", "javascript"]);
/// assert_eq!(all.len(), 17);
/// ```
pub fn generate_all_trigrams<I>(tokens: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    generate_all_trigrams_with(tokens, DEFAULT_MIN_LEN)
}

pub(crate) fn generate_all_trigrams_with<I>(tokens: I, min_len: usize) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut out = Vec::new();

    for token in tokens {
        for trigram in windows(token.as_ref(), min_len) {
            if seen.contains(trigram) {
                continue;
            }
            seen.insert(trigram.to_owned());
            out.push(trigram.to_owned());
        }
    }

    out
}
