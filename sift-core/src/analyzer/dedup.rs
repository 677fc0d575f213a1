//! Order-preserving token deduplication.

use rustc_hash::FxHashSet;

/// Collapses repeated tokens, keeping the first occurrence of each.
///
/// The output never grows: it holds every distinct input value exactly once,
/// in order of first appearance. An empty input yields an empty output.
///
/// # Example
///
/// ```
/// use sift_core::analyzer::dedup::remove_duplicates;
///
/// let unique = remove_duplicates(["java", "rust", "java"]);
/// assert_eq!(unique, vec!["java", "rust"]);
/// ```
pub fn remove_duplicates<I>(tokens: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let tokens = tokens.into_iter();
    let mut seen: FxHashSet<String> =
        FxHashSet::with_capacity_and_hasher(tokens.size_hint().0, Default::default());
    let mut out = Vec::with_capacity(tokens.size_hint().0);

    for token in tokens {
        let token = token.as_ref();
        if seen.contains(token) {
            continue;
        }
        seen.insert(token.to_owned());
        out.push(token.to_owned());
    }

    out
}
