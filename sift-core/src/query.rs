//! Query expansion for trigram-indexed lookups.
//!
//! A search query becomes the set of keys a trigram index should be probed
//! with: every token of the query, plus every trigram of every token long
//! enough to have any. Exact-token and fuzzy-substring hits then come back
//! from a single pass over the index.

use std::collections::BTreeSet;

use crate::analyzer::{trigram, Analyzer};
use tracing::trace;

impl Analyzer {
    /// Expands a query into its match-key set.
    ///
    /// Tokens of 3 characters or fewer contribute only themselves; longer
    /// tokens contribute themselves and all their trigrams. Repeated tokens
    /// and shared trigrams collapse, and the set iterates in sorted order.
    ///
    /// # Example
    ///
    /// ```
    /// use sift_core::Analyzer;
    ///
    /// let keys = Analyzer::new().process_search_query("SQL Java");
    /// let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
    /// assert_eq!(keys, ["ava", "jav", "java", "sql"]);
    /// ```
    #[must_use]
    pub fn process_search_query<'a>(&self, text: impl Into<Option<&'a str>>) -> BTreeSet<String> {
        let text = text.into().unwrap_or_default();
        let min_len = self.config.min_trigram_token_len;
        let mut keys = BTreeSet::new();
        let mut tokens = 0usize;

        self.tokenizer.tokenize(text, |token, _| {
            tokens += 1;
            for gram in trigram::windows(token, min_len) {
                if !keys.contains(gram) {
                    keys.insert(gram.to_owned());
                }
            }
            if !keys.contains(token) {
                keys.insert(token.to_owned());
            }
        });

        trace!(tokens, keys = keys.len(), "expanded search query");
        keys
    }
}
