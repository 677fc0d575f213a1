//! Trigram-overlap similarity scoring.
//!
//! Two strings are compared by the overlap of the trigram sets of their
//! normalized forms. The rules, in order:
//!
//! 1. Absent input, or input that is empty after trimming, scores 0.0
//! 2. Equal normalized forms score exactly 1.0, even when both are empty
//! 3. If either normalized form is too short to have trigrams, the exact
//!    comparison in rule 2 is the whole answer, so the score is 0.0
//! 4. Otherwise the configured [`OverlapCoefficient`] of the two sets
//!
//! Every rule is symmetric in its arguments, so the score is too.
//!
//! [`OverlapCoefficient`]: sift_types::OverlapCoefficient

use crate::analyzer::{extract_trigrams, Analyzer};
use rustc_hash::FxHashSet;
use sift_types::{Match, Trigram};
use tracing::trace;

/// Collects the distinct packed trigrams of canonical text.
///
/// # Example
///
/// ```
/// use sift_core::similarity::trigram_set;
///
/// assert_eq!(trigram_set("banana").len(), 3); // "ban", "ana", "nan"
/// ```
pub fn trigram_set(canonical: &str) -> FxHashSet<Trigram> {
    let mut set = FxHashSet::with_capacity_and_hasher(
        canonical.len().saturating_sub(2),
        Default::default(),
    );
    extract_trigrams(canonical, |t| {
        set.insert(t);
    });
    set
}

/// A normalized string with its trigram fingerprint, ready to be scored.
struct Prepared {
    /// Raw input was empty or whitespace only.
    blank: bool,
    canonical: String,
    trigrams: FxHashSet<Trigram>,
}

impl Analyzer {
    fn prepare(&self, text: &str) -> Prepared {
        let canonical = self.normalizer.normalize(text);
        let trigrams = if canonical.len() > self.config.min_trigram_token_len {
            trigram_set(&canonical)
        } else {
            FxHashSet::default()
        };
        Prepared {
            blank: text.trim().is_empty(),
            canonical,
            trigrams,
        }
    }

    fn score_prepared(&self, a: &Prepared, b: &Prepared) -> f64 {
        if a.blank || b.blank {
            return 0.0;
        }
        if a.canonical == b.canonical {
            return 1.0;
        }
        if a.trigrams.is_empty() || b.trigrams.is_empty() {
            trace!(
                left = %a.canonical,
                right = %b.canonical,
                "short input compared exactly"
            );
            return 0.0;
        }

        let (small, large) = if a.trigrams.len() <= b.trigrams.len() {
            (&a.trigrams, &b.trigrams)
        } else {
            (&b.trigrams, &a.trigrams)
        };
        let shared = small.iter().filter(|&t| large.contains(t)).count();

        self.config
            .coefficient
            .score(shared, a.trigrams.len(), b.trigrams.len())
    }

    /// Scores how alike two strings are, in `[0.0, 1.0]`.
    ///
    /// # Example
    ///
    /// ```
    /// use sift_core::Analyzer;
    ///
    /// let analyzer = Analyzer::new();
    /// assert_eq!(analyzer.calculate_similarity("Rust", "RUST"), 1.0);
    /// assert!(analyzer.calculate_similarity("programming", "programmer") > 0.5);
    /// assert_eq!(analyzer.calculate_similarity(None, "rust"), 0.0);
    /// ```
    #[must_use]
    pub fn calculate_similarity<'a, 'b>(
        &self,
        a: impl Into<Option<&'a str>>,
        b: impl Into<Option<&'b str>>,
    ) -> f64 {
        let (Some(a), Some(b)) = (a.into(), b.into()) else {
            return 0.0;
        };
        self.score_prepared(&self.prepare(a), &self.prepare(b))
    }

    /// Ranks candidates by similarity to `query`, best first.
    ///
    /// Candidates scoring 0.0 or below `min_score` are dropped. Ties keep
    /// the candidates' input order. At most `limit` matches are returned.
    ///
    /// # Example
    ///
    /// ```
    /// use sift_core::Analyzer;
    ///
    /// let skills = ["JavaScript", "Java", "Programming", "Programmer"];
    /// let ranked = Analyzer::new().rank_matches("programing", skills, 10, 0.3);
    ///
    /// assert_eq!(ranked[0].index, 2);
    /// assert_eq!(ranked[1].index, 3);
    /// ```
    #[must_use]
    pub fn rank_matches<I>(
        &self,
        query: &str,
        candidates: I,
        limit: usize,
        min_score: f64,
    ) -> Vec<Match>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if limit == 0 || query.trim().is_empty() {
            return Vec::new();
        }

        let query = self.prepare(query);

        let mut matches: Vec<Match> = candidates
            .into_iter()
            .enumerate()
            .filter_map(|(index, candidate)| {
                let score = self.score_prepared(&query, &self.prepare(candidate.as_ref()));
                (score > 0.0 && score >= min_score).then(|| Match::new(index, score))
            })
            .collect();

        if matches.len() > limit {
            matches.select_nth_unstable_by(limit, |a, b| b.cmp(a));
            matches.truncate(limit);
        }
        matches.sort_unstable_by(|a, b| b.cmp(a));

        trace!(returned = matches.len(), "ranked candidates");
        matches
    }
}
