use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::frequency::TermFrequencyMap;

/// TermCounts struct
/// Raw occurrence counts of the terms of one document.
/// Terms keep first-occurrence order.
///
/// # Examples
/// ```
/// use tf_idf_stats::TermCounts;
/// let mut counts = TermCounts::new();
/// counts.add_terms(&["a", "b", "b", "b"]);
///
/// assert_eq!(counts.term_count("b"), 3);
/// assert_eq!(counts.tf_map()["a"], 0.25);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermCounts {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermCounts {
    /// Create an empty TermCounts
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the terms of an owned token sequence
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts = Self::new();
        for token in tokens {
            *counts.term_count.entry(token).or_insert(0) += 1;
            counts.total_term_count += 1;
        }
        counts
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

/// Implementation for retrieving information from TermCounts
impl TermCounts {
    /// Iterate over terms and their counts
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count
            .iter()
            .map(|(term, &count)| (term.as_str(), count))
    }

    /// Get the occurrence count for a specific term
    ///
    /// # Returns
    /// * `u64` - Occurrence count, 0 when the term is absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Raw counts keyed by term
    #[inline]
    pub fn counts(&self) -> &IndexMap<String, u64> {
        &self.term_count
    }

    /// Total number of tokens counted
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Get the count of the most frequent term
    ///
    /// # Returns
    /// * `u64` - 0 for an empty document
    #[inline]
    pub fn most_frequent_term_count(&self) -> u64 {
        self.term_count.values().copied().max().unwrap_or(0)
    }

    /// Get the most frequent terms
    /// If multiple terms share the highest count, all of them are returned
    /// in first-occurrence order
    pub fn most_frequent_terms(&self) -> Vec<(&str, u64)> {
        let max = self.most_frequent_term_count();
        self.iter().filter(|&(_, count)| count == max && max > 0).collect()
    }

    /// Distinct terms divided by total terms
    /// 1.0 means no term repeats, 0.0 is returned for an empty document
    pub fn unique_term_ratio(&self) -> f64 {
        if self.total_term_count == 0 {
            return 0.0;
        }
        self.term_count.len() as f64 / self.total_term_count as f64
    }

    /// Term frequencies of this document
    /// Each count divided by the total count; empty when nothing was counted.
    pub fn tf_map(&self) -> TermFrequencyMap {
        if self.total_term_count == 0 {
            return TermFrequencyMap::new();
        }
        super::normalize_frequencies(&self.term_count, Some(self.total_term_count as f64))
    }
}
