use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::frequency::TermFrequencyMap;

/// Document frequency of a corpus
/// For each term, the number of documents containing it at least once,
/// together with the number of documents the counts were taken over.
///
/// A term repeated inside one document still counts once for it.
/// Every count satisfies `0 < count <= doc_num`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentFrequency {
    /// number of documents seen, including documents without terms
    doc_num: u64,
    /// documents containing each term
    #[serde(with = "indexmap::map::serde_seq")]
    term_counts: IndexMap<String, u64>,
}

impl DocumentFrequency {
    /// Create an empty instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw counts taken over `doc_num` documents
    /// Zero counts are dropped. Counts are not checked against `doc_num`.
    pub fn from_counts<I, S>(counts: I, doc_num: u64) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let term_counts = counts
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(term, count)| (term.into(), count))
            .collect();
        Self { doc_num, term_counts }
    }

    /// Count document membership over precomputed term frequencies
    /// Every map is one document, empty maps included.
    pub fn from_term_frequencies(term_frequencies: &[TermFrequencyMap]) -> Self {
        let mut df = Self::new();
        for tf in term_frequencies {
            df.add_set(tf.keys());
        }
        df
    }

    /// Add one document given its distinct terms
    ///
    /// # Arguments
    /// * `terms` - the document's terms; each must appear once
    pub fn add_set<I, T>(&mut self, terms: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            let term = term.as_ref();
            match self.term_counts.get_mut(term) {
                Some(count) => *count += 1,
                None => {
                    self.term_counts.insert(term.to_owned(), 1);
                }
            }
        }
        self
    }

    /// Merge the counts of another, disjoint, set of documents into self
    pub fn merge(mut self, other: DocumentFrequency) -> Self {
        self.doc_num += other.doc_num;
        for (term, count) in other.term_counts {
            *self.term_counts.entry(term).or_insert(0) += count;
        }
        self
    }

    /// Number of documents the counts were taken over
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `term`
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_counts.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts
            .iter()
            .map(|(term, &count)| (term.as_str(), count))
    }

    #[inline]
    pub fn as_map(&self) -> &IndexMap<String, u64> {
        &self.term_counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tf(terms: &[(&str, f64)]) -> TermFrequencyMap {
        terms.iter().map(|&(t, v)| (t.to_owned(), v)).collect()
    }

    #[test]
    fn counts_membership_not_occurrences() {
        let mut df = DocumentFrequency::new();
        df.add_set(["a", "b"]).add_set(["a"]).add_set(Vec::<&str>::new());
        assert_eq!(df.doc_num(), 3);
        assert_eq!(df.term_count("a"), 2);
        assert_eq!(df.term_count("b"), 1);
        assert_eq!(df.term_count("c"), 0);
        assert_eq!(df.vocab_size(), 2);
    }

    #[test]
    fn from_term_frequencies_counts_empty_documents() {
        let tfs = vec![
            TermFrequencyMap::new(),
            tf(&[("a", 2.0 / 3.0), ("b", 1.0 / 3.0)]),
            tf(&[("a", 0.25), ("b", 0.75)]),
        ];
        let df = DocumentFrequency::from_term_frequencies(&tfs);
        assert_eq!(df.doc_num(), 3);
        assert_eq!(df.iter().collect::<Vec<_>>(), vec![("a", 2), ("b", 2)]);
    }

    #[test]
    fn merge_adds_documents_and_counts() {
        let mut left = DocumentFrequency::new();
        left.add_set(["a", "b"]);
        let mut right = DocumentFrequency::new();
        right.add_set(["b", "c"]).add_set(["c"]);

        let merged = left.merge(right);
        assert_eq!(merged.doc_num(), 3);
        assert_eq!(merged.term_count("a"), 1);
        assert_eq!(merged.term_count("b"), 2);
        assert_eq!(merged.term_count("c"), 2);
    }

    #[test]
    fn from_counts_drops_zero_counts() {
        let df = DocumentFrequency::from_counts([("a", 3), ("b", 0)], 5);
        assert_eq!(df.doc_num(), 5);
        assert_eq!(df.vocab_size(), 1);
        assert!(!df.as_map().contains_key("b"));
    }
}
