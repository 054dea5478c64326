use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::frequency::DocumentFrequency;

/// Inverse document frequency of a corpus
/// `idf(t) = ln(n / (df(t) + 1))`, where `n` is the number of documents.
///
/// The `+ 1` keeps the ratio finite. It also means a term found in
/// `n - 1` or more documents gets an IDF of zero or below; such values are
/// kept as they are, not clamped.
///
/// Serializable, so a model built over one corpus can be stored and used to
/// score new documents later with
/// [`Analyzer::tf_idf_document`](crate::Analyzer::tf_idf_document).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InverseDocumentFrequency {
    doc_num: u64,
    #[serde(with = "indexmap::map::serde_seq")]
    idf: IndexMap<String, f64>,
}

impl InverseDocumentFrequency {
    /// IDF calculation
    ///
    /// # Arguments
    /// * `doc_num` - number of documents in the corpus
    /// * `doc_freq` - number of documents containing the term
    ///
    /// # Returns
    /// * `f64` - `ln(doc_num / (doc_freq + 1))`
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        (doc_num as f64 / (doc_freq as f64 + 1.0)).ln()
    }

    /// Invert a document frequency map
    /// `n` is the document count carried by `df`, so a `df` restricted to
    /// part of the vocabulary still gives the right values.
    pub fn from_document_frequency(df: &DocumentFrequency) -> Self {
        let doc_num = df.doc_num();
        let idf = df
            .iter()
            .map(|(term, count)| (term.to_owned(), Self::idf_calc(doc_num, count)))
            .collect();
        log::debug!("inverted document frequency of {} terms over {} documents", df.vocab_size(), doc_num);
        Self { doc_num, idf }
    }

    /// IDF of a term, `None` when the term is unknown
    #[inline]
    pub fn get(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// Number of documents the model was built over
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.idf.iter().map(|(term, &idf)| (term.as_str(), idf))
    }

    #[inline]
    pub fn as_map(&self) -> &IndexMap<String, f64> {
        &self.idf
    }
}
