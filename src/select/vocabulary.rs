use indexmap::IndexSet;

use crate::{frequency::DocumentFrequency, idf::InverseDocumentFrequency};

/// Set of terms, in first-seen order
pub type Vocabulary = IndexSet<String>;

/// Vocabulary of a document frequency map
/// With `limit`, only terms found in strictly more than `limit` documents.
pub fn vocabulary_of_df(df: &DocumentFrequency, limit: Option<f64>) -> Vocabulary {
    df.iter()
        .filter(|&(_, count)| limit.map_or(true, |limit| count as f64 > limit))
        .map(|(term, _)| term.to_owned())
        .collect()
}

/// Vocabulary of an IDF model
/// With `limit`, only terms whose IDF is strictly greater than `limit`.
///
/// IDF falls as document frequency rises, so the limit here keeps the rare
/// terms, the opposite of [`vocabulary_of_df`]. Translating a document
/// frequency threshold into an IDF one is left to the caller.
pub fn vocabulary_of_idf(idf: &InverseDocumentFrequency, limit: Option<f64>) -> Vocabulary {
    idf.iter()
        .filter(|&(_, value)| limit.map_or(true, |limit| value > limit))
        .map(|(term, _)| term.to_owned())
        .collect()
}
