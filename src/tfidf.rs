use indexmap::IndexMap;
use rayon::prelude::*;

use crate::{frequency::TermFrequencyMap, idf::InverseDocumentFrequency};

/// TF-IDF scores of one document
/// Keyed only by terms of that document that the IDF model knows.
pub type TfIdfMap = IndexMap<String, f64>;

/// Score one document
/// Multiplies each term frequency by the term's IDF. Terms unknown to `idf`
/// are left out; terms of `idf` missing from `tf` never appear.
///
/// # Arguments
/// * `tf` - term frequencies of the document
/// * `idf` - IDF model
///
/// # Returns
/// * `TfIdfMap` - scores in the key order of `tf`
pub fn tf_idf_map(tf: &TermFrequencyMap, idf: &InverseDocumentFrequency) -> TfIdfMap {
    tf.iter()
        .filter_map(|(term, &freq)| idf.get(term).map(|weight| (term.clone(), freq * weight)))
        .collect()
}

/// Score every document of a corpus against one IDF model
/// Document order is preserved. With `parallel`, documents are scored on the
/// rayon pool.
pub fn tf_idf_maps(
    term_frequencies: &[TermFrequencyMap],
    idf: &InverseDocumentFrequency,
    parallel: bool,
) -> Vec<TfIdfMap> {
    if parallel {
        term_frequencies
            .par_iter()
            .map(|tf| tf_idf_map(tf, idf))
            .collect()
    } else {
        term_frequencies
            .iter()
            .map(|tf| tf_idf_map(tf, idf))
            .collect()
    }
}
