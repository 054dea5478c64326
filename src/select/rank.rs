use std::cmp::Ordering;

use indexmap::IndexMap;

use crate::tfidf::TfIdfMap;

/// Merge per-document scores into one score per term
/// Scores of a term found in several documents are combined left to right
/// with `aggregator`. Terms keep first-seen order.
///
/// # Arguments
/// * `results` - TF-IDF maps, one per document
/// * `aggregator` - combines an accumulated score with the next one
pub fn aggregate_scores<F>(results: &[TfIdfMap], aggregator: F) -> IndexMap<String, f64>
where
    F: Fn(f64, f64) -> f64,
{
    let mut merged: IndexMap<String, f64> = IndexMap::new();
    for (term, &score) in results.iter().flatten() {
        match merged.get_mut(term) {
            Some(acc) => *acc = aggregator(*acc, score),
            None => {
                merged.insert(term.clone(), score);
            }
        }
    }
    merged
}

/// Terms ordered by aggregated score, highest first
///
/// # Examples
/// ```
/// use tf_idf_stats::{select::pick_terms, TfIdfMap};
/// let docs: Vec<TfIdfMap> = vec![
///     [("x".to_owned(), 0.2), ("y".to_owned(), 0.5)].into_iter().collect(),
///     [("x".to_owned(), 0.9)].into_iter().collect(),
/// ];
/// assert_eq!(pick_terms(&docs, f64::max), vec!["x", "y"]);
/// ```
pub fn pick_terms<F>(results: &[TfIdfMap], aggregator: F) -> Vec<String>
where
    F: Fn(f64, f64) -> f64,
{
    pick_terms_by(results, aggregator, |a, b| b.total_cmp(&a))
}

/// Terms ordered by aggregated score with a caller comparator
/// The sort is stable: terms comparing equal keep first-seen order.
///
/// # Arguments
/// * `results` - TF-IDF maps, one per document
/// * `aggregator` - combines the scores of a term
/// * `comparator` - orders two aggregated scores
pub fn pick_terms_by<F, C>(results: &[TfIdfMap], aggregator: F, comparator: C) -> Vec<String>
where
    F: Fn(f64, f64) -> f64,
    C: Fn(f64, f64) -> Ordering,
{
    let mut scored: Vec<(String, f64)> = aggregate_scores(results, aggregator).into_iter().collect();
    scored.sort_by(|a, b| comparator(a.1, b.1));
    scored.into_iter().map(|(term, _)| term).collect()
}

/// Terms ordered by the sum of their scores across documents
pub fn top_sum_terms(results: &[TfIdfMap]) -> Vec<String> {
    pick_terms(results, |a, b| a + b)
}

/// Terms ordered by their best score in any document
pub fn top_max_terms(results: &[TfIdfMap]) -> Vec<String> {
    pick_terms(results, f64::max)
}

/// Best `n` terms of each document, concatenated in document order
/// Within a document, terms are ordered by descending score. A term equal to
/// the one right before it is dropped; non-adjacent repeats are kept.
pub fn top_n_terms(n: usize, results: &[TfIdfMap]) -> Vec<String> {
    let mut terms: Vec<String> = results
        .iter()
        .flat_map(|scores| {
            let mut ranked: Vec<(&String, f64)> = scores.iter().map(|(t, &s)| (t, s)).collect();
            ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
            ranked.into_iter().take(n).map(|(term, _)| term.clone())
        })
        .collect();
    terms.dedup();
    terms
}
