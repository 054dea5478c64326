pub mod document;
pub mod term;

use indexmap::IndexMap;
use num::ToPrimitive;

pub use document::DocumentFrequency;
pub use term::TermCounts;

/// Normalized term frequencies of one document
/// Values are in `[0, 1]` and sum to 1, unless the document has no terms, in
/// which case the map is empty. Keys keep first-occurrence order.
pub type TermFrequencyMap = IndexMap<String, f64>;

/// Divide every value of a frequency map by `n`
///
/// # Arguments
/// * `freq_map` - counts or weights keyed by term
/// * `n` - divisor; the sum of all values when `None`
///
/// # Returns
/// * `IndexMap<String, f64>` - same keys, same order.
///   A zero divisor gives 0.0 for every key instead of NaN or infinity.
///
/// # Examples
/// ```
/// use indexmap::IndexMap;
/// use tf_idf_stats::normalize_frequencies;
/// let counts: IndexMap<String, u64> = [("a".to_owned(), 1), ("b".to_owned(), 3)].into_iter().collect();
/// let normalized = normalize_frequencies(&counts, None);
/// assert_eq!(normalized["b"], 0.75);
/// ```
pub fn normalize_frequencies<N>(freq_map: &IndexMap<String, N>, n: Option<f64>) -> IndexMap<String, f64>
where
    N: ToPrimitive,
{
    let value = |v: &N| v.to_f64().unwrap_or(0.0);
    let divisor = n.unwrap_or_else(|| freq_map.values().map(value).sum());
    freq_map
        .iter()
        .map(|(term, v)| {
            let normalized = if divisor == 0.0 { 0.0 } else { value(v) / divisor };
            (term.clone(), normalized)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map<N: Copy>(entries: &[(&str, N)]) -> IndexMap<String, N> {
        entries.iter().map(|&(t, v)| (t.to_owned(), v)).collect()
    }

    #[test]
    fn divides_by_sum_by_default() {
        let normalized = normalize_frequencies(&map(&[("a", 1u64), ("b", 3u64)]), None);
        assert_eq!(normalized, map(&[("a", 0.25), ("b", 0.75)]));
    }

    #[test]
    fn divides_by_explicit_n() {
        let normalized = normalize_frequencies(&map(&[("a", 2.0f64), ("b", 6.0f64)]), Some(4.0));
        assert_eq!(normalized, map(&[("a", 0.5), ("b", 1.5)]));
    }

    #[test]
    fn zero_divisor_gives_zeros() {
        let normalized = normalize_frequencies(&map(&[("a", 0u32)]), None);
        assert_eq!(normalized, map(&[("a", 0.0)]));
        let empty: IndexMap<String, u64> = IndexMap::new();
        assert!(normalize_frequencies(&empty, None).is_empty());
    }

    #[test]
    fn keeps_key_order() {
        let normalized = normalize_frequencies(&map(&[("z", 1i32), ("a", 1i32), ("m", 2i32)]), None);
        let keys: Vec<&str> = normalized.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
