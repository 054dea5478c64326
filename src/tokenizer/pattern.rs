use regex::Regex;

/// Default split pattern
/// Separators are digit runs, whitespace with any punctuation/symbol run
/// stuck to either side of it, and punctuation/symbol runs at either end of
/// the text. Punctuation inside a word ("don't", "e.g") is kept.
pub const DEFAULT_PATTERN: &str =
    r"\d+|[\p{P}\p{S}]*\s+[\p{P}\p{S}]*|^[\p{P}\p{S}]+|[\p{P}\p{S}]+$";

/// Compile the default split pattern
pub fn default_regex() -> Regex {
    Regex::new(DEFAULT_PATTERN).expect("default token pattern is valid")
}

/// Split `text` on `separator`
/// Empty pieces (between adjacent separators, or at the edges) are discarded.
///
/// # Arguments
/// * `separator` - compiled separator pattern
/// * `text` - text to split
///
/// # Returns
/// * `Vec<String>` - tokens in text order
#[inline]
pub fn split_tokens(separator: &Regex, text: &str) -> Vec<String> {
    separator
        .split(text)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        split_tokens(&default_regex(), text)
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split("a a  b\tc\nd"), vec!["a", "a", "b", "c", "d"]);
    }

    #[test]
    fn punctuation_next_to_whitespace_is_a_separator() {
        assert_eq!(split("hello, world!"), vec!["hello", "world"]);
        assert_eq!(split("a - b"), vec!["a", "b"]);
        assert_eq!(split("price: $5"), vec!["price"]);
        assert_eq!(split("(quoted) words"), vec!["quoted", "words"]);
    }

    #[test]
    fn inner_punctuation_is_kept() {
        assert_eq!(split("don't stop"), vec!["don't", "stop"]);
        assert_eq!(split("e.g. this"), vec!["e.g", "this"]);
    }

    #[test]
    fn digits_are_separators() {
        assert_eq!(split("in 1999 we met"), vec!["in", "we", "met"]);
        assert_eq!(split("abc123def"), vec!["abc", "def"]);
    }

    #[test]
    fn degenerate_text_has_no_tokens() {
        assert!(split("").is_empty());
        assert!(split("...!").is_empty());
        assert!(split("   ").is_empty());
        assert!(split("42").is_empty());
    }
}
