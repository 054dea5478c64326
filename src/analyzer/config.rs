use serde::{Deserialize, Serialize};

use crate::{error::Result, tokenizer::{pattern::DEFAULT_PATTERN, Tokenizer}};

/// Analyzer configuration
/// Missing fields take their defaults when deserialized.
///
/// # Examples
/// ```
/// use tf_idf_stats::{Analyzer, AnalyzerConfig};
/// let mut config = AnalyzerConfig::default();
/// config.tokenizer.stop_words = vec!["the".to_owned()];
/// let analyzer = Analyzer::from_config(&config).unwrap();
/// assert_eq!(analyzer.tokenizer().tokenize_document("The end").unwrap(), vec!["end"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// run per-document work on the rayon pool
    pub parallel: bool,
    /// corpora smaller than this are processed sequentially
    pub parallel_min_docs: usize,
    pub tokenizer: TokenizerOptions,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_min_docs: 64,
            tokenizer: TokenizerOptions::default(),
        }
    }
}

/// Declarative tokenizer settings
/// For stages that are arbitrary code use [`Tokenizer::builder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// separator regex
    pub pattern: String,
    pub lowercase: bool,
    pub stop_words: Vec<String>,
    /// tokens with fewer characters are dropped; 0 keeps everything
    pub min_token_len: usize,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_owned(),
            lowercase: true,
            stop_words: Vec::new(),
            min_token_len: 0,
        }
    }
}

impl TokenizerOptions {
    /// Compile into a tokenizer
    ///
    /// # Errors
    /// [`Error::Pattern`](crate::Error::Pattern) when `pattern` does not compile.
    pub fn build(&self) -> Result<Tokenizer> {
        let tokenizer = Tokenizer::builder()
            .lowercase(self.lowercase)
            .pattern(&self.pattern)?
            .stop_words(self.stop_words.iter().cloned())
            .min_token_len(self.min_token_len)
            .build();
        Ok(tokenizer)
    }
}
