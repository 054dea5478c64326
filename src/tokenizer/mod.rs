pub mod pattern;

use std::{collections::HashSet, fmt, sync::Arc};

use regex::Regex;

use crate::error::{Error, Result, StageResult};

/// Turns a raw document into normalized text
pub type PreprocessFn = dyn Fn(&str) -> StageResult<String> + Send + Sync;
/// Splits normalized text into tokens
pub type TokenizeFn = dyn Fn(&str) -> StageResult<Vec<String>> + Send + Sync;
/// Rewrites the token sequence of one document
pub type PostprocessFn = dyn Fn(Vec<String>) -> StageResult<Vec<String>> + Send + Sync;
/// Marks a token sequence to be dropped
pub type IgnoredFn = dyn Fn(&[String]) -> bool + Send + Sync;

/// Tokenizer pipeline
/// Four pluggable stages applied per document, in order:
/// `preprocess`, `tokenize`, `postprocess`, then `ignored`.
///
/// A document whose token sequence is empty or matches `ignored` yields an
/// empty sequence. Its slot is kept so per-document results stay aligned
/// with the input corpus.
///
/// The default pipeline lower-cases, splits on
/// [`pattern::DEFAULT_PATTERN`], keeps tokens as they are, and ignores the
/// single-empty-token marker.
///
/// Stages are shared behind `Arc`, so cloning is cheap and the tokenizer can
/// be used from rayon workers.
///
/// # Examples
/// ```
/// use tf_idf_stats::Tokenizer;
/// let tokenizer = Tokenizer::builder()
///     .stop_words(["the"])
///     .build();
/// let tokens = tokenizer.tokenize_document("The cat, the hat.").unwrap();
/// assert_eq!(tokens, vec!["cat", "hat"]);
/// ```
#[derive(Clone)]
pub struct Tokenizer {
    preprocess: Arc<PreprocessFn>,
    tokenize: Arc<TokenizeFn>,
    postprocess: Arc<PostprocessFn>,
    ignored: Arc<IgnoredFn>,
    /// split pattern, when the tokenize stage is a regex split
    pattern: Option<String>,
}

impl Tokenizer {
    /// Create the default tokenizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the default stages and replace some of them
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Split pattern of the tokenize stage, if it is a regex split
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Run the pipeline over one document
    ///
    /// # Arguments
    /// * `document` - raw document text
    ///
    /// # Returns
    /// * `Vec<String>` - tokens; empty when the document is ignored
    ///
    /// # Errors
    /// Whatever a caller-supplied stage returns, as [`Error::Stage`].
    pub fn tokenize_document(&self, document: &str) -> Result<Vec<String>> {
        let text = (self.preprocess)(document).map_err(Error::Stage)?;
        let tokens = (self.tokenize)(&text).map_err(Error::Stage)?;
        let tokens = (self.postprocess)(tokens).map_err(Error::Stage)?;
        if tokens.is_empty() || (self.ignored)(&tokens) {
            log::trace!("document ignored by tokenizer");
            return Ok(Vec::new());
        }
        Ok(tokens)
    }

    /// Lazily run the pipeline over a sequence of documents
    /// One item per input document, in input order.
    pub fn tokenize_documents<'a, I>(
        &'a self,
        documents: I,
    ) -> impl Iterator<Item = Result<Vec<String>>> + 'a
    where
        I: IntoIterator + 'a,
        I::Item: AsRef<str>,
        I::IntoIter: 'a,
    {
        documents
            .into_iter()
            .map(move |document| self.tokenize_document(document.as_ref()))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            preprocess: Arc::new(lowercase),
            tokenize: regex_split(pattern::default_regex()),
            postprocess: Arc::new(identity),
            ignored: Arc::new(is_empty_marker),
            pattern: Some(pattern::DEFAULT_PATTERN.to_owned()),
        }
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// Default ignore rule: a sequence made of exactly one empty token
#[inline]
pub fn is_empty_marker(tokens: &[String]) -> bool {
    matches!(tokens, [only] if only.is_empty())
}

fn lowercase(document: &str) -> StageResult<String> {
    Ok(document.to_lowercase())
}

fn keep_case(document: &str) -> StageResult<String> {
    Ok(document.to_owned())
}

fn identity(tokens: Vec<String>) -> StageResult<Vec<String>> {
    Ok(tokens)
}

fn regex_split(separator: Regex) -> Arc<TokenizeFn> {
    Arc::new(move |text: &str| -> StageResult<Vec<String>> {
        Ok(pattern::split_tokens(&separator, text))
    })
}

/// Builder for [`Tokenizer`]
/// Every stage starts at its default.
pub struct TokenizerBuilder {
    preprocess: Arc<PreprocessFn>,
    tokenize: Arc<TokenizeFn>,
    postprocess: Arc<PostprocessFn>,
    ignored: Arc<IgnoredFn>,
    pattern: Option<String>,
}

impl TokenizerBuilder {
    pub fn new() -> Self {
        let Tokenizer {
            preprocess,
            tokenize,
            postprocess,
            ignored,
            pattern,
        } = Tokenizer::default();
        Self {
            preprocess,
            tokenize,
            postprocess,
            ignored,
            pattern,
        }
    }

    /// Replace the preprocess stage
    pub fn preprocess<F>(mut self, preprocess: F) -> Self
    where
        F: Fn(&str) -> StageResult<String> + Send + Sync + 'static,
    {
        self.preprocess = Arc::new(preprocess);
        self
    }

    /// Lower-case documents (the default) or keep them as they are
    pub fn lowercase(mut self, lowercase_documents: bool) -> Self {
        if lowercase_documents {
            self.preprocess = Arc::new(lowercase);
        } else {
            self.preprocess = Arc::new(keep_case);
        }
        self
    }

    /// Replace the tokenize stage
    pub fn tokenize<F>(mut self, tokenize: F) -> Self
    where
        F: Fn(&str) -> StageResult<Vec<String>> + Send + Sync + 'static,
    {
        self.tokenize = Arc::new(tokenize);
        self.pattern = None;
        self
    }

    /// Tokenize by splitting on a regex separator pattern
    ///
    /// # Errors
    /// [`Error::Pattern`] when `pattern` does not compile.
    pub fn pattern(mut self, pattern: &str) -> Result<Self> {
        let separator = Regex::new(pattern)?;
        self.tokenize = regex_split(separator);
        self.pattern = Some(pattern.to_owned());
        Ok(self)
    }

    /// Replace the postprocess stage
    pub fn postprocess<F>(mut self, postprocess: F) -> Self
    where
        F: Fn(Vec<String>) -> StageResult<Vec<String>> + Send + Sync + 'static,
    {
        self.postprocess = Arc::new(postprocess);
        self
    }

    /// Drop the given tokens after the current postprocess stage
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop: HashSet<String> = words.into_iter().map(Into::into).collect();
        if stop.is_empty() {
            return self;
        }
        let inner = self.postprocess;
        self.postprocess = Arc::new(move |tokens: Vec<String>| -> StageResult<Vec<String>> {
            let mut tokens = inner(tokens)?;
            tokens.retain(|token| !stop.contains(token));
            Ok(tokens)
        });
        self
    }

    /// Drop tokens shorter than `min_len` characters after the current
    /// postprocess stage
    pub fn min_token_len(mut self, min_len: usize) -> Self {
        if min_len == 0 {
            return self;
        }
        let inner = self.postprocess;
        self.postprocess = Arc::new(move |tokens: Vec<String>| -> StageResult<Vec<String>> {
            let mut tokens = inner(tokens)?;
            tokens.retain(|token| token.chars().count() >= min_len);
            Ok(tokens)
        });
        self
    }

    /// Replace the ignore rule
    pub fn ignored<F>(mut self, ignored: F) -> Self
    where
        F: Fn(&[String]) -> bool + Send + Sync + 'static,
    {
        self.ignored = Arc::new(ignored);
        self
    }

    pub fn build(self) -> Tokenizer {
        Tokenizer {
            preprocess: self.preprocess,
            tokenize: self.tokenize,
            postprocess: self.postprocess,
            ignored: self.ignored,
            pattern: self.pattern,
        }
    }
}

impl Default for TokenizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
