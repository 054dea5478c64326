//! TF-IDF statistics over in-memory corpora.
//!
//! The pipeline runs bottom-up: tokenizer, term frequency, document
//! frequency, inverse document frequency, TF-IDF, then vocabulary and term
//! selection. Every stage accepts the output of the stage before it, so
//! intermediate results can be computed once and reused.
//!
//! ```
//! use tf_idf_stats::{select, Analyzer, DocumentFrequencySource};
//!
//! let corpus = ["", "...!", "a a b", "a b b b"];
//! let analyzer = Analyzer::new();
//!
//! let tfs = analyzer.term_frequencies(&corpus).unwrap();
//! assert_eq!(tfs[3]["b"], 0.75);
//!
//! let df = analyzer
//!     .document_frequencies(DocumentFrequencySource::term_frequencies(&tfs))
//!     .unwrap();
//! assert_eq!(df.term_count("a"), 2);
//!
//! let scores = analyzer.tf_idf(&corpus).unwrap();
//! assert_eq!(select::top_n_terms(1, &scores), vec!["a", "b"]);
//! ```
pub mod analyzer;
pub mod error;
pub mod frequency;
pub mod idf;
pub mod select;
pub mod tfidf;
pub mod tokenizer;

/// Analyzer
/// The context object of this crate. It owns the tokenizer and exposes every
/// entry point that needs to tokenize documents:
/// - term counts and term frequencies
/// - document frequency
/// - inverse document frequency
/// - TF-IDF for a corpus, or for one new document against a stored model
/// - vocabulary
///
/// Per-document work runs on the rayon pool for large enough corpora; the
/// results are the same either way.
pub use analyzer::Analyzer;

/// Analyzer configuration
/// Serializable settings for the analyzer and its tokenizer. Fields left out
/// of a config file take their defaults.
pub use analyzer::config::{AnalyzerConfig, TokenizerOptions};

/// Input shapes
/// Each entry point that accepts either raw documents or a computed result
/// takes one of these enums, so the accepted shapes are checked at compile time.
pub use analyzer::source::{DocumentFrequencySource, IdfSource, VocabularySource};

/// Tokenizer pipeline
/// Four pluggable stages: preprocess, tokenize, postprocess and an ignore rule.
/// The default lower-cases and splits on punctuation, digits and whitespace.
pub use tokenizer::{Tokenizer, TokenizerBuilder};

/// Frequency structures
/// - `TermCounts`: raw term counts of one document
/// - `TermFrequencyMap`: normalized term frequencies of one document
/// - `DocumentFrequency`: number of documents containing each term, plus the
///   number of documents
pub use frequency::{normalize_frequencies, DocumentFrequency, TermCounts, TermFrequencyMap};

/// Inverse document frequency model
/// `ln(n / (df + 1))` per term. Serializable for reuse on new documents.
pub use idf::InverseDocumentFrequency;

/// TF-IDF scores of one document
pub use tfidf::TfIdfMap;

/// Vocabulary, a set of terms in first-seen order
pub use select::Vocabulary;

/// Error type
/// Caller-supplied tokenizer stages report failures through `Error::Stage`
/// unchanged; a bad split pattern is reported as `Error::Pattern`.
pub use error::{BoxError, Error, Result, StageResult};
