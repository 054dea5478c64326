pub mod config;
pub mod source;

use indexmap::IndexSet;
use rayon::prelude::*;

use crate::{
    error::Result,
    frequency::{DocumentFrequency, TermCounts, TermFrequencyMap},
    idf::InverseDocumentFrequency,
    select::{self, Vocabulary},
    tfidf::{self, TfIdfMap},
    tokenizer::Tokenizer,
};

use self::{
    config::AnalyzerConfig,
    source::{DocumentFrequencySource, IdfSource, VocabularySource},
};

/// Analysis context
/// Holds the tokenizer every entry point uses, and decides whether
/// per-document work runs on the rayon pool.
///
/// Swapping the tokenizer for a group of calls is done by deriving a new
/// context with [`Analyzer::with_tokenizer`]; the original is untouched.
///
/// Each stage makes one pass over its input. Every entry point that
/// tokenizes fails with the first error a tokenizer stage returns.
///
/// # Examples
/// ```
/// use tf_idf_stats::{select, Analyzer};
/// let analyzer = Analyzer::new();
/// let corpus = ["the cat sat", "the dog sat", "the cat ran"];
/// let scores = analyzer.tf_idf(&corpus).unwrap();
/// assert_eq!(scores.len(), 3);
/// // "the" is in every document and scores below zero
/// assert_eq!(select::top_n_terms(1, &scores), vec!["cat", "dog", "ran"]);
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    tokenizer: Tokenizer,
    parallel: bool,
    parallel_min_docs: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        let config = AnalyzerConfig::default();
        Self {
            tokenizer: Tokenizer::default(),
            parallel: config.parallel,
            parallel_min_docs: config.parallel_min_docs,
        }
    }
}

impl Analyzer {
    /// Create an analyzer with the default tokenizer and settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer from configuration
    ///
    /// # Errors
    /// [`Error::Pattern`](crate::Error::Pattern) when the configured pattern
    /// does not compile.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            tokenizer: config.tokenizer.build()?,
            parallel: config.parallel,
            parallel_min_docs: config.parallel_min_docs,
        })
    }

    /// Same settings, different tokenizer
    pub fn with_tokenizer(&self, tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            ..self.clone()
        }
    }

    /// Turn rayon on or off
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    #[inline]
    fn use_parallel(&self, doc_num: usize) -> bool {
        let parallel = self.parallel && doc_num >= self.parallel_min_docs;
        log::trace!("{} documents, parallel: {}", doc_num, parallel);
        parallel
    }
}

/// Frequency engine
impl Analyzer {
    /// Raw term counts of each document, in document order
    pub fn term_counts<D>(&self, documents: &[D]) -> Result<Vec<TermCounts>>
    where
        D: AsRef<str> + Sync,
    {
        let counts = if self.use_parallel(documents.len()) {
            documents
                .par_iter()
                .map(|document| self.count_document(document.as_ref()))
                .collect::<Result<Vec<_>>>()?
        } else {
            self.tokenizer
                .tokenize_documents(documents)
                .map(|tokens| tokens.map(TermCounts::from_tokens))
                .collect::<Result<Vec<_>>>()?
        };
        log::debug!("counted terms of {} documents", counts.len());
        Ok(counts)
    }

    /// Term frequencies of one document
    pub fn term_frequency(&self, document: &str) -> Result<TermFrequencyMap> {
        Ok(self.count_document(document)?.tf_map())
    }

    /// Term frequencies of each document, in document order
    /// A document without tokens gets an empty map.
    pub fn term_frequencies<D>(&self, documents: &[D]) -> Result<Vec<TermFrequencyMap>>
    where
        D: AsRef<str> + Sync,
    {
        let tfs = if self.use_parallel(documents.len()) {
            documents
                .par_iter()
                .map(|document| self.term_frequency(document.as_ref()))
                .collect::<Result<Vec<_>>>()?
        } else {
            self.tokenizer
                .tokenize_documents(documents)
                .map(|tokens| tokens.map(|tokens| TermCounts::from_tokens(tokens).tf_map()))
                .collect::<Result<Vec<_>>>()?
        };
        log::debug!("computed term frequencies of {} documents", tfs.len());
        Ok(tfs)
    }

    /// Document frequency of a corpus
    /// Raw documents are tokenized; precomputed term frequencies are used as
    /// they are. Both give the same result for the same corpus.
    pub fn document_frequencies<D>(&self, source: DocumentFrequencySource<'_, D>) -> Result<DocumentFrequency>
    where
        D: AsRef<str> + Sync,
    {
        let df = match source {
            DocumentFrequencySource::Documents(documents) => self.document_frequencies_of(documents)?,
            DocumentFrequencySource::TermFrequencies(tfs) => DocumentFrequency::from_term_frequencies(tfs),
        };
        log::debug!("document frequency: {} terms over {} documents", df.vocab_size(), df.doc_num());
        Ok(df)
    }

    fn document_frequencies_of<D>(&self, documents: &[D]) -> Result<DocumentFrequency>
    where
        D: AsRef<str> + Sync,
    {
        if self.use_parallel(documents.len()) {
            documents
                .par_iter()
                .map(|document| self.distinct_terms(document.as_ref()))
                .try_fold(DocumentFrequency::new, |mut df, terms| -> Result<DocumentFrequency> {
                    df.add_set(&terms?);
                    Ok(df)
                })
                .try_reduce(DocumentFrequency::new, |left, right| Ok(left.merge(right)))
        } else {
            let mut df = DocumentFrequency::new();
            for tokens in self.tokenizer.tokenize_documents(documents) {
                df.add_set(&tokens?.into_iter().collect::<IndexSet<String>>());
            }
            Ok(df)
        }
    }

    fn count_document(&self, document: &str) -> Result<TermCounts> {
        Ok(TermCounts::from_tokens(self.tokenizer.tokenize_document(document)?))
    }

    fn distinct_terms(&self, document: &str) -> Result<IndexSet<String>> {
        Ok(self.tokenizer.tokenize_document(document)?.into_iter().collect())
    }
}

/// IDF engine
impl Analyzer {
    /// Inverse document frequency of a corpus
    /// A precomputed document frequency must cover the whole corpus.
    pub fn inverse_document_frequency<D>(&self, source: IdfSource<'_, D>) -> Result<InverseDocumentFrequency>
    where
        D: AsRef<str> + Sync,
    {
        match source {
            IdfSource::Documents(documents) => self.idf(documents),
            IdfSource::DocumentFrequencies(df) => Ok(InverseDocumentFrequency::from_document_frequency(df)),
        }
    }

    /// term frequencies, then document frequency, then inversion
    pub fn idf<D>(&self, documents: &[D]) -> Result<InverseDocumentFrequency>
    where
        D: AsRef<str> + Sync,
    {
        let tfs = self.term_frequencies(documents)?;
        let df = self.document_frequencies(DocumentFrequencySource::term_frequencies(&tfs))?;
        Ok(InverseDocumentFrequency::from_document_frequency(&df))
    }
}

/// TF-IDF composer
impl Analyzer {
    /// TF-IDF scores of each document, in document order
    /// Each document's key set is exactly its term frequency key set.
    pub fn tf_idf<D>(&self, documents: &[D]) -> Result<Vec<TfIdfMap>>
    where
        D: AsRef<str> + Sync,
    {
        let tfs = self.term_frequencies(documents)?;
        let df = DocumentFrequency::from_term_frequencies(&tfs);
        let idf = InverseDocumentFrequency::from_document_frequency(&df);
        let scores = tfidf::tf_idf_maps(&tfs, &idf, self.use_parallel(tfs.len()));
        log::debug!("scored {} documents over {} terms", scores.len(), idf.len());
        Ok(scores)
    }

    /// Score one new document against an existing IDF model
    /// The corpus the model came from is not needed. Terms the model does not
    /// know are not scored.
    pub fn tf_idf_document(&self, idf: &InverseDocumentFrequency, document: &str) -> Result<TfIdfMap> {
        let tf = self.term_frequency(document)?;
        Ok(tfidf::tf_idf_map(&tf, idf))
    }
}

/// Vocabulary
impl Analyzer {
    /// Terms of a corpus or of a computed result
    /// With `limit`, only terms whose value is strictly greater than `limit`;
    /// the value is a document count, or an IDF for an IDF source.
    pub fn vocabulary<D>(&self, source: VocabularySource<'_, D>, limit: Option<f64>) -> Result<Vocabulary>
    where
        D: AsRef<str> + Sync,
    {
        let vocabulary = match source {
            VocabularySource::Documents(documents) => {
                select::vocabulary_of_df(&self.document_frequencies_of(documents)?, limit)
            }
            VocabularySource::DocumentFrequencies(df) => select::vocabulary_of_df(df, limit),
            VocabularySource::InverseDocumentFrequencies(idf) => select::vocabulary_of_idf(idf, limit),
        };
        Ok(vocabulary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const CORPUS: [&str; 4] = ["", "...!", "a a b", "a b b b"];

    fn sequential() -> Analyzer {
        Analyzer::new().parallel(false)
    }

    fn forced_parallel() -> Analyzer {
        let config = AnalyzerConfig {
            parallel: true,
            parallel_min_docs: 0,
            ..AnalyzerConfig::default()
        };
        Analyzer::from_config(&config).unwrap()
    }

    #[test]
    fn term_frequencies_keep_document_slots() {
        let tfs = sequential().term_frequencies(&CORPUS).unwrap();
        assert_eq!(tfs.len(), 4);
        assert!(tfs[0].is_empty());
        assert!(tfs[1].is_empty());
        assert_eq!(tfs[3]["a"], 0.25);
        assert_eq!(tfs[3]["b"], 0.75);
    }

    #[test]
    fn term_counts_are_raw() {
        let counts = sequential().term_counts(&CORPUS).unwrap();
        assert_eq!(counts[2].term_count("a"), 2);
        assert_eq!(counts[3].term_sum(), 4);
        assert!(counts[0].is_empty());
    }

    #[test]
    fn document_frequencies_from_both_sources_agree() {
        let analyzer = sequential();
        let from_docs = analyzer
            .document_frequencies(DocumentFrequencySource::Documents(&CORPUS))
            .unwrap();
        let tfs = analyzer.term_frequencies(&CORPUS).unwrap();
        let from_tfs = analyzer
            .document_frequencies(DocumentFrequencySource::term_frequencies(&tfs))
            .unwrap();
        assert_eq!(from_docs, from_tfs);
        assert_eq!(from_docs.doc_num(), 4);
        assert_eq!(from_docs.term_count("a"), 2);
        assert_eq!(from_docs.term_count("b"), 2);
    }

    #[test]
    fn idf_from_both_sources_agree() {
        let analyzer = sequential();
        let direct = analyzer.inverse_document_frequency(IdfSource::Documents(&CORPUS)).unwrap();
        let df = analyzer
            .document_frequencies(DocumentFrequencySource::Documents(&CORPUS))
            .unwrap();
        let via_df = analyzer
            .inverse_document_frequency(IdfSource::document_frequencies(&df))
            .unwrap();
        assert_eq!(direct, via_df);
        assert!((direct.get("a").unwrap() - (4.0f64 / 3.0).ln()).abs() < 1e-12);
        let converted = analyzer.inverse_document_frequency((&CORPUS[..]).into()).unwrap();
        assert_eq!(direct, converted);
    }

    #[test]
    fn tf_idf_keys_match_term_frequencies() {
        let analyzer = sequential();
        let tfs = analyzer.term_frequencies(&CORPUS).unwrap();
        let scores = analyzer.tf_idf(&CORPUS).unwrap();
        assert_eq!(scores.len(), tfs.len());
        for (tf, score) in tfs.iter().zip(&scores) {
            assert!(tf.keys().eq(score.keys()));
        }
    }

    #[test]
    fn score_new_document_against_model() {
        let analyzer = sequential();
        let idf = analyzer.idf(&CORPUS).unwrap();
        let scores = analyzer.tf_idf_document(&idf, "b b c").unwrap();
        assert_eq!(scores.len(), 1);
        let expected = 2.0 / 3.0 * (4.0f64 / 3.0).ln();
        assert!((scores["b"] - expected).abs() < 1e-12);
    }

    #[test]
    fn vocabulary_from_every_source() {
        let analyzer = sequential();
        let df = analyzer
            .document_frequencies(DocumentFrequencySource::Documents(&CORPUS))
            .unwrap();
        let idf = analyzer.idf(&CORPUS).unwrap();
        let from_docs = analyzer.vocabulary(VocabularySource::Documents(&CORPUS), None).unwrap();
        let from_df = analyzer.vocabulary(VocabularySource::document_frequencies(&df), None).unwrap();
        let from_idf = analyzer
            .vocabulary(VocabularySource::inverse_document_frequencies(&idf), None)
            .unwrap();
        assert_eq!(from_docs, from_df);
        assert_eq!(from_docs, from_idf);
        assert_eq!(from_docs.len(), 2);
        assert!(analyzer
            .vocabulary(VocabularySource::Documents(&CORPUS), Some(2.0))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn parallel_matches_sequential() {
        let corpus: Vec<String> = (0..200)
            .map(|i| format!("doc{} shared term{} term{} extra", i, i % 7, i % 13))
            .collect();
        let (seq, par) = (sequential(), forced_parallel());
        assert_eq!(seq.term_counts(&corpus).unwrap(), par.term_counts(&corpus).unwrap());
        assert_eq!(seq.term_frequencies(&corpus).unwrap(), par.term_frequencies(&corpus).unwrap());
        assert_eq!(
            seq.document_frequencies(DocumentFrequencySource::Documents(&corpus)).unwrap(),
            par.document_frequencies(DocumentFrequencySource::Documents(&corpus)).unwrap()
        );
        assert_eq!(seq.tf_idf(&corpus).unwrap(), par.tf_idf(&corpus).unwrap());
    }

    #[test]
    fn with_tokenizer_leaves_original_alone() {
        let analyzer = sequential();
        let words_only = analyzer.with_tokenizer(
            Tokenizer::builder()
                .tokenize(|text| Ok(text.split(',').map(str::to_owned).collect()))
                .build(),
        );
        let tfs = words_only.term_frequencies(&["x y,z"]).unwrap();
        assert!(tfs[0].contains_key("x y"));
        let tfs = analyzer.term_frequencies(&["x y,z"]).unwrap();
        assert!(tfs[0].contains_key("x"));
    }

    #[test]
    fn stage_error_aborts_the_call() {
        let failing = Tokenizer::builder()
            .postprocess(|tokens| {
                if tokens.iter().any(|t| t == "bad") {
                    Err("rejected token".into())
                } else {
                    Ok(tokens)
                }
            })
            .build();
        for analyzer in [sequential().with_tokenizer(failing.clone()), forced_parallel().with_tokenizer(failing)] {
            let err = analyzer.tf_idf(&["fine", "bad"]).unwrap_err();
            assert!(matches!(err, Error::Stage(_)));
            assert_eq!(err.to_string(), "rejected token");
            assert!(analyzer
                .document_frequencies(DocumentFrequencySource::Documents(&["bad"]))
                .is_err());
        }
    }
}
