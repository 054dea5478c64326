use crate::{
    frequency::{DocumentFrequency, TermFrequencyMap},
    idf::InverseDocumentFrequency,
};

/// Input of [`Analyzer::document_frequencies`](crate::Analyzer::document_frequencies)
///
/// Use [`DocumentFrequencySource::term_frequencies`] for the precomputed
/// variant; it fixes the unused document type parameter.
#[derive(Debug, Clone)]
pub enum DocumentFrequencySource<'a, D> {
    /// raw documents, tokenized on the way
    Documents(&'a [D]),
    /// output of `term_frequencies`, one map per document; not re-tokenized
    TermFrequencies(&'a [TermFrequencyMap]),
}

impl<'a> DocumentFrequencySource<'a, &'static str> {
    pub fn term_frequencies(term_frequencies: &'a [TermFrequencyMap]) -> Self {
        Self::TermFrequencies(term_frequencies)
    }
}

impl<'a, D> From<&'a [D]> for DocumentFrequencySource<'a, D>
where
    D: AsRef<str>,
{
    fn from(documents: &'a [D]) -> Self {
        Self::Documents(documents)
    }
}

/// Input of [`Analyzer::inverse_document_frequency`](crate::Analyzer::inverse_document_frequency)
#[derive(Debug, Clone)]
pub enum IdfSource<'a, D> {
    /// raw documents
    Documents(&'a [D]),
    /// document frequencies computed over the full corpus
    DocumentFrequencies(&'a DocumentFrequency),
}

impl<'a> IdfSource<'a, &'static str> {
    pub fn document_frequencies(df: &'a DocumentFrequency) -> Self {
        Self::DocumentFrequencies(df)
    }
}

impl<'a, D> From<&'a [D]> for IdfSource<'a, D>
where
    D: AsRef<str>,
{
    fn from(documents: &'a [D]) -> Self {
        Self::Documents(documents)
    }
}

/// Input of [`Analyzer::vocabulary`](crate::Analyzer::vocabulary)
///
/// The vocabulary limit applies to whatever value the source carries:
/// document counts for `Documents` and `DocumentFrequencies`, IDF values for
/// `InverseDocumentFrequencies`. See [`vocabulary_of_idf`](crate::select::vocabulary_of_idf).
#[derive(Debug, Clone)]
pub enum VocabularySource<'a, D> {
    Documents(&'a [D]),
    DocumentFrequencies(&'a DocumentFrequency),
    InverseDocumentFrequencies(&'a InverseDocumentFrequency),
}

impl<'a> VocabularySource<'a, &'static str> {
    pub fn document_frequencies(df: &'a DocumentFrequency) -> Self {
        Self::DocumentFrequencies(df)
    }

    pub fn inverse_document_frequencies(idf: &'a InverseDocumentFrequency) -> Self {
        Self::InverseDocumentFrequencies(idf)
    }
}

impl<'a, D> From<&'a [D]> for VocabularySource<'a, D>
where
    D: AsRef<str>,
{
    fn from(documents: &'a [D]) -> Self {
        Self::Documents(documents)
    }
}
