//! Vocabulary extraction and term ranking over computed results.

pub mod rank;
pub mod vocabulary;

pub use rank::{aggregate_scores, pick_terms, pick_terms_by, top_max_terms, top_n_terms, top_sum_terms};
pub use vocabulary::{vocabulary_of_df, vocabulary_of_idf, Vocabulary};
