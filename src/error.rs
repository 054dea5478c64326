/// Boxed error returned by caller-supplied tokenizer stages
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type of caller-supplied tokenizer stages
pub type StageResult<T> = std::result::Result<T, BoxError>;

/// Errors raised while analyzing a corpus
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A preprocess, tokenize or postprocess stage failed.
    /// The caller's error is passed through as is.
    #[error(transparent)]
    Stage(BoxError),
    /// A split pattern could not be compiled
    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
