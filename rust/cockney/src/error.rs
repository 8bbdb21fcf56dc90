use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug)]
pub enum CockneyError {
    /// The rhyme service could not be reached or answered with an error.
    /// Without rhymes the run cannot continue, so this is always fatal.
    #[error("Rhyme source unavailable while looking up '{word}': {reason}")]
    SourceUnavailable { word: String, reason: String },

    /// The bigram corpus could not be read or contained a malformed row
    #[error("Failed to load bigram corpus: {0}")]
    Corpus(String),

    /// An offline rhyme map was not a JSON object of word lists
    #[error("Failed to load rhyme map: {0}")]
    RhymeMap(String),
}

impl CockneyError {
    /// Whether the error came from the rhyme source rather than local data.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, CockneyError::SourceUnavailable { .. })
    }
}

impl From<csv_async::Error> for CockneyError {
    fn from(value: csv_async::Error) -> Self {
        CockneyError::Corpus(format!("{value}"))
    }
}

impl From<serde_json::Error> for CockneyError {
    fn from(value: serde_json::Error) -> Self {
        CockneyError::RhymeMap(format!("{value}"))
    }
}
