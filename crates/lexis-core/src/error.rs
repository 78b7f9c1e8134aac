use lexis_source::SourceError;

/// The one-time fetch did not produce a usable sequence
#[derive(Debug, thiserror::Error)]
#[error("could not load entries from {location}: {source}")]
pub struct LoadFailure {
    pub location: String,
    #[source]
    pub source: SourceError,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no entry at index {0}")]
    InvalidIndex(usize),

    #[error("entry {0} is still pending")]
    NotCompleted(usize),

    #[error("no completed entry named '{0}'")]
    UnknownWord(String),
}
