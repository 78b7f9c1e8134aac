mod http;
mod memory;

pub use http::HttpEntrySource;
pub use memory::StaticEntrySource;

use lexis_types::Entry;

/// Read-only provider of the full entry sequence
#[async_trait::async_trait]
pub trait EntrySource: Send + Sync {
    /// Fetch every entry, in source order
    async fn fetch_all(&self) -> Result<Vec<Entry>, SourceError>;

    /// Human readable location, used in logs and warnings
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("connection error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid dictionary document: {0}")]
    Decode(#[from] serde_json::Error),
}
