use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lexis_types::Entry;

use crate::{EntrySource, SourceError};

/// In-memory source, for offline sessions and tests
pub struct StaticEntrySource {
    entries: Vec<Entry>,
    fail_with_status: Option<u16>,
    fetches: AtomicUsize,
}

impl StaticEntrySource {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            fail_with_status: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Source that always answers with the given HTTP status
    pub fn failing(status: u16) -> Self {
        Self {
            entries: Vec::new(),
            fail_with_status: Some(status),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of times `fetch_all` has been called
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntrySource for StaticEntrySource {
    async fn fetch_all(&self) -> Result<Vec<Entry>, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.fail_with_status {
            Some(status) => Err(SourceError::Status(status)),
            None => Ok(self.entries.clone()),
        }
    }

    fn describe(&self) -> String {
        format!("memory ({} entries)", self.entries.len())
    }
}
