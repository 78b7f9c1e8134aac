use lexis_source::EntrySource;
use lexis_types::{CurrentEntry, Entry, EntryStatus, LoadState, SessionView};
use uuid::Uuid;

use crate::error::{LoadFailure, SessionError};
use crate::locator::find_next_pending;
use crate::lookup::{completed_options, find_completed_by_word};

/// Outcome of a session operation, consumed by the presentation layer
#[derive(Debug)]
pub enum SessionEvent {
    Loaded { count: usize },
    LoadFailed(LoadFailure),
    /// `initialize` ran before; nothing was fetched
    AlreadyInitialized,
    Committed {
        index: usize,
        word: String,
        next_pending: Option<usize>,
    },
    /// Commit requested with no entry under the cursor
    NothingPending,
    Reopened { index: usize, word: String },
}

impl SessionEvent {
    /// Whether the view changed and should be redrawn
    pub fn requires_render(&self) -> bool {
        matches!(
            self,
            SessionEvent::Loaded { .. }
                | SessionEvent::LoadFailed(_)
                | SessionEvent::Committed { .. }
                | SessionEvent::Reopened { .. }
        )
    }
}

/// Per-session, in-memory copy of the dictionary and the edit form state.
///
/// Nothing here is ever written back to the source: committed definitions
/// live only as long as the session.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    entries: Vec<Entry>,
    load_state: LoadState,
    /// First pending entry, recomputed after every mutation
    next_pending: Option<usize>,
    /// Completed entry reopened for revision, takes precedence over `next_pending`
    reopened: Option<usize>,
    buffer: String,
    /// Bumped whenever the session itself loads text into the buffer
    buffer_revision: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            entries: Vec::new(),
            load_state: LoadState::NotAttempted,
            next_pending: None,
            reopened: None,
            buffer: String::new(),
            buffer_revision: 0,
        }
    }

    /// Session over an already fetched sequence
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        let mut session = Self::new();
        session.next_pending = find_next_pending(&entries);
        session.entries = entries;
        session.load_state = LoadState::Loaded;
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn next_pending(&self) -> Option<usize> {
        self.next_pending
    }

    pub fn reopened(&self) -> Option<usize> {
        self.reopened
    }

    /// Entry shown in the edit form; `None` means nothing to edit
    pub fn cursor(&self) -> Option<usize> {
        self.reopened.or(self.next_pending)
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Fetch the sequence once per session. Later calls do nothing.
    pub async fn initialize(&mut self, source: &dyn EntrySource) -> SessionEvent {
        if self.load_state != LoadState::NotAttempted {
            tracing::debug!(session = %self.id, "Session already initialized");
            return SessionEvent::AlreadyInitialized;
        }

        self.load(source).await
    }

    /// Unconditional fetch. A failure leaves an empty sequence and is final
    /// for the session; there is no retry. Either way both pointers are
    /// reset against the new sequence.
    async fn load(&mut self, source: &dyn EntrySource) -> SessionEvent {
        let location = source.describe();
        tracing::info!(session = %self.id, "Loading entries from {}", location);

        match source.fetch_all().await {
            Ok(entries) => {
                let count = entries.len();
                self.entries = entries;
                self.load_state = LoadState::Loaded;
                self.reopened = None;
                self.next_pending = find_next_pending(&self.entries);
                tracing::info!(session = %self.id, "Loaded {} entries", count);
                SessionEvent::Loaded { count }
            }
            Err(source) => {
                self.entries = Vec::new();
                self.load_state = LoadState::Failed;
                self.next_pending = None;
                self.reopened = None;
                let failure = LoadFailure { location, source };
                tracing::error!(session = %self.id, "{}", failure);
                SessionEvent::LoadFailed(failure)
            }
        }
    }

    /// Store `text` on the entry under the cursor, mark it completed and
    /// move on to the next pending entry.
    ///
    /// The change is in-memory only; the remote document is never updated.
    pub fn commit(&mut self, text: impl Into<String>) -> SessionEvent {
        let Some(index) = self.cursor() else {
            tracing::info!(session = %self.id, "Commit with nothing pending ignored");
            return SessionEvent::NothingPending;
        };

        let entry = &mut self.entries[index];
        entry.content = text.into();
        entry.status = EntryStatus::Completed;
        let word = entry.word.clone();

        self.buffer.clear();
        self.reopened = None;
        self.next_pending = find_next_pending(&self.entries);

        tracing::info!(
            session = %self.id,
            "Committed '{}' (index {}), next pending: {:?}",
            word,
            index,
            self.next_pending
        );

        SessionEvent::Committed {
            index,
            word,
            next_pending: self.next_pending,
        }
    }

    /// Put a completed entry back into the edit form with its current content
    pub fn edit_existing(&mut self, index: usize) -> Result<SessionEvent, SessionError> {
        let entry = self
            .entries
            .get(index)
            .ok_or(SessionError::InvalidIndex(index))?;

        if !entry.status.is_completed() {
            return Err(SessionError::NotCompleted(index));
        }

        let word = entry.word.clone();
        self.buffer = entry.content.clone();
        self.buffer_revision += 1;
        self.reopened = Some(index);

        tracing::info!(session = %self.id, "Reopened '{}' (index {})", word, index);
        Ok(SessionEvent::Reopened { index, word })
    }

    /// `edit_existing` by word instead of index
    pub fn edit_existing_word(&mut self, word: &str) -> Result<SessionEvent, SessionError> {
        let index = find_completed_by_word(&self.entries, word)
            .ok_or_else(|| SessionError::UnknownWord(word.trim().to_string()))?;
        self.edit_existing(index)
    }

    pub fn completed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.status.is_completed())
            .count()
    }

    pub fn view(&self) -> SessionView {
        let current = self.cursor().map(|index| {
            let entry = &self.entries[index];
            CurrentEntry {
                index,
                word: entry.word.clone(),
                header: entry.header.clone(),
                reopened: self.reopened == Some(index),
            }
        });

        SessionView {
            load_state: self.load_state,
            current,
            buffer: self.buffer.clone(),
            buffer_revision: self.buffer_revision,
            completed: completed_options(&self.entries),
            completed_count: self.completed_count(),
            total: self.entries.len(),
        }
    }
}
