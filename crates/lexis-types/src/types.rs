use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Commit the given text to the entry under the cursor
    SubmitEdit(String),
    /// Reopen a completed entry by sequence index
    SelectCompleted(usize),
    /// Reopen a completed entry by its word
    SelectCompletedWord(String),
    /// Keep the session's edit buffer in step with the form draft
    UpdateBuffer(String),
    RequestRender,
    Quit,
    Render(SessionView),
    Notice(Notice),
    BackendReady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
}

/// Transient, user-visible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadState {
    #[default]
    NotAttempted,
    Loaded,
    Failed,
}

/// Entry currently shown in the edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentEntry {
    pub index: usize,
    pub word: String,
    pub header: String,
    /// True when a completed entry was reopened for revision
    pub reopened: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedOption {
    pub index: usize,
    pub label: String,
}

/// Read-only snapshot handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionView {
    pub load_state: LoadState,
    pub current: Option<CurrentEntry>,
    pub buffer: String,
    /// Changes only when the session loads text into the buffer itself
    pub buffer_revision: u64,
    pub completed: Vec<CompletedOption>,
    pub completed_count: usize,
    pub total: usize,
}

impl SessionView {
    /// Loaded, and nothing left to define
    pub fn all_completed(&self) -> bool {
        self.load_state == LoadState::Loaded && self.current.is_none()
    }
}
