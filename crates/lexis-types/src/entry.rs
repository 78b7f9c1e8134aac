use serde::{Deserialize, Serialize};

/// Workflow status of a single word record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntryStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "completado")]
    Completed,
}

impl EntryStatus {
    pub fn is_pending(self) -> bool {
        matches!(self, EntryStatus::Pending)
    }

    pub fn is_completed(self) -> bool {
        matches!(self, EntryStatus::Completed)
    }
}

/// One dictionary word record, as served by the remote document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Term being defined
    #[serde(rename = "palabra")]
    pub word: String,
    /// Grouping label shown next to the word
    #[serde(rename = "encabezado", default)]
    pub header: String,
    /// Definition or translation, empty until completed
    #[serde(rename = "información", default)]
    pub content: String,
    #[serde(rename = "estado")]
    pub status: EntryStatus,
}

impl Entry {
    pub fn pending(word: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            header: header.into(),
            content: String::new(),
            status: EntryStatus::Pending,
        }
    }

    pub fn completed(
        word: impl Into<String>,
        header: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            header: header.into(),
            content: content.into(),
            status: EntryStatus::Completed,
        }
    }

    /// Label used in the completed-entry selection list
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.word, self.header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_document_keys() {
        let json = r#"[
            {"palabra": "λόγος", "encabezado": "Λ", "información": "", "estado": "pendiente"},
            {"palabra": "φίλος", "encabezado": "Φ", "información": "friend", "estado": "completado"}
        ]"#;

        let entries: Vec<Entry> = serde_json::from_str(json).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word, "λόγος");
        assert_eq!(entries[0].status, EntryStatus::Pending);
        assert_eq!(entries[1].header, "Φ");
        assert_eq!(entries[1].content, "friend");
        assert_eq!(entries[1].status, EntryStatus::Completed);
    }

    #[test]
    fn missing_header_and_content_default_to_empty() {
        let json = r#"{"palabra": "ἀγαθός", "estado": "pendiente"}"#;

        let entry: Entry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.header, "");
        assert_eq!(entry.content, "");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let json = r#"{"palabra": "x", "estado": "borrador"}"#;

        assert!(serde_json::from_str::<Entry>(json).is_err());
    }

    #[test]
    fn serializes_back_to_source_keys() {
        let entry = Entry::completed("a", "A", "x");

        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["palabra"], "a");
        assert_eq!(value["información"], "x");
        assert_eq!(value["estado"], "completado");
    }

    #[test]
    fn display_label_joins_word_and_header() {
        assert_eq!(Entry::pending("λόγος", "Λ").display_label(), "λόγος (Λ)");
    }
}
