use lexis_types::{CompletedOption, Entry};
use unicode_normalization::UnicodeNormalization;

/// Completed entries as selection options, in sequence order
pub fn completed_options(entries: &[Entry]) -> Vec<CompletedOption> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.status.is_completed())
        .map(|(index, entry)| CompletedOption {
            index,
            label: entry.display_label(),
        })
        .collect()
}

/// First completed entry whose word matches, ignoring Unicode composition
/// differences and surrounding whitespace
pub fn find_completed_by_word(entries: &[Entry], word: &str) -> Option<usize> {
    let wanted = normalize(word);
    entries
        .iter()
        .position(|entry| entry.status.is_completed() && normalize(&entry.word) == wanted)
}

fn normalize(text: &str) -> String {
    text.trim().nfc().collect()
}
