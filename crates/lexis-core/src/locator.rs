use lexis_types::Entry;

/// Index of the first pending entry, scanning from the start
pub fn find_next_pending(entries: &[Entry]) -> Option<usize> {
    entries.iter().position(|entry| entry.status.is_pending())
}
