pub mod entry;
pub mod types;

pub use entry::{Entry, EntryStatus};
pub use types::*;
