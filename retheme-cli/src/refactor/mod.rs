mod preview;
mod renamer;
mod replacer;
pub mod theme;

pub use renamer::{BatchRenamer, RenameConfig};
pub use replacer::{ReplacementMode, ReplacementTable};

use crate::core::FileOutcome;

/// Counters for a whole batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Total files listed
    pub files_scanned: usize,

    /// Files rewritten (or that would be, in preview mode)
    pub files_updated: usize,

    /// Files with no matching tokens
    pub files_unchanged: usize,

    /// Files not found on disk
    pub files_skipped: usize,

    /// Files that could not be processed
    pub files_failed: usize,

    /// Total token occurrences replaced
    pub replacements_made: usize,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &FileOutcome) {
        self.files_scanned += 1;
        match outcome {
            FileOutcome::Updated { replacements } | FileOutcome::WouldUpdate { replacements } => {
                self.files_updated += 1;
                self.replacements_made += replacements;
            }
            FileOutcome::Unchanged => self.files_unchanged += 1,
            FileOutcome::Skipped { .. } => self.files_skipped += 1,
            FileOutcome::Failed { .. } => self.files_failed += 1,
        }
    }
}
