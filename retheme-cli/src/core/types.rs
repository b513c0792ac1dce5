use serde::Serialize;
use std::path::PathBuf;

/// What happened to a single target file during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Tokens were replaced and the file was rewritten
    Updated { replacements: usize },

    /// Tokens would be replaced (dry-run, nothing written)
    WouldUpdate { replacements: usize },

    /// File exists but contains none of the old tokens
    Unchanged,

    /// File is not on disk
    Skipped { reason: SkipReason },

    /// Reading, decoding or writing the file failed
    Failed { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NotFound,
}

impl FileOutcome {
    pub fn not_found() -> Self {
        FileOutcome::Skipped {
            reason: SkipReason::NotFound,
        }
    }
}

/// Outcome of one file, tagged with the resolved path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn new(path: PathBuf, outcome: FileOutcome) -> Self {
        Self { path, outcome }
    }

    /// Human-readable status line for this file
    pub fn status_line(&self) -> String {
        let path = self.path.display();
        match &self.outcome {
            FileOutcome::Updated { .. } => format!("Updated {}", path),
            FileOutcome::WouldUpdate { .. } => format!("Would update {}", path),
            FileOutcome::Unchanged => format!("No changes in {}", path),
            FileOutcome::Skipped { .. } => format!("Skipping {} (not found)", path),
            FileOutcome::Failed { reason } => format!("Error processing {}: {}", path, reason),
        }
    }
}
