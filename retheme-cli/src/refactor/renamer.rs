use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::preview::PreviewDiff;
use super::replacer::{ReplacementMode, ReplacementTable};
use super::BatchSummary;
use crate::core::error::{RenameError, Result};
use crate::core::{FileOutcome, FileReport};

/// Everything a run needs, fixed before the first file is touched
#[derive(Debug, Clone)]
pub struct RenameConfig {
    /// Directory every target path is resolved against
    pub base_dir: PathBuf,

    /// Target files relative to `base_dir`, `/`-separated
    pub targets: Vec<String>,

    /// Literal token substitutions
    pub table: ReplacementTable,

    /// Whether changed files are written or only previewed
    pub mode: ReplacementMode,
}

impl RenameConfig {
    /// Join a `/`-separated relative path onto the base directory
    pub fn resolve(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|component| !component.is_empty())
            .fold(self.base_dir.clone(), |path, component| path.join(component))
    }
}

/// Applies a replacement table to a fixed list of files, one at a time
pub struct BatchRenamer {
    config: RenameConfig,
}

impl BatchRenamer {
    pub fn new(config: RenameConfig) -> Result<Self> {
        if !config.base_dir.is_dir() {
            return Err(RenameError::InvalidRoot(config.base_dir));
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &RenameConfig {
        &self.config
    }

    /// Process every target and collect the reports
    #[allow(dead_code)]
    pub fn run(&self) -> Vec<FileReport> {
        let mut reports = Vec::with_capacity(self.config.targets.len());
        self.run_with(|report, _| reports.push(report.clone()));
        reports
    }

    /// Process every target, handing each report to `sink` as soon as it exists
    ///
    /// A failure on one file never stops the batch. In preview mode the sink
    /// also receives the diff for files that would change.
    pub fn run_with<F>(&self, mut sink: F) -> BatchSummary
    where
        F: FnMut(&FileReport, Option<&PreviewDiff>),
    {
        let mut summary = BatchSummary::new();

        for relative in &self.config.targets {
            let path = self.config.resolve(relative);
            debug!("Processing {}", path.display());

            let (outcome, preview) = self.process_file(&path);
            summary.record(&outcome);

            let report = FileReport::new(path, outcome);
            sink(&report, preview.as_ref());
        }

        summary
    }

    fn process_file(&self, path: &Path) -> (FileOutcome, Option<PreviewDiff>) {
        if !path.exists() {
            return (FileOutcome::not_found(), None);
        }

        match self.rewrite_file(path) {
            Ok(result) => result,
            Err(e) => {
                warn!("Failed to process {}: {}", path.display(), e);
                (
                    FileOutcome::Failed {
                        reason: e.to_string(),
                    },
                    None,
                )
            }
        }
    }

    fn rewrite_file(&self, path: &Path) -> Result<(FileOutcome, Option<PreviewDiff>)> {
        let bytes = fs::read(path).map_err(RenameError::Read)?;
        let original = String::from_utf8(bytes).map_err(RenameError::Encoding)?;

        let substituted = self.config.table.apply(&original);

        // Only write if content changed
        if substituted.content == original {
            return Ok((FileOutcome::Unchanged, None));
        }

        let replacements = substituted.replacements;
        match self.config.mode {
            ReplacementMode::Preview => {
                let diff = PreviewDiff::new(path, &original, &substituted.content, replacements);
                Ok((FileOutcome::WouldUpdate { replacements }, Some(diff)))
            }
            ReplacementMode::Apply => {
                // Truncate and write in place so symlinks and hard links keep pointing at the file
                fs::write(path, &substituted.content).map_err(RenameError::Write)?;
                debug!("Replaced {} token(s) in {}", replacements, path.display());
                Ok((FileOutcome::Updated { replacements }, None))
            }
        }
    }
}
