use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::core::output::OutputWriter;
use crate::refactor::{theme, BatchRenamer, BatchSummary, ReplacementMode};

pub fn run(root: Option<PathBuf>, dry_run: bool, format: &crate::OutputFormat) -> Result<()> {
    let base_dir = match root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let mode = if dry_run {
        ReplacementMode::Preview
    } else {
        ReplacementMode::Apply
    };
    let output = OutputWriter::new(format);

    let renamer = BatchRenamer::new(theme::config(base_dir, mode))?;
    let summary = execute(&renamer, &output)?;

    if dry_run && summary.files_updated > 0 {
        info!("Dry run: no files were written. Run without --dry-run to apply changes");
    }

    Ok(())
}

/// Run the batch, printing each report as it arrives
///
/// Per-file failures are part of the summary, not an error.
fn execute(renamer: &BatchRenamer, output: &OutputWriter) -> Result<BatchSummary> {
    info!(
        "Renaming {} token(s) across {} file(s) under {}",
        renamer.config().table.len(),
        renamer.config().targets.len(),
        renamer.config().base_dir.display()
    );

    let mut write_failure = None;
    let summary = renamer.run_with(|report, preview| {
        if let Some(diff) = preview {
            output.write_preview(&diff.format_diff());
        }
        if let Err(e) = output.write_report(report) {
            write_failure.get_or_insert(e);
        }
    });

    if let Some(e) = write_failure {
        return Err(e);
    }

    info!(
        "Done: {} updated, {} unchanged, {} skipped, {} failed ({} replacement(s))",
        summary.files_updated,
        summary.files_unchanged,
        summary.files_skipped,
        summary.files_failed,
        summary.replacements_made
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RenameError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // A directory where a listed file should be makes that target unreadable
    fn project_with_one_bad_target() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("components/PostCard.tsx")).unwrap();
        fs::create_dir_all(temp.path().join("app")).unwrap();
        fs::write(temp.path().join("app/page.tsx"), "<main className=\"bg-dark-bg\" />").unwrap();
        temp
    }

    fn renamer(root: &Path, mode: ReplacementMode) -> BatchRenamer {
        BatchRenamer::new(theme::config(root.to_path_buf(), mode)).unwrap()
    }

    #[test]
    fn test_execute_summarizes_mixed_batch() {
        let temp = project_with_one_bad_target();
        let output = OutputWriter::new(&crate::OutputFormat::Text);

        let summary = execute(&renamer(temp.path(), ReplacementMode::Apply), &output).unwrap();

        assert_eq!(summary.files_scanned, theme::TARGET_FILES.len());
        assert_eq!(summary.files_failed, 1);
        assert_eq!(summary.files_updated, 1);
        assert_eq!(summary.replacements_made, 1);
        assert_eq!(summary.files_skipped, theme::TARGET_FILES.len() - 2);
    }

    #[test]
    fn test_run_succeeds_despite_failed_file() {
        let temp = project_with_one_bad_target();

        let result = run(Some(temp.path().to_path_buf()), false, &crate::OutputFormat::Json);

        assert!(result.is_ok());
        assert_eq!(
            fs::read_to_string(temp.path().join("app/page.tsx")).unwrap(),
            "<main className=\"bg-site-bg\" />"
        );
    }

    #[test]
    fn test_run_dry_run_writes_nothing() {
        let temp = project_with_one_bad_target();

        run(Some(temp.path().to_path_buf()), true, &crate::OutputFormat::Text).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("app/page.tsx")).unwrap(),
            "<main className=\"bg-dark-bg\" />"
        );
    }

    #[test]
    fn test_run_missing_root_is_fatal() {
        let temp = TempDir::new().unwrap();

        let err = run(Some(temp.path().join("missing")), false, &crate::OutputFormat::Text)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RenameError>(),
            Some(RenameError::InvalidRoot(_))
        ));
    }
}
