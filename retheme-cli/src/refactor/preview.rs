use similar::{ChangeTag, TextDiff};
use std::path::{Path, PathBuf};

/// Preview of the pending changes in a single file
#[derive(Debug, Clone)]
pub struct PreviewDiff {
    /// File path
    pub file_path: PathBuf,

    /// Number of token occurrences that would be replaced
    pub num_changes: usize,

    /// Number of lines that would differ
    pub lines_changed: usize,

    /// Unified diff of original -> updated content
    pub unified: String,
}

impl PreviewDiff {
    pub fn new(file_path: &Path, original: &str, updated: &str, num_changes: usize) -> Self {
        let diff = TextDiff::from_lines(original, updated);

        let lines_changed = diff
            .iter_all_changes()
            .filter(|change| change.tag() == ChangeTag::Insert)
            .count();

        let old_label = format!("a/{}", file_path.display());
        let new_label = format!("b/{}", file_path.display());
        let unified = diff
            .unified_diff()
            .context_radius(2)
            .header(&old_label, &new_label)
            .to_string();

        Self {
            file_path: file_path.to_path_buf(),
            num_changes,
            lines_changed,
            unified,
        }
    }

    /// Generate a human-readable diff output
    pub fn format_diff(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("📝 {}\n", self.file_path.display()));
        output.push_str(&format!(
            "   {} replacement{} on {} line{}\n\n",
            self.num_changes,
            if self.num_changes == 1 { "" } else { "s" },
            self.lines_changed,
            if self.lines_changed == 1 { "" } else { "s" }
        ));
        output.push_str(&self.unified);
        if !self.unified.ends_with('\n') {
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_diff_format() {
        let original = "<div>\n  <p className=\"text-dark-text\">hi</p>\n</div>\n";
        let updated = "<div>\n  <p className=\"text-site-text\">hi</p>\n</div>\n";

        let diff = PreviewDiff::new(Path::new("components/Header.tsx"), original, updated, 1);
        assert_eq!(diff.lines_changed, 1);

        let formatted = diff.format_diff();
        assert!(formatted.contains("components/Header.tsx"));
        assert!(formatted.contains("1 replacement on 1 line"));
        assert!(formatted.contains("-  <p className=\"text-dark-text\">hi</p>"));
        assert!(formatted.contains("+  <p className=\"text-site-text\">hi</p>"));
    }

    #[test]
    fn test_identical_content_has_no_changed_lines() {
        let diff = PreviewDiff::new(Path::new("a.tsx"), "same\n", "same\n", 0);
        assert_eq!(diff.lines_changed, 0);
    }
}
