use crate::core::types::FileReport;
use anyhow::Result;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: &crate::OutputFormat) -> Self {
        let format = match format {
            crate::OutputFormat::Text => OutputFormat::Text,
            crate::OutputFormat::Json => OutputFormat::Json,
        };
        Self { format }
    }

    /// Print one file's outcome as soon as it is known
    pub fn write_report(&self, report: &FileReport) -> Result<()> {
        println!("{}", self.render_report(report)?);
        Ok(())
    }

    /// Print a dry-run diff (text format only; JSON carries counts instead)
    pub fn write_preview(&self, diff: &str) {
        if let OutputFormat::Text = self.format {
            print!("{}", diff);
        }
    }

    fn render_report(&self, report: &FileReport) -> Result<String> {
        Ok(match self.format {
            OutputFormat::Text => report.status_line(),
            // One object per line so the stream stays parseable as it is written
            OutputFormat::Json => serde_json::to_string(report)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FileOutcome;
    use std::path::PathBuf;

    #[test]
    fn test_render_text_report() {
        let writer = OutputWriter {
            format: OutputFormat::Text,
        };
        let report = FileReport::new(PathBuf::from("components/PostCard.tsx"), FileOutcome::Unchanged);

        assert_eq!(
            writer.render_report(&report).unwrap(),
            "No changes in components/PostCard.tsx"
        );
    }

    #[test]
    fn test_render_json_report_is_single_line() {
        let writer = OutputWriter {
            format: OutputFormat::Json,
        };
        let report = FileReport::new(
            PathBuf::from("components/PostCard.tsx"),
            FileOutcome::Updated { replacements: 4 },
        );

        let line = writer.render_report(&report).unwrap();
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["path"], "components/PostCard.tsx");
        assert_eq!(value["outcome"]["status"], "updated");
        assert_eq!(value["outcome"]["replacements"], 4);
    }
}
