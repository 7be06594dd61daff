//! Rendering and writing of the final report.

mod json;
mod text;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use dnscheck_common::models::Report;

use crate::commands::OutputFormat;

pub fn render(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => text::render(report).context("rendering text report"),
        OutputFormat::Json => json::render(report).context("serializing report"),
    }
}

/// Writes to `output` when given, stdout otherwise.
pub fn write(content: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use chrono::Local;
    use dnscheck_common::models::Summary;

    fn empty_report() -> Report {
        let summary = Summary {
            total: 0,
            successful: 0,
            failed: 0,
            success_rate: None,
            average_latency: None,
            categories: BTreeMap::new(),
        };
        Report::new(Local::now(), Vec::new(), summary)
    }

    #[test]
    fn report_is_written_to_file() {
        let name = format!("dnscheck-report-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        let content = render(&empty_report(), OutputFormat::Json).unwrap();

        write(&content, Some(&path)).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(written, content);
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let path = Path::new("/definitely/not/here/report.txt");
        let err = write("data", Some(path)).unwrap_err();
        assert!(err.to_string().contains("report.txt"));
    }
}
