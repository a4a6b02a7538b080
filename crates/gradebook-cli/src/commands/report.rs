//! The `gradebook report` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::config::GradebookConfig;
use gradebook_report::html::write_html_report;
use gradebook_report::text::write_text_report;
use gradebook_report::ClassReport;

use super::Session;

pub fn execute(config: &GradebookConfig, output: Option<PathBuf>, format: &str) -> Result<()> {
    let session = Session::open(&config.data_file)?;
    let report = ClassReport::build(session.store.records())?;
    let path = output.unwrap_or_else(|| config.report_file.clone());

    match format {
        "text" => write_text_report(&report, &path)?,
        "html" => write_html_report(&report, &path)?,
        other => anyhow::bail!("unknown format '{other}', expected text or html"),
    }

    println!(
        "Report for {} student(s) written to {}",
        report.summary.total,
        path.display()
    );
    Ok(())
}
