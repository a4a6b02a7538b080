//! The `gradebook validate` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::config::GradebookConfig;
use gradebook_core::storage::load_file;
use gradebook_core::RecordStore;

pub fn execute(config: &GradebookConfig, file: Option<PathBuf>) -> Result<()> {
    let path = file.unwrap_or_else(|| config.data_file.clone());

    let mut store = RecordStore::new();
    let Some(report) = load_file(&mut store, &path)? else {
        anyhow::bail!("data file not found: {}", path.display());
    };

    println!(
        "{}: {} valid record(s), {} rejected line(s)",
        path.display(),
        report.accepted,
        report.rejected
    );
    for issue in &report.issues {
        println!("  line {}: {}", issue.line, issue.error);
    }

    if report.rejected == 0 {
        println!("Data file valid.");
    }

    Ok(())
}
