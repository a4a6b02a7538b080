//! The `gradebook list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde::Serialize;

use gradebook_core::config::GradebookConfig;
use gradebook_core::statistics::pass_fail_partition;
use gradebook_core::StudentRecord;

use super::Session;

/// JSON shape of a listed student.
#[derive(Serialize)]
struct RecordView<'a> {
    name: &'a str,
    id: &'a str,
    scores: [f64; 3],
    final_score: f64,
    passed: bool,
}

impl<'a> From<&'a StudentRecord> for RecordView<'a> {
    fn from(r: &'a StudentRecord) -> Self {
        Self {
            name: r.name(),
            id: r.id(),
            scores: r.scores(),
            final_score: r.final_score(),
            passed: r.passed(),
        }
    }
}

pub fn execute(config: &GradebookConfig, status: &str, format: &str) -> Result<()> {
    let session = Session::open(&config.data_file)?;
    let records = session.store.records();

    let (selected, label): (Vec<&StudentRecord>, &str) = match status {
        "all" => (records.iter().collect(), "registered"),
        "passed" => (pass_fail_partition(records).0, "passing"),
        "failed" => (pass_fail_partition(records).1, "failing"),
        other => anyhow::bail!("unknown status '{other}', expected all, passed, or failed"),
    };

    match format {
        "text" => {}
        "json" => {
            let views: Vec<RecordView> = selected.iter().map(|r| RecordView::from(*r)).collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
            return Ok(());
        }
        other => anyhow::bail!("unknown format '{other}', expected text or json"),
    }

    if selected.is_empty() {
        println!("No {label} students.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "#", "Name", "ID", "Partial 1", "Partial 2", "Partial 3", "Final", "Status",
    ]);
    for (i, r) in selected.iter().enumerate() {
        let [s1, s2, s3] = r.scores();
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(r.name()),
            Cell::new(r.id()),
            Cell::new(format!("{s1:.2}")),
            Cell::new(format!("{s2:.2}")),
            Cell::new(format!("{s3:.2}")),
            Cell::new(format!("{:.2}", r.final_score())),
            Cell::new(r.status_label()),
        ]);
    }

    println!("{table}");
    println!("Total: {} {label} student(s)", selected.len());
    Ok(())
}
