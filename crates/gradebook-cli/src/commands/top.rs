//! The `gradebook top` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradebook_core::config::GradebookConfig;
use gradebook_core::statistics::top_n;

use super::Session;

pub fn execute(config: &GradebookConfig, count: Option<usize>) -> Result<()> {
    let count = count.unwrap_or(config.top_count);
    anyhow::ensure!(count >= 1, "count must be at least 1");

    let session = Session::open(&config.data_file)?;
    let ranked = top_n(session.store.records(), count);

    if ranked.is_empty() {
        println!("No registered students.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Rank", "Name", "ID", "Final"]);
    for (i, r) in ranked.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(r.name()),
            Cell::new(r.id()),
            Cell::new(format!("{:.2}", r.final_score())),
        ]);
    }

    println!("Top {} final score(s)", ranked.len());
    println!("{table}");
    Ok(())
}
