//! The `gradebook stats` command.

use anyhow::Result;

use gradebook_core::config::GradebookConfig;
use gradebook_core::statistics::summarize;

use super::Session;

pub fn execute(config: &GradebookConfig, format: &str) -> Result<()> {
    let session = Session::open(&config.data_file)?;
    let summary = summarize(session.store.records());

    match format {
        "text" => {}
        "json" => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }
        other => anyhow::bail!("unknown format '{other}', expected text or json"),
    }

    if summary.total == 0 {
        println!("No registered students.");
        return Ok(());
    }

    println!("Students:           {}", summary.total);
    println!("Mean:               {:.2}", summary.mean);
    println!("Standard deviation: {:.2}", summary.stddev);
    println!(
        "Passed:             {} ({:.1}%)",
        summary.passed,
        summary.pass_rate()
    );
    println!(
        "Failed:             {} ({:.1}%)",
        summary.failed,
        summary.fail_rate()
    );
    if let (Some(max), Some(min)) = (summary.max, summary.min) {
        println!("Highest final:      {max:.2}");
        println!("Lowest final:       {min:.2}");
    }
    Ok(())
}
