//! The `gradebook init` command.

use std::path::Path;

use anyhow::Result;

use gradebook_core::config::GradebookConfig;

pub fn execute(config: &GradebookConfig) -> Result<()> {
    // Create gradebook.toml
    if Path::new("gradebook.toml").exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write("gradebook.toml", SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    // Create an empty data file
    let data_file = &config.data_file;
    if data_file.exists() {
        println!("{} already exists, skipping.", data_file.display());
    } else {
        if let Some(parent) = data_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(data_file, "")?;
        println!("Created {}", data_file.display());
    }

    println!("\nNext steps:");
    println!("  1. Run: gradebook add --name \"Ana Ruiz\" --id A01 --score1 90 --score2 85 --score3 95");
    println!("  2. Run: gradebook list");
    println!("  3. Run: gradebook report");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# Flat file with one student per line: name|id|score1|score2|score3
data_file = "students.txt"

# Default output of `gradebook report`
report_file = "report.txt"

# Default number of students shown by `gradebook top`
top_count = 3
"#;
