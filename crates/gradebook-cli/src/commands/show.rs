//! The `gradebook show` and `gradebook analyze` commands.

use anyhow::Result;

use gradebook_core::config::GradebookConfig;
use gradebook_core::statistics::{standing, Position};
use gradebook_core::StoreError;

use super::{print_record, Session};

pub fn execute(config: &GradebookConfig, id: &str) -> Result<()> {
    let session = Session::open(&config.data_file)?;
    let record = session
        .store
        .find(id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
    print_record(record);
    Ok(())
}

pub fn analyze(config: &GradebookConfig, id: &str) -> Result<()> {
    let session = Session::open(&config.data_file)?;
    let record = session
        .store
        .find(id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
    print_record(record);

    let standing = standing(record, session.store.records());
    println!("Class mean: {:.2}", standing.class_mean);
    match standing.position {
        Position::Above => println!(
            "Above the class mean ({:+.2} points)",
            standing.difference
        ),
        Position::Below => println!(
            "Below the class mean ({:+.2} points)",
            standing.difference
        ),
        Position::AtMean => println!("At the class mean"),
    }
    Ok(())
}
