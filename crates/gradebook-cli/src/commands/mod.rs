//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::Result;

use gradebook_core::storage::{load_file, save_file};
use gradebook_core::{RecordStore, StudentRecord};

pub mod add;
pub mod init;
pub mod list;
pub mod remove;
pub mod report;
pub mod show;
pub mod stats;
pub mod top;
pub mod update;
pub mod validate;

/// The store loaded from the data file, plus where to write it back.
pub struct Session {
    pub store: RecordStore,
    data_file: PathBuf,
}

impl Session {
    /// Load the data file. A missing file gives an empty roster.
    pub fn open(data_file: &Path) -> Result<Self> {
        let mut store = RecordStore::new();
        if let Some(report) = load_file(&mut store, data_file)? {
            if report.rejected > 0 {
                eprintln!(
                    "Warning: skipped {} malformed line(s) in {}",
                    report.rejected,
                    data_file.display()
                );
            }
        }
        tracing::debug!(records = store.len(), "opened {}", data_file.display());
        Ok(Self {
            store,
            data_file: data_file.to_path_buf(),
        })
    }

    /// Write the whole roster back to the data file.
    pub fn save(&self) -> Result<()> {
        save_file(&self.store, &self.data_file)?;
        println!("Changes saved to {}", self.data_file.display());
        Ok(())
    }
}

/// Print one student as a labelled block.
pub fn print_record(record: &StudentRecord) {
    let rule = "-".repeat(40);
    let [s1, s2, s3] = record.scores();
    println!("{rule}");
    println!("{:<11}{}", "Name:", record.name());
    println!("{:<11}{}", "ID:", record.id());
    println!("{:<11}{s1:.2}", "Partial 1:");
    println!("{:<11}{s2:.2}", "Partial 2:");
    println!("{:<11}{s3:.2}", "Partial 3:");
    println!("{:<11}{:.2}", "Final:", record.final_score());
    println!("{:<11}{}", "Status:", record.status_label());
    println!("{rule}");
}
