//! The `gradebook remove` command.

use anyhow::Result;

use gradebook_core::config::GradebookConfig;

use super::Session;

pub fn execute(config: &GradebookConfig, id: &str) -> Result<()> {
    let mut session = Session::open(&config.data_file)?;
    let removed = session.store.remove(id)?;
    println!("Removed {} ({})", removed.name(), removed.id());
    session.save()
}
