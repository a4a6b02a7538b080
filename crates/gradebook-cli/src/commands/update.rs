//! The `gradebook update` command.

use anyhow::Result;

use gradebook_core::config::GradebookConfig;
use gradebook_core::RecordPatch;

use super::{print_record, Session};

pub fn execute(config: &GradebookConfig, id: &str, patch: RecordPatch) -> Result<()> {
    anyhow::ensure!(
        !patch.is_empty(),
        "nothing to update: pass at least one of --name, --new-id, --score1, --score2, --score3"
    );

    let mut session = Session::open(&config.data_file)?;
    session.store.update(id, &patch)?;

    let current_id = patch.id.as_deref().unwrap_or(id);
    if let Some(record) = session.store.find(current_id) {
        println!("Updated student:");
        print_record(record);
    }

    session.save()
}
