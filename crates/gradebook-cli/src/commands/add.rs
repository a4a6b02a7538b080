//! The `gradebook add` command.

use anyhow::Result;

use gradebook_core::config::GradebookConfig;

use super::Session;

pub fn execute(config: &GradebookConfig, name: &str, id: &str, scores: [f64; 3]) -> Result<()> {
    let mut session = Session::open(&config.data_file)?;

    let [s1, s2, s3] = scores;
    session.store.add(name, id, s1, s2, s3)?;

    if let Some(record) = session.store.find(id) {
        println!(
            "Added {} ({}), final score {:.2}",
            record.name(),
            record.id(),
            record.final_score()
        );
    }

    session.save()
}
