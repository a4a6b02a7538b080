//! Reading and writing the data file.
//!
//! The store itself never touches the filesystem. These helpers move its
//! encoded text to and from disk and attach the path to any I/O error.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

use crate::store::{LoadReport, RecordStore};

/// Load the data file at `path` into `store`.
///
/// Returns `Ok(None)` if the file does not exist, leaving the store as it
/// was. Malformed lines are reported in the returned `LoadReport`, not as
/// errors.
pub fn load_file(store: &mut RecordStore, path: &Path) -> Result<Option<LoadReport>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("no data file at {}, starting empty", path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read data file: {}", path.display()))
        }
    };

    let report = store.load_from(&content);
    tracing::info!(
        accepted = report.accepted,
        rejected = report.rejected,
        "loaded {}",
        path.display()
    );
    Ok(Some(report))
}

/// Write every record in `store` to `path`, replacing its contents.
///
/// An empty store produces an empty file.
pub fn save_file(store: &RecordStore, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, store.save_to())
        .with_context(|| format!("failed to write data file: {}", path.display()))?;
    tracing::info!(records = store.len(), "saved {}", path.display());
    Ok(())
}
