//! gradebook-report — General class reports.
//!
//! Renders a snapshot of the roster and its class summary as plain text or
//! as a self-contained HTML page.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use gradebook_core::statistics::{summarize, ClassSummary};
use gradebook_core::StudentRecord;

pub mod html;
pub mod text;

/// Everything a rendered report shows, captured at one point in time.
#[derive(Debug, Clone, Serialize)]
pub struct ClassReport {
    /// When the snapshot was taken.
    pub generated_at: DateTime<Utc>,
    /// Records in collection order.
    pub records: Vec<StudentRecord>,
    /// Aggregate statistics over `records`.
    pub summary: ClassSummary,
}

impl ClassReport {
    /// Snapshot `records`. Fails if there are no students to report on.
    pub fn build(records: &[StudentRecord]) -> Result<Self> {
        anyhow::ensure!(
            !records.is_empty(),
            "no students registered, nothing to report"
        );
        Ok(Self {
            generated_at: Utc::now(),
            records: records.to_vec(),
            summary: summarize(records),
        })
    }
}

/// Write rendered report content, creating the parent directory if needed.
pub(crate) fn write_report(content: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write report to {}", path.display()))
}

/// Format an optional score for display.
pub(crate) fn fmt_score(score: Option<f64>) -> String {
    score.map_or_else(|| "-".to_string(), |s| format!("{s:.2}"))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roster_has_no_report() {
        let err = ClassReport::build(&[]).unwrap_err();
        assert!(err.to_string().contains("no students registered"));
    }

    #[test]
    fn report_carries_summary() {
        let store = test_support::sample_store();
        let report = ClassReport::build(store.records()).unwrap();
        assert_eq!(report.records.len(), 3);
        assert_eq!(report.summary.passed, 2);
        assert_eq!(report.summary.failed, 1);
    }

    #[test]
    fn score_formatting() {
        assert_eq!(fmt_score(Some(86.666)), "86.67");
        assert_eq!(fmt_score(None), "-");
    }
}
