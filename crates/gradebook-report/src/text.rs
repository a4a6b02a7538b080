//! Plain-text report generator.

use std::path::Path;

use anyhow::Result;

use crate::{fmt_score, write_report, ClassReport};

const WIDTH: usize = 50;

/// Render the report as plain text.
pub fn generate_text(report: &ClassReport) -> String {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);
    let summary = &report.summary;
    let mut out = String::new();

    out.push_str(&format!("{heavy}\n     GENERAL STUDENT REPORT\n{heavy}\n\n"));
    out.push_str(&format!(
        "Generated: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("Total students: {}\n\n", summary.total));

    out.push_str(&format!("{light}\nSTUDENTS\n{light}\n"));
    for (i, r) in report.records.iter().enumerate() {
        let [s1, s2, s3] = r.scores();
        out.push_str(&format!("\nStudent {}:\n", i + 1));
        out.push_str(&format!("  Name: {}\n", r.name()));
        out.push_str(&format!("  ID: {}\n", r.id()));
        out.push_str(&format!("  Partial 1: {s1:.2}\n"));
        out.push_str(&format!("  Partial 2: {s2:.2}\n"));
        out.push_str(&format!("  Partial 3: {s3:.2}\n"));
        out.push_str(&format!("  Final: {:.2}\n", r.final_score()));
        out.push_str(&format!("  Status: {}\n", r.status_label()));
    }

    out.push_str(&format!("\n{light}\nCLASS STATISTICS\n{light}\n"));
    out.push_str(&format!("Mean: {:.2}\n", summary.mean));
    out.push_str(&format!("Standard deviation: {:.2}\n", summary.stddev));
    out.push_str(&format!(
        "Passed: {} ({:.1}%)\n",
        summary.passed,
        summary.pass_rate()
    ));
    out.push_str(&format!(
        "Failed: {} ({:.1}%)\n",
        summary.failed,
        summary.fail_rate()
    ));
    out.push_str(&format!("Highest final: {}\n", fmt_score(summary.max)));
    out.push_str(&format!("Lowest final: {}\n", fmt_score(summary.min)));
    out.push_str(&format!("\n{heavy}\n"));

    out
}

/// Write a plain-text report to a file.
pub fn write_text_report(report: &ClassReport, path: &Path) -> Result<()> {
    write_report(&generate_text(report), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_store;

    #[test]
    fn text_report_lists_students_and_statistics() {
        let store = sample_store();
        let report = ClassReport::build(store.records()).unwrap();
        let text = generate_text(&report);

        assert!(text.contains("Total students: 3"));
        assert!(text.contains("Name: Ana Ruiz"));
        assert!(text.contains("Final: 90.00"));
        assert!(text.contains("Status: FAILED"));
        assert!(text.contains("Passed: 2 (66.7%)"));
        assert!(text.contains("Failed: 1 (33.3%)"));
        assert!(text.contains("Highest final: 90.00"));
        assert!(text.contains("Lowest final: 55.00"));
        assert!(text.contains("Mean: 71.67"));
    }

    #[test]
    fn students_appear_in_collection_order() {
        let store = sample_store();
        let report = ClassReport::build(store.records()).unwrap();
        let text = generate_text(&report);
        let ana = text.find("A01").unwrap();
        let luis = text.find("A02").unwrap();
        let eva = text.find("A03").unwrap();
        assert!(ana < luis && luis < eva);
    }

    #[test]
    fn text_report_write_to_file() {
        let store = sample_store();
        let report = ClassReport::build(store.records()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/report.txt");

        write_text_report(&report, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(&"=".repeat(WIDTH)));
    }
}
