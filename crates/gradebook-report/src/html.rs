//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined.

use anyhow::Result;
use std::path::Path;

use gradebook_core::model::PASS_THRESHOLD;
use gradebook_core::StudentRecord;

use crate::{fmt_score, write_report, ClassReport};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML report.
pub fn generate_html(report: &ClassReport) -> String {
    let summary = &report.summary;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("");
    html.push_str("<title>gradebook report</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>General student report</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">{} students | generated {}</p>\n",
        summary.total,
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Summary dashboard
    html.push_str("<section>\n");
    html.push_str("<h2>Class statistics</h2>\n");
    html.push_str("<table>\n");
    html.push_str("<thead><tr><th>Mean</th><th>Std. deviation</th><th>Passed</th><th>Failed</th><th>Highest</th><th>Lowest</th></tr></thead>\n");
    html.push_str(&format!(
        "<tbody><tr><td>{:.2}</td><td>{:.2}</td><td>{} ({:.1}%)</td><td>{} ({:.1}%)</td><td>{}</td><td>{}</td></tr></tbody>\n",
        summary.mean,
        summary.stddev,
        summary.passed,
        summary.pass_rate(),
        summary.failed,
        summary.fail_rate(),
        fmt_score(summary.max),
        fmt_score(summary.min),
    ));
    html.push_str("</table>\n");
    html.push_str(&generate_bar_chart(&report.records));
    html.push_str("</section>\n");

    // Roster
    html.push_str("<section>\n");
    html.push_str("<h2>Students</h2>\n");
    html.push_str("<table id=\"results\">\n");
    html.push_str("<thead><tr><th onclick=\"sortTable(0)\">Name</th><th onclick=\"sortTable(1)\">ID</th><th onclick=\"sortTable(2)\">Partial 1</th><th onclick=\"sortTable(3)\">Partial 2</th><th onclick=\"sortTable(4)\">Partial 3</th><th onclick=\"sortTable(5)\">Final</th><th onclick=\"sortTable(6)\">Status</th></tr></thead>\n");
    html.push_str("<tbody>\n");

    for r in &report.records {
        let class = if r.passed() { "pass" } else { "fail" };
        let [s1, s2, s3] = r.scores();
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{}</td></tr>\n",
            class,
            html_escape(r.name()),
            html_escape(r.id()),
            s1,
            s2,
            s3,
            r.final_score(),
            r.status_label(),
        ));
    }

    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section>\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(report).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    // JavaScript for sorting
    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &ClassReport, path: &Path) -> Result<()> {
    write_report(&generate_html(report), path)
}

/// One horizontal bar per student, scaled to a final score of 100.
fn generate_bar_chart(records: &[StudentRecord]) -> String {
    let bar_height = 24;
    let max_width = 400;
    let padding = 8;
    let label_width = 200;

    let total_height = records.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, r) in records.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let score = r.final_score();
        let width = (score / 100.0 * max_width as f64) as usize;

        let color = if score >= 90.0 {
            "#22c55e"
        } else if score >= PASS_THRESHOLD {
            "#eab308"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(r.name())
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{:.2}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            score
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1.5rem; color: #1f2937; }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid #d1d5db; padding: 0.4rem 0.8rem; text-align: left; }
th { background: #f3f4f6; }
#results th { cursor: pointer; }
tr.pass td:last-child { color: #15803d; font-weight: bold; }
tr.fail td:last-child { color: #b91c1c; font-weight: bold; }
pre { overflow-x: auto; padding: 1rem; background: #f3f4f6; }
"#;

// Columns 2-5 hold scores and sort numerically.
const JS: &str = r#"
function sortTable(col) {
  const table = document.getElementById('results');
  const tbody = table.tBodies[0];
  const desc = table.dataset.sortCol == col && table.dataset.sortDir != 'desc';
  const key = r => r.cells[col].textContent;
  const rows = Array.from(tbody.rows).sort((a, b) =>
    col >= 2 && col <= 5 ? key(a) - key(b) : key(a).localeCompare(key(b)));
  if (desc) rows.reverse();
  table.dataset.sortCol = col;
  table.dataset.sortDir = desc ? 'desc' : 'asc';
  tbody.append(...rows);
}
"#;
