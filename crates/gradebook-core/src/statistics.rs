//! Class-wide statistics over a snapshot of student records.
//!
//! Every function here takes a read-only slice and never mutates it. Derived
//! values are rounded with [`round2`] exactly once, where they are computed.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::{round2, StudentRecord};

/// Mean of the final scores, rounded to two decimals. `0.0` when empty.
pub fn mean(records: &[StudentRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(StudentRecord::final_score).sum();
    round2(sum / records.len() as f64)
}

/// Population standard deviation of the final scores about [`mean`],
/// rounded to two decimals. `0.0` when empty.
pub fn stddev(records: &[StudentRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let mean = mean(records);
    let sum_squares: f64 = records
        .iter()
        .map(|r| (r.final_score() - mean).powi(2))
        .sum();
    round2((sum_squares / records.len() as f64).sqrt())
}

/// Split records into `(passed, failed)`, keeping relative order in each.
pub fn pass_fail_partition(
    records: &[StudentRecord],
) -> (Vec<&StudentRecord>, Vec<&StudentRecord>) {
    records.iter().partition(|r| r.passed())
}

/// Highest and lowest final score as `(max, min)`, or `None` when empty.
pub fn extremes(records: &[StudentRecord]) -> Option<(f64, f64)> {
    let first = records.first()?.final_score();
    Some(records.iter().skip(1).fold((first, first), |(max, min), r| {
        (max.max(r.final_score()), min.min(r.final_score()))
    }))
}

/// The `min(n, len)` best records by final score, highest first.
///
/// Equal scores keep their insertion order.
pub fn top_n(records: &[StudentRecord], n: usize) -> Vec<&StudentRecord> {
    let mut ranked: Vec<&StudentRecord> = records.iter().collect();
    // `sort_by` is stable, which is what breaks ties.
    ranked.sort_by(|a, b| {
        b.final_score()
            .partial_cmp(&a.final_score())
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}

/// Where a student sits relative to the class mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Above,
    AtMean,
    Below,
}

/// A single student compared against the class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub class_mean: f64,
    /// Final score minus class mean, rounded to two decimals.
    pub difference: f64,
    pub position: Position,
}

/// Differences no larger than this count as being at the mean.
const AT_MEAN_TOLERANCE: f64 = 0.01;

/// Compare `record` with the mean of `records`.
pub fn standing(record: &StudentRecord, records: &[StudentRecord]) -> Standing {
    let class_mean = mean(records);
    let raw = record.final_score() - class_mean;
    let position = if raw > AT_MEAN_TOLERANCE {
        Position::Above
    } else if raw < -AT_MEAN_TOLERANCE {
        Position::Below
    } else {
        Position::AtMean
    };
    Standing {
        class_mean,
        difference: round2(raw),
        position,
    }
}

/// Aggregate statistics for the whole class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Number of students.
    pub total: usize,
    /// Mean final score.
    pub mean: f64,
    /// Population standard deviation of final scores.
    pub stddev: f64,
    /// Students at or above the pass threshold.
    pub passed: usize,
    /// Students below the pass threshold.
    pub failed: usize,
    /// Highest final score, if any students exist.
    pub max: Option<f64>,
    /// Lowest final score, if any students exist.
    pub min: Option<f64>,
}

impl ClassSummary {
    /// Share of students who passed, as a percentage. `0.0` when empty.
    pub fn pass_rate(&self) -> f64 {
        percentage(self.passed, self.total)
    }

    /// Share of students who failed, as a percentage. `0.0` when empty.
    pub fn fail_rate(&self) -> f64 {
        percentage(self.failed, self.total)
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

/// Compute the class summary from a snapshot.
pub fn summarize(records: &[StudentRecord]) -> ClassSummary {
    let passed = records.iter().filter(|r| r.passed()).count();
    let extremes = extremes(records);
    ClassSummary {
        total: records.len(),
        mean: mean(records),
        stddev: stddev(records),
        passed,
        failed: records.len() - passed,
        max: extremes.map(|(max, _)| max),
        min: extremes.map(|(_, min)| min),
    }
}
