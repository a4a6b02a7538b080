//! Pipe-delimited flat-file encoding.
//!
//! One record per line in the fixed order `name|id|score1|score2|score3`.
//! There is no header, and the final score is never written; it is
//! recomputed when a line is decoded.

use crate::error::LineError;
use crate::model::StudentRecord;

/// Field separator.
pub const DELIMITER: char = '|';

const FIELD_COUNT: usize = 5;

/// Decode one line into a validated record.
///
/// The line is trimmed first; individual fields are trimmed before parsing.
/// Duplicate ids are not detected here since that needs the whole store.
pub fn decode_line(line: &str) -> Result<StudentRecord, LineError> {
    let fields: Vec<&str> = line.trim().split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(LineError::FieldCount(fields.len()));
    }

    let mut scores = [0.0; 3];
    for (i, raw) in fields[2..].iter().enumerate() {
        let raw = raw.trim();
        scores[i] = raw.parse::<f64>().map_err(|_| LineError::InvalidScore {
            index: i + 1,
            raw: raw.to_string(),
        })?;
    }

    Ok(StudentRecord::new(fields[0], fields[1], scores)?)
}

/// Encode a record as one line, without the trailing newline.
pub fn encode_record(record: &StudentRecord) -> String {
    let [s1, s2, s3] = record.scores();
    format!(
        "{name}{d}{id}{d}{s1:.2}{d}{s2:.2}{d}{s3:.2}",
        name = record.name(),
        id = record.id(),
        d = DELIMITER,
    )
}

/// Encode records as newline-terminated lines, skipping any that fail
/// validation.
pub fn encode_all<'a>(records: impl IntoIterator<Item = &'a StudentRecord>) -> String {
    let mut out = String::new();
    for record in records {
        if record.validate().is_err() {
            tracing::debug!(id = record.id(), "not saving invalid record");
            continue;
        }
        out.push_str(&encode_record(record));
        out.push('\n');
    }
    out
}
