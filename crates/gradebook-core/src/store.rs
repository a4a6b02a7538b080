//! The in-memory student roster.
//!
//! `RecordStore` keeps records in insertion order and guarantees that every
//! stored record is valid and that ids are unique. Lookups are linear scans.

use crate::codec;
use crate::error::{LineError, StoreError};
use crate::model::{RecordPatch, StudentRecord};

/// An ordered collection of valid student records with unique ids.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
}

/// Outcome of loading encoded text into a store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Lines turned into records.
    pub accepted: usize,
    /// Lines skipped as malformed, invalid, or duplicate.
    pub rejected: usize,
    /// One entry per rejected line.
    pub issues: Vec<LineIssue>,
}

/// A rejected line and the reason it was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct LineIssue {
    /// 1-based line number in the loaded text.
    pub line: usize,
    pub error: LineError,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new record.
    pub fn add(
        &mut self,
        name: &str,
        id: &str,
        score1: f64,
        score2: f64,
        score3: f64,
    ) -> Result<(), StoreError> {
        let record = StudentRecord::new(name, id, [score1, score2, score3])?;
        self.insert(record)
    }

    /// Append an already-built record, enforcing id uniqueness.
    pub fn insert(&mut self, record: StudentRecord) -> Result<(), StoreError> {
        if self.position(record.id()).is_some() {
            return Err(StoreError::DuplicateKey(record.id().to_string()));
        }
        tracing::debug!(id = record.id(), final_score = record.final_score(), "added student");
        self.records.push(record);
        Ok(())
    }

    /// Look up a record by id.
    pub fn find(&self, id: &str) -> Option<&StudentRecord> {
        self.position(id).map(|i| &self.records[i])
    }

    /// Apply `patch` to the record with `id`.
    ///
    /// On any error the stored record is left exactly as it was.
    pub fn update(&mut self, id: &str, patch: &RecordPatch) -> Result<(), StoreError> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.trim().to_string()))?;

        let updated = self.records[index].patched(patch)?;

        if self.position(updated.id()).is_some_and(|other| other != index) {
            return Err(StoreError::DuplicateKey(updated.id().to_string()));
        }

        tracing::debug!(
            id = updated.id(),
            final_score = updated.final_score(),
            "updated student"
        );
        self.records[index] = updated;
        Ok(())
    }

    /// Remove and return the record with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> Result<StudentRecord, StoreError> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.trim().to_string()))?;
        let removed = self.records.remove(index);
        tracing::debug!(id = removed.id(), "removed student");
        Ok(removed)
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Parse encoded text and append every acceptable line.
    ///
    /// Loading adds to whatever is already stored. Blank lines are ignored;
    /// every other line is either accepted or counted as rejected.
    pub fn load_from(&mut self, text: &str) -> LoadReport {
        let mut report = LoadReport::default();

        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let outcome = codec::decode_line(line).and_then(|record| {
                match self.position(record.id()) {
                    Some(_) => Err(LineError::DuplicateId(record.id().to_string())),
                    None => Ok(record),
                }
            });

            match outcome {
                Ok(record) => {
                    self.records.push(record);
                    report.accepted += 1;
                }
                Err(error) => {
                    tracing::warn!(line = i + 1, "skipping line: {error}");
                    report.rejected += 1;
                    report.issues.push(LineIssue { line: i + 1, error });
                }
            }
        }

        report
    }

    /// Encode every valid record, one line each, in collection order.
    pub fn save_to(&self) -> String {
        codec::encode_all(&self.records)
    }

    /// All records in collection order.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        let id = id.trim();
        self.records.iter().position(|r| r.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::model::round2;

    fn sample() -> RecordStore {
        let mut store = RecordStore::new();
        store.add("Ana", "A01", 90.0, 80.0, 70.0).unwrap();
        store.add("Luis", "A02", 50.0, 60.0, 65.0).unwrap();
        store.add("Eva", "A03", 100.0, 95.0, 98.0).unwrap();
        store
    }

    fn ids(store: &RecordStore) -> Vec<&str> {
        store.records().iter().map(|r| r.id()).collect()
    }

    #[test]
    fn add_then_find() {
        let mut store = RecordStore::new();
        store.add("Ana", "A01", 91.0, 77.5, 64.25).unwrap();
        let r = store.find("A01").unwrap();
        assert_eq!(r.name(), "Ana");
        assert_eq!(r.final_score(), round2((91.0 + 77.5 + 64.25) / 3.0));
        assert!(store.find("missing").is_none());
    }

    #[test]
    fn add_rejects_invalid_input() {
        let mut store = RecordStore::new();
        let err = store.add("", "A01", 1.0, 1.0, 1.0).unwrap_err();
        assert_eq!(err, StoreError::Validation(ValidationError::EmptyField("name")));
        let err = store.add("Ana", "A01", 1.0, 1.0, 100.5).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_add_leaves_store_unchanged() {
        let mut store = sample();
        let before = store.records().to_vec();

        let err = store.add("Other", "A02", 10.0, 10.0, 10.0).unwrap_err();
        assert_eq!(err, StoreError::DuplicateKey("A02".into()));
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn duplicate_detection_ignores_surrounding_whitespace() {
        let mut store = sample();
        assert!(matches!(
            store.add("Other", " A01 ", 10.0, 10.0, 10.0),
            Err(StoreError::DuplicateKey(_))
        ));
    }

    #[test]
    fn remove_preserves_order() {
        let mut store = sample();
        let removed = store.remove("A02").unwrap();
        assert_eq!(removed.name(), "Luis");
        assert_eq!(store.len(), 2);
        assert!(store.find("A02").is_none());
        assert_eq!(ids(&store), vec!["A01", "A03"]);
    }

    #[test]
    fn remove_missing_is_not_found() {
        let mut store = sample();
        let err = store.remove("Z99").unwrap_err();
        assert_eq!(err, StoreError::NotFound("Z99".into()));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn update_scores_recomputes_final() {
        let mut store = sample();
        let patch = RecordPatch {
            score2: Some(95.0),
            ..Default::default()
        };
        store.update("A02", &patch).unwrap();
        let r = store.find("A02").unwrap();
        assert_eq!(r.scores(), [50.0, 95.0, 65.0]);
        assert_eq!(r.final_score(), 70.0);
        assert!(r.passed());
    }

    #[test]
    fn failed_update_changes_nothing() {
        let mut store = sample();
        let before = store.find("A01").unwrap().clone();

        let patch = RecordPatch {
            score1: Some(101.0),
            ..Default::default()
        };
        let err = store.update("A01", &patch).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.find("A01"), Some(&before));
    }

    #[test]
    fn update_to_taken_id_is_duplicate() {
        let mut store = sample();
        let patch = RecordPatch {
            id: Some("A03".into()),
            name: Some("Renamed".into()),
            ..Default::default()
        };
        let err = store.update("A01", &patch).unwrap_err();
        assert_eq!(err, StoreError::DuplicateKey("A03".into()));
        assert_eq!(store.find("A01").unwrap().name(), "Ana");
    }

    #[test]
    fn update_to_own_id_is_allowed() {
        let mut store = sample();
        let patch = RecordPatch {
            id: Some("A01".into()),
            name: Some("Ana Maria".into()),
            ..Default::default()
        };
        store.update("A01", &patch).unwrap();
        assert_eq!(store.find("A01").unwrap().name(), "Ana Maria");
    }

    #[test]
    fn update_changes_key_in_place() {
        let mut store = sample();
        let patch = RecordPatch {
            id: Some("B02".into()),
            ..Default::default()
        };
        store.update("A02", &patch).unwrap();
        assert!(store.find("A02").is_none());
        assert_eq!(ids(&store), vec!["A01", "B02", "A03"]);
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut store = sample();
        let err = store.update("nope", &RecordPatch::default()).unwrap_err();
        assert_eq!(err, StoreError::NotFound("nope".into()));
    }

    #[test]
    fn load_counts_rejected_lines() {
        let mut store = RecordStore::new();
        let report = store.load_from("Ana|A01|90|80|70\nA|1|150|80|80\n");
        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.issues[0].line, 2);
        assert!(store.find("1").is_none());
        assert!(store.find("A01").is_some());
    }

    #[test]
    fn load_skips_blank_lines_and_reports_each_reason() {
        let text = "\n\
            Ana|A01|90|80|70\n\
            \n   \n\
            Luis|A02|x|80|70\n\
            Eva|A03|90|80\n\
            |A04|90|80|70\n\
            Dup|A01|10|10|10\n\
            Eva|A03|90|80|70\n";
        let mut store = RecordStore::new();
        let report = store.load_from(text);

        assert_eq!(report.accepted, 2);
        assert_eq!(report.rejected, 4);
        let reasons: Vec<_> = report.issues.iter().map(|i| (i.line, &i.error)).collect();
        assert!(matches!(reasons[0], (5, LineError::InvalidScore { index: 1, .. })));
        assert!(matches!(reasons[1], (6, LineError::FieldCount(4))));
        assert!(matches!(
            reasons[2],
            (7, LineError::Invalid(ValidationError::EmptyField("name")))
        ));
        assert!(matches!(reasons[3], (8, LineError::DuplicateId(_))));
        assert_eq!(ids(&store), vec!["A01", "A03"]);
    }

    #[test]
    fn load_is_cumulative_and_rejects_existing_ids() {
        let mut store = sample();
        let report = store.load_from("Ana again|A01|1|1|1\nNew|A04|75|75|75\n");
        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected, 1);
        assert_eq!(store.len(), 4);
        assert_eq!(store.find("A01").unwrap().name(), "Ana");
    }

    #[test]
    fn clear_then_load_replaces_contents() {
        let mut store = sample();
        store.clear();
        store.load_from("New|A04|75|75|75");
        assert_eq!(ids(&store), vec!["A04"]);
    }

    #[test]
    fn save_empty_store_is_empty_text() {
        assert_eq!(RecordStore::new().save_to(), "");
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = sample();
        store.add("Mar", "A04", 33.33, 66.67, 99.99).unwrap();

        let text = store.save_to();
        let mut reloaded = RecordStore::new();
        let report = reloaded.load_from(&text);

        assert_eq!(report.rejected, 0);
        assert_eq!(report.accepted, store.len());
        assert_eq!(reloaded.records(), store.records());
    }

    #[test]
    fn three_decimal_scores_cannot_break_round_trip() {
        let mut store = sample();
        let err = store.add("Ana", "A04", 71.313, 61.081, 77.593).unwrap_err();
        assert_eq!(
            err,
            StoreError::Validation(ValidationError::TooPrecise {
                index: 1,
                value: 71.313
            })
        );
        assert_eq!(store.len(), 3);

        let patch = RecordPatch {
            score2: Some(61.081),
            ..Default::default()
        };
        assert!(store.update("A01", &patch).is_err());

        store.add("Ana", "A04", 71.31, 61.08, 77.59).unwrap();
        let before = store.find("A04").unwrap().clone();
        assert_eq!(before.final_score(), 69.99);

        let mut reloaded = RecordStore::new();
        let report = reloaded.load_from(&store.save_to());
        assert_eq!(report.rejected, 0);
        assert_eq!(reloaded.find("A04"), Some(&before));
        assert_eq!(reloaded.records(), store.records());
    }

    #[test]
    fn load_rejects_three_decimal_scores() {
        let mut store = RecordStore::new();
        let report = store.load_from("Ana|A01|71.313|61.08|77.59\n");
        assert_eq!(report.rejected, 1);
        assert_eq!(
            report.issues[0].error,
            LineError::Invalid(ValidationError::TooPrecise {
                index: 1,
                value: 71.313
            })
        );
        assert!(store.is_empty());
    }
}
