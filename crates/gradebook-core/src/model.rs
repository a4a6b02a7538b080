//! Core data model types for gradebook.
//!
//! A `StudentRecord` owns its three partial scores and the final score
//! derived from them. The fields are private so the final score can only
//! change through a path that recomputes it.

use serde::Serialize;

use crate::error::ValidationError;

/// Lowest accepted partial score.
pub const SCORE_MIN: f64 = 0.0;
/// Highest accepted partial score.
pub const SCORE_MAX: f64 = 100.0;
/// Final score at or above which a student passes.
pub const PASS_THRESHOLD: f64 = 70.0;

/// Characters that cannot appear in a name or id because the flat-file
/// encoding uses them as separators.
const RESERVED: [char; 3] = ['|', '\n', '\r'];

/// Round to two decimal places, halves away from zero.
///
/// `round2(0.125) == 0.13` and `round2(-0.125) == -0.13`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One student's stored data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    name: String,
    id: String,
    scores: [f64; 3],
    final_score: f64,
}

impl StudentRecord {
    /// Build a validated record. `name` and `id` are stored trimmed.
    pub fn new(
        name: impl AsRef<str>,
        id: impl AsRef<str>,
        scores: [f64; 3],
    ) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        let id = id.as_ref().trim();
        validate(name, id, &scores)?;
        Ok(Self {
            name: name.to_string(),
            id: id.to_string(),
            scores,
            final_score: final_score_of(&scores),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The three partial scores, in order.
    pub fn scores(&self) -> [f64; 3] {
        self.scores
    }

    /// Mean of the partial scores, rounded to two decimals.
    pub fn final_score(&self) -> f64 {
        self.final_score
    }

    /// Whether the final score reaches [`PASS_THRESHOLD`].
    pub fn passed(&self) -> bool {
        self.final_score >= PASS_THRESHOLD
    }

    /// `"PASSED"` or `"FAILED"`, as shown in listings and reports.
    pub fn status_label(&self) -> &'static str {
        if self.passed() {
            "PASSED"
        } else {
            "FAILED"
        }
    }

    /// Re-check the record against the field rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.name, &self.id, &self.scores)
    }

    /// Return a copy with `patch` applied and the final score recomputed.
    ///
    /// `self` is never modified, so a rejected patch leaves no trace.
    pub fn patched(&self, patch: &RecordPatch) -> Result<Self, ValidationError> {
        let name = patch.name.as_deref().unwrap_or(&self.name);
        let id = patch.id.as_deref().unwrap_or(&self.id);
        let scores = [
            patch.score1.unwrap_or(self.scores[0]),
            patch.score2.unwrap_or(self.scores[1]),
            patch.score3.unwrap_or(self.scores[2]),
        ];
        Self::new(name, id, scores)
    }
}

/// A partial update: every `Some` field replaces the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub id: Option<String>,
    pub score1: Option<f64>,
    pub score2: Option<f64>,
    pub score3: Option<f64>,
}

impl RecordPatch {
    /// Returns `true` if the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.id.is_none()
            && self.score1.is_none()
            && self.score2.is_none()
            && self.score3.is_none()
    }
}

fn final_score_of(scores: &[f64; 3]) -> f64 {
    round2(scores.iter().sum::<f64>() / 3.0)
}

fn validate(name: &str, id: &str, scores: &[f64; 3]) -> Result<(), ValidationError> {
    for (field, value) in [("name", name), ("id", id)] {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyField(field));
        }
        if let Some(found) = value.chars().find(|c| RESERVED.contains(c)) {
            return Err(ValidationError::ReservedCharacter { field, found });
        }
    }

    // NaN fails `contains`, so it is rejected here too.
    for (i, &value) in scores.iter().enumerate() {
        if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
            return Err(ValidationError::ScoreOutOfRange {
                index: i + 1,
                value,
            });
        }
        if round2(value) != value {
            return Err(ValidationError::TooPrecise {
                index: i + 1,
                value,
            });
        }
    }

    Ok(())
}
