//! Store error types.
//!
//! These are the recoverable failures a caller can get back from a
//! `RecordStore` operation. None of them leave the store in a modified state.

use thiserror::Error;

/// A field-level problem with a record's contents.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required text field is empty or only whitespace.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A text field contains a character the flat-file encoding reserves.
    #[error("{field} must not contain {found:?}")]
    ReservedCharacter { field: &'static str, found: char },

    /// A partial score is outside `[0, 100]` (or is not a number at all).
    #[error("score {index} is {value}, expected a value between 0 and 100")]
    ScoreOutOfRange { index: usize, value: f64 },

    /// A partial score has more than two decimals and would not survive
    /// being written to the data file.
    #[error("score {index} is {value}, at most two decimals are allowed")]
    TooPrecise { index: usize, value: f64 },
}

/// Errors returned by `RecordStore` mutations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The record contents are invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another record already uses this id.
    #[error("a student with id '{0}' already exists")]
    DuplicateKey(String),

    /// No record has this id.
    #[error("no student with id '{0}'")]
    NotFound(String),
}

/// Why a single line of a data file was rejected during a load.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    /// The line did not split into exactly five `|`-separated fields.
    #[error("expected 5 fields separated by '|', found {0}")]
    FieldCount(usize),

    /// A score field is not a number.
    #[error("score {index} is not a number: '{raw}'")]
    InvalidScore { index: usize, raw: String },

    /// The fields parsed but the record is invalid.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The id is already in the store or earlier in the same load.
    #[error("duplicate id '{0}'")]
    DuplicateId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = StoreError::DuplicateKey("A01".into());
        assert_eq!(err.to_string(), "a student with id 'A01' already exists");

        let err = StoreError::from(ValidationError::ScoreOutOfRange {
            index: 2,
            value: 101.0,
        });
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(err.to_string().contains("score 2 is 101"));

        let err = LineError::FieldCount(3);
        assert!(err.to_string().contains("found 3"));
    }

    #[test]
    fn too_precise_names_the_score() {
        let err = ValidationError::TooPrecise {
            index: 3,
            value: 77.593,
        };
        assert_eq!(
            err.to_string(),
            "score 3 is 77.593, at most two decimals are allowed"
        );
    }
}
