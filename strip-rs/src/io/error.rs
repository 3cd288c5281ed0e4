use thiserror::Error;

/// Violations of the expected input format.
/// Every variant identifies the offending line (1-based) where one exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("input is empty, expected a header line")]
    MissingHeader,

    #[error("declared item count {declared} does not match number of item lines {found}")]
    CountMismatch { declared: usize, found: usize },

    #[error("line {line}: '{token}' is not a valid number")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: expected {expected} fields, found {found}")]
    WrongFieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: item dimensions must be positive")]
    NonPositiveDimension { line: usize },

    #[error("line {line}: interval {name} is empty, stop must be greater than start")]
    EmptyInterval { line: usize, name: String },
}
