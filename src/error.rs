//! Error types for market validation.
//!
//! Every caller-input problem is detected before the proposal loop starts
//! and reported as one `MatchError` naming the offending student or school.
//! There is no partial result: either a complete assignment is produced or
//! an error is returned.

use thiserror::Error;

/// Input validation error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("market has no students")]
    NoStudents,

    #[error("market has no schools")]
    NoSchools,

    #[error("expected {expected} capacities, got {actual}")]
    CapacityCountMismatch { expected: usize, actual: usize },

    #[error("student {student} ranks unknown school {school}")]
    InvalidPreference { student: usize, school: i64 },

    #[error("student {student} ranks school {school} more than once")]
    DuplicatePreference { student: usize, school: usize },

    #[error("school {school} ranks {actual} students, expected {expected}")]
    RankingLength { school: usize, expected: usize, actual: usize },

    #[error("school {school} ranks unknown student {student}")]
    RankingOutOfRange { school: usize, student: i64 },

    #[error("school {school} ranks student {student} more than once")]
    RankingDuplicate { school: usize, student: usize },

    #[error("school {school} has negative capacity {capacity}")]
    NegativeCapacity { school: usize, capacity: i64 },

    #[error("output buffer holds {actual} slots, expected {expected}")]
    OutputLength { expected: usize, actual: usize },

    #[error("null pointer passed for `{0}`")]
    NullPointer(&'static str),

    #[error("`{0}` dimensions exceed the addressable size")]
    DimensionOverflow(&'static str),
}

/// Flat classification of a [`MatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyMarket,
    ShapeMismatch,
    MalformedPreference,
    MalformedRanking,
    NegativeCapacity,
    OutputLength,
    NullPointer,
}

impl ErrorKind {
    /// Stable status code for the C ABI. Success is `0`.
    pub fn code(self) -> i32 {
        match self {
            ErrorKind::EmptyMarket => -1,
            ErrorKind::ShapeMismatch => -2,
            ErrorKind::MalformedPreference => -3,
            ErrorKind::MalformedRanking => -4,
            ErrorKind::NegativeCapacity => -5,
            ErrorKind::OutputLength => -6,
            ErrorKind::NullPointer => -7,
        }
    }
}

impl MatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatchError::NoStudents | MatchError::NoSchools => ErrorKind::EmptyMarket,
            MatchError::CapacityCountMismatch { .. } | MatchError::DimensionOverflow(_) => {
                ErrorKind::ShapeMismatch
            }
            MatchError::InvalidPreference { .. } | MatchError::DuplicatePreference { .. } => {
                ErrorKind::MalformedPreference
            }
            MatchError::RankingLength { .. }
            | MatchError::RankingOutOfRange { .. }
            | MatchError::RankingDuplicate { .. } => ErrorKind::MalformedRanking,
            MatchError::NegativeCapacity { .. } => ErrorKind::NegativeCapacity,
            MatchError::OutputLength { .. } => ErrorKind::OutputLength,
            MatchError::NullPointer(_) => ErrorKind::NullPointer,
        }
    }

    /// Index of the offending student (preference errors) or school
    /// (ranking and capacity errors), if the error names one.
    pub fn index(&self) -> Option<usize> {
        match *self {
            MatchError::InvalidPreference { student, .. }
            | MatchError::DuplicatePreference { student, .. } => Some(student),
            MatchError::RankingLength { school, .. }
            | MatchError::RankingOutOfRange { school, .. }
            | MatchError::RankingDuplicate { school, .. }
            | MatchError::NegativeCapacity { school, .. } => Some(school),
            _ => None,
        }
    }
}

/// Result type for matching operations
pub type Result<T> = std::result::Result<T, MatchError>;
