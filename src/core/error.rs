//! Error types for records operations

use thiserror::Error;

/// Errors surfaced by records operations.
///
/// Duplicate-key additions are deliberately absent: the stores treat them as
/// a warning plus no-op rather than a failure.
#[derive(Error, Debug)]
pub enum RecordsError {
    /// A lookup missed; the operation is aborted with a message.
    #[error("{entity} '{key}' was not found")]
    NotFound {
        /// Kind of record that was looked up (e.g. "student", "course")
        entity: &'static str,
        /// Key used for the lookup
        key: String,
    },

    /// Malformed input such as out-of-range marks, an unknown semester, or
    /// non-numeric credits.
    #[error("invalid {field}: {message}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// Marks were assigned for a course the student is not enrolled in.
    #[error("student '{registration}' is not enrolled in course '{course}'")]
    NotEnrolled {
        /// Registration number of the student
        registration: String,
        /// Course code the grading was attempted for
        course: String,
    },

    /// File read/write/copy failure.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias for records operations.
pub type Result<T> = std::result::Result<T, RecordsError>;
