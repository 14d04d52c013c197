//! Record persistence error types.

/// Kinds of record persistence errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RecordErrorKind {
    /// No record stored under the given id
    #[display("Record {} not found", _0)]
    NotFound(i64),
    /// Record has never been saved, so it has no id
    #[display("Record has not been saved")]
    NoId,
    /// Save failed in the persistence collaborator
    #[display("Failed to save record: {}", _0)]
    Save(String),
    /// Remove failed in the persistence collaborator
    #[display("Failed to remove record: {}", _0)]
    Remove(String),
}

/// Record persistence error with location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{RecordError, RecordErrorKind};
///
/// let err = RecordError::new(RecordErrorKind::NotFound(42));
/// assert!(format!("{}", err).contains("42"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Record Error: {} at line {} in {}", kind, line, file)]
pub struct RecordError {
    /// The kind of error that occurred
    pub kind: RecordErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RecordError {
    /// Create a new record error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RecordErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
