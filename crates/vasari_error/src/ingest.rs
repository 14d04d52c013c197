//! Ingestion error types.

/// Kinds of ingestion errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum IngestErrorKind {
    /// Local source path does not exist
    #[display("Source file not found: {}", _0)]
    SourceNotFound(String),
    /// URL origin unreachable or returned a non-success status
    #[display("Fetch failed: {}", _0)]
    Fetch(String),
    /// Scratch directory could not be created
    #[display("Failed to create scratch directory: {}", _0)]
    ScratchDir(String),
    /// Staged file could not be written
    #[display("Failed to write staged file: {}", _0)]
    ScratchWrite(String),
}

/// Ingestion error with location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{IngestError, IngestErrorKind};
///
/// let err = IngestError::new(IngestErrorKind::SourceNotFound(
///     "/missing/path".to_string(),
/// ));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Ingest Error: {} at line {} in {}", kind, line, file)]
pub struct IngestError {
    /// The kind of error that occurred
    pub kind: IngestErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl IngestError {
    /// Create a new ingestion error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: IngestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
