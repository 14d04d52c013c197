//! Transport error types.

/// Kinds of transport errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TransportErrorKind {
    /// Push or remove failed on I/O or network
    #[display("Transport write failed: {}", _0)]
    Write(String),
    /// Stored object absent from the backend
    #[display("Stored object not found: {}", _0)]
    NotFound(String),
    /// Requested backend name is not registered
    #[display("Unknown transport: {}", _0)]
    Unknown(String),
}

/// Transport error with location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::new(TransportErrorKind::Unknown("s3".to_string()));
/// assert!(format!("{}", err).contains("Unknown transport"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The kind of error that occurred
    pub kind: TransportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TransportError {
    /// Create a new transport error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
