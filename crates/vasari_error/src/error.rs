//! Top-level error wrapper types.

use crate::{ConfigError, HookError, IngestError, RecordError, TransportError};

/// The foundation error enum for the Vasari workspace.
///
/// # Examples
///
/// ```
/// use vasari_error::{TransportError, TransportErrorKind, VasariError};
///
/// let transport_err = TransportError::new(TransportErrorKind::Write(
///     "disk full".to_string(),
/// ));
/// let err: VasariError = transport_err.into();
/// assert!(format!("{}", err).contains("Transport Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VasariErrorKind {
    /// Storage backend error
    #[from(TransportError)]
    Transport(TransportError),
    /// Staging or pipeline error
    #[from(IngestError)]
    Ingest(IngestError),
    /// Record persistence error
    #[from(RecordError)]
    Record(RecordError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Lifecycle hook veto
    #[from(HookError)]
    Hook(HookError),
}

/// Vasari error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vasari_error::{ConfigError, VasariResult};
///
/// fn might_fail() -> VasariResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vasari Error: {}", _0)]
pub struct VasariError(Box<VasariErrorKind>);

impl VasariError {
    /// Create a new error from a kind.
    pub fn new(kind: VasariErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VasariErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VasariErrorKind
impl<T> From<T> for VasariError
where
    T: Into<VasariErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vasari operations.
///
/// # Examples
///
/// ```
/// use vasari_error::{IngestError, IngestErrorKind, VasariResult};
///
/// fn fetch_asset() -> VasariResult<Vec<u8>> {
///     Err(IngestError::new(IngestErrorKind::Fetch("404 Not Found".to_string())))?
/// }
/// ```
pub type VasariResult<T> = std::result::Result<T, VasariError>;
