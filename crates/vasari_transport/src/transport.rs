//! Transport trait definition.

use async_trait::async_trait;
use std::path::Path;
use vasari_core::AssetRecord;
use vasari_error::{TransportError, TransportErrorKind, VasariResult};

/// Trait for pluggable asset storage backends.
///
/// Implementations move committed asset bytes in and out of a storage
/// location, keyed by the record's content key. Record metadata is managed
/// separately by the persistence collaborator.
#[async_trait]
pub trait TransportBackend: Send + Sync {
    /// Store the file at `source` under the record's content key.
    ///
    /// The backend must not leave a partially written object visible when
    /// the push fails.
    ///
    /// # Arguments
    ///
    /// * `record` - The record whose content key addresses the object
    /// * `source` - Path to the staged file holding the bytes
    ///
    /// # Errors
    ///
    /// Returns `TransportErrorKind::Write` when the object cannot be stored.
    async fn push(&self, record: &AssetRecord, source: &Path) -> VasariResult<()>;

    /// Delete the stored object for the record.
    ///
    /// # Errors
    ///
    /// Returns `TransportErrorKind::NotFound` when no object exists under
    /// the record's key. Callers may treat that case as benign.
    async fn remove(&self, record: &AssetRecord) -> VasariResult<()>;

    /// Get a retrievable address for the stored object.
    ///
    /// # Returns
    ///
    /// `Some(url)` when the backend can produce an address for the record,
    /// `None` otherwise (e.g., the record was never committed or the backend
    /// has no public face).
    async fn url(&self, record: &AssetRecord) -> Option<String>;
}

impl std::fmt::Debug for dyn TransportBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TransportBackend")
    }
}

/// Content key of a record, required before any backend operation.
pub(crate) fn object_key(record: &AssetRecord) -> VasariResult<&str> {
    record.hash().ok_or_else(|| {
        TransportError::new(TransportErrorKind::Write(
            "record has no content key".to_string(),
        ))
        .into()
    })
}
