//! Lifecycle hooks for asset units of work.

use async_trait::async_trait;
use vasari_core::AssetRecord;
use vasari_error::VasariResult;

/// Observer and veto points around asset units of work.
///
/// The pipeline runs two units: *store* (push to the transport, then save
/// the record) and *remove* (delete the stored object, then delete the
/// metadata). `before_*` methods run ahead of the unit and may veto it by
/// returning an error; `after_*` methods observe a completed unit.
///
/// All methods have no-op defaults, so implementations override only the
/// points they care about.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use vasari_core::AssetRecord;
/// use vasari_error::VasariResult;
/// use vasari_ingest::AssetHook;
///
/// struct AuditHook;
///
/// #[async_trait]
/// impl AssetHook for AuditHook {
///     async fn after_store(&self, record: &AssetRecord) {
///         println!("stored {:?}", record.name());
///     }
/// }
/// ```
#[async_trait]
pub trait AssetHook: Send + Sync {
    /// Runs before a store unit; an error vetoes the push and save.
    async fn before_store(&self, _record: &AssetRecord) -> VasariResult<()> {
        Ok(())
    }

    /// Observes a record whose bytes and metadata are both durable.
    async fn after_store(&self, _record: &AssetRecord) {}

    /// Runs before a remove unit; an error vetoes both deletions.
    async fn before_remove(&self, _record: &AssetRecord) -> VasariResult<()> {
        Ok(())
    }

    /// Observes a record whose object and metadata have been removed.
    async fn after_remove(&self, _record: &AssetRecord) {}
}
