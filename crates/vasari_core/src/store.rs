//! Record persistence seam and the in-memory implementation.
//!
//! The pipeline saves, loads, and removes records through [`RecordStore`];
//! the implementation owns id assignment and timestamp maintenance.
//! [`InMemoryRecordStore`] is the bundled implementation, suitable for
//! tests and single-process hosts.

use crate::AssetRecord;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use vasari_error::{RecordError, RecordErrorKind, VasariError, VasariResult};

/// Persistence collaborator for asset records.
///
/// Implementations assign ids on first save and maintain the record's
/// timestamps. Metadata removal through this trait is mandatory for the
/// pipeline's remove operation, so errors here propagate to callers.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist the record, assigning an id and timestamps on first save.
    async fn save(&self, record: &mut AssetRecord) -> VasariResult<()>;

    /// Load a record by id.
    async fn load(&self, id: i64) -> VasariResult<AssetRecord>;

    /// Delete the record's metadata.
    async fn remove(&self, record: &AssetRecord) -> VasariResult<()>;
}

/// In-memory record store.
///
/// Stores records in a HashMap protected by an RwLock for thread-safe access.
/// All data is lost when the store is dropped.
///
/// # Example
/// ```no_run
/// use vasari_core::{AssetRecord, InMemoryRecordStore, RecordStore};
///
/// #[tokio::main]
/// async fn main() {
///     let store = InMemoryRecordStore::new();
///     let mut record = AssetRecord::new();
///     // Use store.save(&mut record), store.load(id), etc.
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryRecordStore {
    /// Storage for records, keyed by id
    records: Arc<RwLock<HashMap<i64, AssetRecord>>>,
    /// Next id to assign
    next_id: Arc<RwLock<i64>>,
}

impl InMemoryRecordStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    /// Get the number of stored records (for testing).
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Check if the store is empty (for testing).
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Clear all records (for testing).
    pub async fn clear(&self) {
        self.records.write().await.clear();
        *self.next_id.write().await = 1;
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn save(&self, record: &mut AssetRecord) -> VasariResult<()> {
        let id = match record.id() {
            Some(id) => id,
            None => {
                let mut next_id_guard = self.next_id.write().await;
                let id = *next_id_guard;
                *next_id_guard += 1;
                drop(next_id_guard);

                record.assign_id(id);
                id
            }
        };

        record.touch(Utc::now());
        self.records.write().await.insert(id, record.clone());
        Ok(())
    }

    async fn load(&self, id: i64) -> VasariResult<AssetRecord> {
        let records = self.records.read().await;
        records.get(&id).cloned().ok_or_else(|| {
            VasariError::from(RecordError::new(RecordErrorKind::NotFound(id)))
        })
    }

    async fn remove(&self, record: &AssetRecord) -> VasariResult<()> {
        let id = record
            .id()
            .ok_or_else(|| VasariError::from(RecordError::new(RecordErrorKind::NoId)))?;

        self.records
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| {
                VasariError::from(RecordError::new(RecordErrorKind::NotFound(id)))
            })
    }
}
