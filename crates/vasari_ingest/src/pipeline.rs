//! The asset ingestion pipeline.
//!
//! Three origins (in-memory buffer, remote URL, local path) converge on one
//! staging-and-commit flow: bytes are staged under the record's content key,
//! committed through the resolved transport, and the record is saved, with
//! the staged file released no matter how the commit ends.

use crate::{AssetHook, TempStaging};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use vasari_core::{AssetRecord, AssetSummary, RecordStore};
use vasari_error::{IngestError, IngestErrorKind, VasariResult};
use vasari_transport::TransportRegistry;

/// Ingestion pipeline for asset records.
///
/// Holds the transport registry, the staging area, the record store, and
/// any registered lifecycle hooks. Entry points populate the record they
/// are handed; the caller keeps ownership of the record throughout.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use vasari_core::{AssetRecord, InMemoryRecordStore};
/// use vasari_ingest::{AssetPipeline, TempStaging};
/// use vasari_transport::{LocalTransport, TransportRegistry};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut registry = TransportRegistry::new(None);
/// registry.register("local", Arc::new(LocalTransport::new("data/assets")?));
///
/// let pipeline = AssetPipeline::new(
///     Arc::new(registry),
///     TempStaging::new("data/cache/tmp"),
///     Arc::new(InMemoryRecordStore::new()),
/// );
///
/// let mut record = AssetRecord::new();
/// pipeline
///     .from_buffer(&mut record, b"\x89PNG...", "photo.png")
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct AssetPipeline {
    registry: Arc<TransportRegistry>,
    staging: TempStaging,
    store: Arc<dyn RecordStore>,
    hooks: Vec<Arc<dyn AssetHook>>,
}

impl AssetPipeline {
    /// Create a pipeline over the given collaborators.
    pub fn new(
        registry: Arc<TransportRegistry>,
        staging: TempStaging,
        store: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            registry,
            staging,
            store,
            hooks: Vec::new(),
        }
    }

    /// Register a lifecycle hook. Hooks run in registration order.
    pub fn with_hook(mut self, hook: Arc<dyn AssetHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Ingest an in-memory buffer.
    ///
    /// Derives the extension from `name`, stages the buffer under the
    /// record's content key, and commits it through [`from_file`]. The
    /// staged file is released whether or not the commit succeeds.
    ///
    /// [`from_file`]: AssetPipeline::from_file
    #[instrument(skip(self, record, buffer, name), fields(size = buffer.len()))]
    pub async fn from_buffer(
        &self,
        record: &mut AssetRecord,
        buffer: &[u8],
        name: &str,
    ) -> VasariResult<()> {
        record.ensure_ext(name);
        let key = record.ensure_hash().to_string();

        let staged = self.staging.stage_buffer(buffer, &key).await?;
        let committed = self.from_file(record, staged.path(), Some(name)).await;
        staged.release().await;

        committed
    }

    /// Ingest the body of a remote URL.
    ///
    /// The display name is the final segment of the URL path; an empty
    /// segment falls back to the record's derived name. The body is staged
    /// by streaming, then committed through [`from_file`]. The staged file
    /// is released whether or not the commit succeeds.
    ///
    /// [`from_file`]: AssetPipeline::from_file
    #[instrument(skip(self, record), fields(link = %link))]
    pub async fn from_url(&self, record: &mut AssetRecord, link: &str) -> VasariResult<()> {
        let name = url_file_name(link)?;

        record.ensure_ext(&name);
        let key = record.ensure_hash().to_string();

        let staged = self.staging.stage_url(link, &key).await?;
        let supplied = if name.is_empty() {
            None
        } else {
            Some(name.as_str())
        };
        let committed = self.from_file(record, staged.path(), supplied).await;
        staged.release().await;

        committed
    }

    /// Ingest a local file. All origins converge here.
    ///
    /// A missing source fails with `SourceNotFound` before the record is
    /// touched. Otherwise the record's identity fields are settled
    /// (extension, content key, display name, size) and the transport is
    /// pinned, then one hook-wrapped unit pushes the bytes and saves the
    /// record. A push failure aborts before the save, so no record
    /// describes bytes that were never stored.
    #[instrument(skip(self, record, source, name), fields(source = %source.display()))]
    pub async fn from_file(
        &self,
        record: &mut AssetRecord,
        source: &Path,
        name: Option<&str>,
    ) -> VasariResult<()> {
        // Source must exist before the record is mutated
        let metadata = match tokio::fs::metadata(source).await {
            Ok(metadata) => metadata,
            Err(_) => {
                return Err(IngestError::new(IngestErrorKind::SourceNotFound(
                    source.display().to_string(),
                ))
                .into());
            }
        };

        if let Some(name) = name {
            record.ensure_ext(name);
        }
        record.ensure_hash();

        let display = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => record.fallback_name(),
        };
        record.set_name(display);
        record.set_size(metadata.len());

        // Pinned once here; later commits reuse the stored name
        let transport = self.registry.name_for(record).to_string();
        record.set_transport(transport.clone());

        for hook in &self.hooks {
            hook.before_store(record).await?;
        }

        let backend = self.registry.resolve(&transport)?;
        backend.push(record, source).await?;
        self.store.save(record).await?;

        for hook in &self.hooks {
            hook.after_store(record).await;
        }

        debug!(
            hash = ?record.hash(),
            name = ?record.name(),
            size = ?record.size(),
            transport = %transport,
            "Committed asset"
        );

        Ok(())
    }

    /// Remove an asset's stored object and metadata.
    ///
    /// One hook-wrapped unit. The backend deletion is best-effort: failures
    /// (including an object that is already gone) are logged and swallowed
    /// so storage drift cannot strand metadata. The metadata deletion is
    /// mandatory and its errors propagate.
    #[instrument(skip(self, record), fields(hash = ?record.hash(), transport = ?record.transport()))]
    pub async fn remove(&self, record: &AssetRecord) -> VasariResult<()> {
        for hook in &self.hooks {
            hook.before_remove(record).await?;
        }

        let transport = self.registry.name_for(record);
        match self.registry.resolve(transport) {
            Ok(backend) => {
                if let Err(e) = backend.remove(record).await {
                    warn!(transport = %transport, error = %e, "Failed to remove stored object");
                }
            }
            Err(e) => {
                warn!(transport = %transport, error = %e, "Failed to resolve transport for removal");
            }
        }

        self.store.remove(record).await?;

        for hook in &self.hooks {
            hook.after_remove(record).await;
        }

        debug!(hash = ?record.hash(), "Removed asset");
        Ok(())
    }

    /// Retrievable address for the record's stored object.
    ///
    /// `None` when the record's transport cannot be resolved or the backend
    /// cannot produce an address.
    pub async fn resolve_url(&self, record: &AssetRecord) -> Option<String> {
        let backend = self.registry.resolve(self.registry.name_for(record)).ok()?;
        backend.url(record).await
    }

    /// Export the record's external-safe view.
    ///
    /// The `url` field is resolved through the record's transport at export
    /// time; the remaining fields are copied from the record.
    pub async fn export_summary(&self, record: &AssetRecord) -> AssetSummary {
        AssetSummary {
            id: record.id(),
            url: self.resolve_url(record).await,
            name: record.name().map(str::to_string),
            hash: record.hash().map(str::to_string),
            created: record.created_at(),
            updated: record.updated_at(),
        }
    }
}

/// Final segment of a URL's path, used as the downloaded asset's name.
fn url_file_name(link: &str) -> VasariResult<String> {
    let parsed = reqwest::Url::parse(link).map_err(|e| {
        IngestError::new(IngestErrorKind::Fetch(format!("invalid url {}: {}", link, e)))
    })?;

    Ok(parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default()
        .to_string())
}
