//! Filesystem-based transport implementation.
//!
//! This backend stores asset objects in a key-addressable filesystem
//! structure, fanned out by content key to keep directories small.

use crate::transport::object_key;
use crate::TransportBackend;
use std::path::{Path, PathBuf};
use vasari_core::AssetRecord;
use vasari_error::{TransportError, TransportErrorKind, VasariResult};

/// Filesystem transport backend.
///
/// Stores asset objects in a key-addressable structure:
/// `{root}/{key[0:2]}/{key[2:4]}/{key}`
///
/// # Example Structure
///
/// ```text
/// /var/vasari/assets/
/// ├── ab/
/// │   └── cd/
/// │       └── abcd1e87-...  (PNG bytes)
/// └── 12/
///     └── 34/
///         └── 12345f09-...  (PDF bytes)
/// ```
///
/// # Features
///
/// - **Key-addressable**: Objects stored under the record's content key
/// - **Atomic writes**: Uses temp file + rename so readers never see a
///   partial object
/// - **Organized structure**: Two-level subdirectories prevent directory
///   bloat; degenerate short keys stay flat
pub struct LocalTransport {
    root: PathBuf,
    public_url: Option<String>,
}

impl LocalTransport {
    /// Create a new filesystem transport backend.
    ///
    /// Creates the root directory if it doesn't exist.
    ///
    /// # Arguments
    ///
    /// * `root` - Root directory for object storage
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(root))]
    pub fn new(root: impl Into<PathBuf>) -> VasariResult<Self> {
        let root = root.into();

        std::fs::create_dir_all(&root).map_err(|e| {
            TransportError::new(TransportErrorKind::Write(format!(
                "{}: {}",
                root.display(),
                e
            )))
        })?;

        tracing::info!(path = %root.display(), "Created local transport");
        Ok(Self {
            root,
            public_url: None,
        })
    }

    /// Set the base URL under which stored objects are served.
    ///
    /// Without a base URL, `url()` returns `None` for every record.
    pub fn with_public_url(mut self, base: impl Into<String>) -> Self {
        self.public_url = Some(base.into());
        self
    }

    /// Relative location of an object, mirrored by `url()`.
    ///
    /// Keys are v4 UUIDs in canonical form; degenerate keys stay unsharded.
    fn relative_key(key: &str) -> String {
        if key.len() >= 4 && key.is_ascii() {
            format!("{}/{}/{}", &key[0..2], &key[2..4], key)
        } else {
            key.to_string()
        }
    }

    /// Get the filesystem path for the record's stored object.
    ///
    /// Structure: `{root}/{key[0:2]}/{key[2:4]}/{key}`
    ///
    /// Returns `None` when the record has no content key yet.
    pub fn object_path(&self, record: &AssetRecord) -> Option<PathBuf> {
        let key = record.hash()?;
        Some(self.root.join(Self::relative_key(key)))
    }
}

#[async_trait::async_trait]
impl TransportBackend for LocalTransport {
    #[tracing::instrument(skip(self, record, source), fields(hash = ?record.hash(), source = %source.display()))]
    async fn push(&self, record: &AssetRecord, source: &Path) -> VasariResult<()> {
        let key = object_key(record)?;
        let path = self.root.join(Self::relative_key(key));

        // Create parent directories
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                TransportError::new(TransportErrorKind::Write(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Copy to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        tokio::fs::copy(source, &temp_path).await.map_err(|e| {
            TransportError::new(TransportErrorKind::Write(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            TransportError::new(TransportErrorKind::Write(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(
            hash = %key,
            path = %path.display(),
            "Stored asset object"
        );

        Ok(())
    }

    #[tracing::instrument(skip(self, record), fields(hash = ?record.hash()))]
    async fn remove(&self, record: &AssetRecord) -> VasariResult<()> {
        let key = object_key(record)?;
        let path = self.root.join(Self::relative_key(key));

        tokio::fs::remove_file(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TransportError::new(TransportErrorKind::NotFound(key.to_string()))
            } else {
                TransportError::new(TransportErrorKind::Write(format!(
                    "delete {}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        tracing::info!(
            hash = %key,
            path = %path.display(),
            "Deleted asset object"
        );

        Ok(())
    }

    async fn url(&self, record: &AssetRecord) -> Option<String> {
        let key = record.hash()?;
        let base = self.public_url.as_deref()?;

        Some(format!(
            "{}/{}",
            base.trim_end_matches('/'),
            Self::relative_key(key)
        ))
    }
}
