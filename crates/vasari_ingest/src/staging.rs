//! Temp staging for asset ingestion.
//!
//! Every origin funnels its bytes through a staged file under the scratch
//! directory before a transport commits them. Staged files are named solely
//! by the owning record's content key, so concurrent ingestions never
//! contend, and they are removed on success, failure, and panic paths alike.

use futures_util::StreamExt;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument, warn};
use vasari_error::{IngestError, IngestErrorKind, VasariResult};

/// Staging area for in-flight asset bytes.
///
/// Writes buffers and URL downloads into the scratch directory and hands
/// back [`StagedFile`] guards. The scratch directory is created on demand,
/// so a fresh data root needs no setup step.
#[derive(Debug, Clone)]
pub struct TempStaging {
    scratch_dir: PathBuf,
    client: Client,
}

impl TempStaging {
    /// Create a staging area rooted at the given scratch directory.
    ///
    /// The directory is not created until the first staging call.
    pub fn new(scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            scratch_dir: scratch_dir.into(),
            client: Client::new(),
        }
    }

    /// Path a staged file for `key` would occupy.
    pub fn staged_path(&self, key: &str) -> PathBuf {
        self.scratch_dir.join(key)
    }

    async fn ensure_scratch(&self) -> VasariResult<()> {
        tokio::fs::create_dir_all(&self.scratch_dir)
            .await
            .map_err(|e| {
                IngestError::new(IngestErrorKind::ScratchDir(format!(
                    "{}: {}",
                    self.scratch_dir.display(),
                    e
                )))
            })?;
        Ok(())
    }

    /// Stage an in-memory buffer under `key`.
    ///
    /// # Errors
    ///
    /// Returns `IngestErrorKind::ScratchWrite` when the staged file cannot
    /// be written; a partial file is released before the error propagates.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn stage_buffer(&self, bytes: &[u8], key: &str) -> VasariResult<StagedFile> {
        self.ensure_scratch().await?;

        let staged = StagedFile::new(self.staged_path(key));
        if let Err(e) = tokio::fs::write(staged.path(), bytes).await {
            let err = IngestError::new(IngestErrorKind::ScratchWrite(format!(
                "{}: {}",
                staged.path().display(),
                e
            )));
            staged.release().await;
            return Err(err.into());
        }

        debug!(path = %staged.path().display(), "Staged buffer");
        Ok(staged)
    }

    /// Stage the body of a remote URL under `key`.
    ///
    /// The response body is streamed to the staged file chunk by chunk and
    /// the file is flushed and fsynced only after the stream is fully
    /// drained, so a staged file never masquerades as complete.
    ///
    /// # Errors
    ///
    /// Returns `IngestErrorKind::Fetch` when the request fails or the server
    /// answers with a non-success status, and `ScratchWrite` when the staged
    /// file cannot be written. Either way the partial file is released
    /// before the error propagates.
    #[instrument(skip(self), fields(link = %link))]
    pub async fn stage_url(&self, link: &str, key: &str) -> VasariResult<StagedFile> {
        self.ensure_scratch().await?;

        let response = self.client.get(link).send().await.map_err(|e| {
            IngestError::new(IngestErrorKind::Fetch(format!("GET {}: {}", link, e)))
        })?;

        if !response.status().is_success() {
            return Err(IngestError::new(IngestErrorKind::Fetch(format!(
                "GET {} returned {}",
                link,
                response.status()
            )))
            .into());
        }

        let staged = StagedFile::new(self.staged_path(key));
        if let Err(err) = self.drain_response(response, staged.path()).await {
            staged.release().await;
            return Err(err);
        }

        debug!(path = %staged.path().display(), link = %link, "Staged download");
        Ok(staged)
    }

    async fn drain_response(&self, response: reqwest::Response, path: &Path) -> VasariResult<()> {
        let mut dest = tokio::fs::File::create(path).await.map_err(|e| {
            IngestError::new(IngestErrorKind::ScratchWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                IngestError::new(IngestErrorKind::Fetch(format!("read body: {}", e)))
            })?;

            dest.write_all(&chunk).await.map_err(|e| {
                IngestError::new(IngestErrorKind::ScratchWrite(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
        }

        // Completion means the stream is drained and the bytes are durable
        dest.flush().await.map_err(|e| {
            IngestError::new(IngestErrorKind::ScratchWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        dest.sync_all().await.map_err(|e| {
            IngestError::new(IngestErrorKind::ScratchWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        Ok(())
    }
}

/// Guard for one staged file.
///
/// Holds the staged path for the duration of a commit. [`release`] removes
/// the file explicitly; dropping an unreleased guard removes it as a
/// backstop, covering early returns and panics.
///
/// [`release`]: StagedFile::release
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    released: bool,
}

impl StagedFile {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            released: false,
        }
    }

    /// Location of the staged bytes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the staged file.
    ///
    /// Removal failures are logged and swallowed; an already-absent file is
    /// not an error.
    pub async fn release(mut self) {
        self.released = true;

        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => debug!(path = %self.path.display(), "Released staged file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to release staged file");
            }
        }
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Removed staged file on drop"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to remove staged file on drop");
            }
        }
    }
}
