//! HTTP object-store transport implementation.
//!
//! This backend pushes asset objects to a remote object store over plain
//! HTTP: PUT to store, DELETE to remove. It suits nginx/webdav-style stores
//! and CDN origins that accept uploads.

use crate::transport::object_key;
use crate::TransportBackend;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};
use vasari_core::AssetRecord;
use vasari_error::{TransportError, TransportErrorKind, VasariResult};

/// Configuration for an HTTP transport backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct HttpTransportConfig {
    /// Base URL objects are written to (PUT/DELETE target)
    endpoint: String,

    /// Base URL objects are served from; falls back to `endpoint`
    #[serde(default)]
    public_url: Option<String>,
}

impl HttpTransportConfig {
    /// Create a configuration writing to the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            public_url: None,
        }
    }

    /// Set the base URL under which stored objects are served.
    pub fn with_public_url(mut self, base: impl Into<String>) -> Self {
        self.public_url = Some(base.into());
        self
    }
}

/// HTTP object-store transport backend.
///
/// Objects live at `{endpoint}/{key}`; `url()` serves them from
/// `{public_url}/{key}` when a public base is configured, falling back to
/// the write endpoint.
pub struct HttpTransport {
    client: Client,
    config: HttpTransportConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport backend.
    pub fn new(config: HttpTransportConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.config.endpoint().trim_end_matches('/'), key)
    }
}

#[async_trait::async_trait]
impl TransportBackend for HttpTransport {
    #[instrument(skip(self, record, source), fields(hash = ?record.hash(), source = %source.display()))]
    async fn push(&self, record: &AssetRecord, source: &Path) -> VasariResult<()> {
        let key = object_key(record)?;
        let url = self.object_url(key);

        let body = tokio::fs::read(source).await.map_err(|e| {
            TransportError::new(TransportErrorKind::Write(format!(
                "{}: {}",
                source.display(),
                e
            )))
        })?;
        let size = body.len();

        debug!(url = %url, size, "Object store PUT");

        let response = self
            .client
            .put(&url)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                TransportError::new(TransportErrorKind::Write(format!("PUT {}: {}", url, e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::new(TransportErrorKind::Write(format!(
                "PUT {} returned {}: {}",
                url, status, body
            )))
            .into());
        }

        tracing::info!(hash = %key, url = %url, size, "Stored asset object");
        Ok(())
    }

    #[instrument(skip(self, record), fields(hash = ?record.hash()))]
    async fn remove(&self, record: &AssetRecord) -> VasariResult<()> {
        let key = object_key(record)?;
        let url = self.object_url(key);

        debug!(url = %url, "Object store DELETE");

        let response = self.client.delete(&url).send().await.map_err(|e| {
            TransportError::new(TransportErrorKind::Write(format!("DELETE {}: {}", url, e)))
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(TransportError::new(TransportErrorKind::NotFound(key.to_string())).into());
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::new(TransportErrorKind::Write(format!(
                "DELETE {} returned {}: {}",
                url, status, body
            )))
            .into());
        }

        tracing::info!(hash = %key, url = %url, "Deleted asset object");
        Ok(())
    }

    async fn url(&self, record: &AssetRecord) -> Option<String> {
        let key = record.hash()?;
        let base = match self.config.public_url() {
            Some(public) => public.as_str(),
            None => self.config.endpoint().as_str(),
        };

        Some(format!("{}/{}", base.trim_end_matches('/'), key))
    }
}
