//! Transport registry and default resolution.

use crate::TransportBackend;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};
use vasari_core::AssetRecord;
use vasari_error::{TransportError, TransportErrorKind, VasariResult};

/// Built-in default transport name.
///
/// Used when no default is configured, so a bare setup still resolves to
/// the filesystem backend.
pub const DEFAULT_TRANSPORT: &str = "local";

/// Registry of named transport backends.
///
/// Backends are registered under stable names; records pin the name of the
/// backend that stored their bytes, and the registry turns names back into
/// backends. Resolution of the default happens per commit, so the
/// configured default only affects records committed after a change.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use vasari_transport::{LocalTransport, TransportRegistry};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut registry = TransportRegistry::new(None);
/// registry.register("local", Arc::new(LocalTransport::new("data/assets")?));
/// let backend = registry.resolve("local")?;
/// # Ok(())
/// # }
/// ```
pub struct TransportRegistry {
    /// Backends keyed by registered name
    backends: HashMap<String, Arc<dyn TransportBackend>>,
    /// Configured default backend name
    default_name: Option<String>,
}

impl TransportRegistry {
    /// Create a registry with an optional configured default name.
    ///
    /// Pass `config.transport.clone()` to honor the workspace configuration;
    /// `None` falls back to [`DEFAULT_TRANSPORT`].
    pub fn new(default_name: Option<String>) -> Self {
        Self {
            backends: HashMap::new(),
            default_name,
        }
    }

    /// Register a backend under a name, replacing any previous holder.
    pub fn register(&mut self, name: impl Into<String>, backend: Arc<dyn TransportBackend>) {
        let name = name.into();
        debug!(transport = %name, "Registered transport backend");
        self.backends.insert(name, backend);
    }

    /// Look up a backend by name.
    ///
    /// # Errors
    ///
    /// Returns `TransportErrorKind::Unknown` when no backend is registered
    /// under the name.
    #[instrument(skip(self))]
    pub fn resolve(&self, name: &str) -> VasariResult<Arc<dyn TransportBackend>> {
        self.backends.get(name).cloned().ok_or_else(|| {
            TransportError::new(TransportErrorKind::Unknown(name.to_string())).into()
        })
    }

    /// Name of the default backend for new commits.
    pub fn default_name(&self) -> &str {
        self.default_name.as_deref().unwrap_or(DEFAULT_TRANSPORT)
    }

    /// Name of the backend responsible for a record.
    ///
    /// A record pinned at commit time keeps its pinned name; unpinned
    /// records fall back to the current default.
    pub fn name_for<'a>(&'a self, record: &'a AssetRecord) -> &'a str {
        record.transport().unwrap_or_else(|| self.default_name())
    }

    /// Number of registered backends.
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    /// Check if no backends are registered.
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}
