//! Configuration structures for the Vasari workspace.
//!
//! This module provides TOML-based configuration for asset storage. The
//! configuration system supports:
//! - Bundled defaults (include_str! from vasari.toml)
//! - User overrides (./vasari.toml or ~/.config/vasari/vasari.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};
use vasari_error::{ConfigError, VasariError, VasariResult};

fn default_data_root() -> PathBuf {
    PathBuf::from("data")
}

/// Top-level Vasari configuration.
///
/// Loads asset storage settings from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from vasari.toml)
/// 2. User override (./vasari.toml or ~/.config/vasari/vasari.toml)
///
/// # Example
///
/// ```no_run
/// use vasari_core::VasariConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Load configuration (bundled defaults + user overrides)
/// let config = VasariConfig::load()?;
///
/// println!("Data root: {}", config.data_root.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VasariConfig {
    /// Root directory for asset data; staged files live under
    /// `{data_root}/cache/tmp`
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,

    /// Name of the default transport for newly committed assets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
}

impl Default for VasariConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            transport: None,
        }
    }
}

impl VasariConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> VasariResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                VasariError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VasariError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (vasari.toml shipped with library)
    /// 2. User config in home directory (~/.config/vasari/vasari.toml)
    /// 3. User config in current directory (./vasari.toml)
    ///
    /// User config files are optional and will be silently skipped if not found.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vasari_core::VasariConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = VasariConfig::load()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> VasariResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../vasari.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/vasari/vasari.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("vasari").required(false));

        // Build and deserialize
        builder
            .build()
            .map_err(|e| {
                VasariError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VasariError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Scratch directory for staged files.
    pub fn scratch_dir(&self) -> PathBuf {
        self.data_root.join("cache").join("tmp")
    }

    /// Name of the default transport, if one is configured.
    pub fn default_transport(&self) -> Option<&str> {
        self.transport.as_deref()
    }
}
