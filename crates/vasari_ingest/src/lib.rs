//! Staging and commit pipeline for Vasari assets.
//!
//! This crate turns three ingestion origins (an in-memory buffer, a remote
//! URL, and a local path) into one staging-and-commit flow:
//!
//! 1. Bytes land in a staged file named by the record's content key
//!    ([`TempStaging`] / [`StagedFile`]).
//! 2. The staged file is committed through the record's transport and the
//!    record is saved, wrapped by any registered [`AssetHook`]s
//!    ([`AssetPipeline`]).
//! 3. The staged file is released on every path out, including panics.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use vasari_core::{AssetRecord, InMemoryRecordStore, VasariConfig};
//! use vasari_ingest::{AssetPipeline, TempStaging};
//! use vasari_transport::{LocalTransport, TransportRegistry};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VasariConfig::load()?;
//!
//! let mut registry = TransportRegistry::new(config.transport.clone());
//! registry.register(
//!     "local",
//!     Arc::new(LocalTransport::new(config.data_root.join("assets"))?),
//! );
//!
//! let pipeline = AssetPipeline::new(
//!     Arc::new(registry),
//!     TempStaging::new(config.scratch_dir()),
//!     Arc::new(InMemoryRecordStore::new()),
//! );
//!
//! let mut record = AssetRecord::new();
//! pipeline
//!     .from_url(&mut record, "https://example.com/media/photo.png")
//!     .await?;
//! println!("stored as {:?}", record.name());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod hook;
mod pipeline;
mod staging;

pub use hook::AssetHook;
pub use pipeline::AssetPipeline;
pub use staging::{StagedFile, TempStaging};
pub use vasari_error::{IngestError, IngestErrorKind};
