//! Vasari - Asset Ingestion and Transport Storage
//!
//! Vasari ingests binary assets from three origins (a remote URL, an
//! in-memory buffer, or a local path) and persists them through an
//! interchangeable storage backend ("transport"), producing a stable
//! record that can later be located, fetched, and deleted.
//!
//! # Features
//!
//! - **One commit flow**: All origins converge on staging-and-commit with
//!   guaranteed temp cleanup
//! - **Pluggable transports**: Filesystem and HTTP object-store backends
//!   included; records pin the backend that stored them
//! - **Set-once identity**: Content keys and extensions survive
//!   re-ingestion, so an asset's address never drifts
//! - **Lifecycle hooks**: Veto or observe store and remove units
//! - **Layered configuration**: Bundled defaults, home-directory and
//!   working-directory overrides
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vasari::{
//!     AssetPipeline, AssetRecord, InMemoryRecordStore, LocalTransport,
//!     TempStaging, TransportRegistry, VasariConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VasariConfig::load()?;
//!
//!     let mut registry = TransportRegistry::new(config.transport.clone());
//!     registry.register(
//!         "local",
//!         Arc::new(LocalTransport::new(config.data_root.join("assets"))?),
//!     );
//!
//!     let pipeline = AssetPipeline::new(
//!         Arc::new(registry),
//!         TempStaging::new(config.scratch_dir()),
//!         Arc::new(InMemoryRecordStore::new()),
//!     );
//!
//!     let mut record = AssetRecord::new();
//!     pipeline
//!         .from_url(&mut record, "https://example.com/media/photo.png")
//!         .await?;
//!
//!     println!("{:?}", pipeline.export_summary(&record).await);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Vasari is organized as a workspace with focused crates:
//!
//! - `vasari_error` - Error types
//! - `vasari_core` - Asset records, record store, configuration
//! - `vasari_transport` - Transport trait, backends, and registry
//! - `vasari_ingest` - Staging, lifecycle hooks, and the pipeline
//!
//! This crate (`vasari`) re-exports everything for convenience.

// Re-export the workspace crates
pub use vasari_core::*;
pub use vasari_error::*;
pub use vasari_ingest::*;
pub use vasari_transport::*;
