//! Error types for the Vasari asset library.
//!
//! This crate provides the foundation error types used throughout the Vasari
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vasari_error::{IngestError, IngestErrorKind, VasariResult};
//!
//! fn stage_asset() -> VasariResult<()> {
//!     Err(IngestError::new(IngestErrorKind::Fetch(
//!         "connection refused".to_string(),
//!     )))?
//! }
//!
//! match stage_asset() {
//!     Ok(()) => println!("staged"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod hook;
mod ingest;
mod record;
mod transport;

pub use config::ConfigError;
pub use error::{VasariError, VasariErrorKind, VasariResult};
pub use hook::HookError;
pub use ingest::{IngestError, IngestErrorKind};
pub use record::{RecordError, RecordErrorKind};
pub use transport::{TransportError, TransportErrorKind};
