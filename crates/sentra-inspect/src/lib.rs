//! Sentra Inspect - client-side workflow for remote content inspection.
//!
//! This crate implements the caller's half of a managed data-loss-prevention
//! service: read a local file, build a typed inspection request naming the
//! sensitive-information categories to search for, submit it, and report the
//! findings the service returns.
//!
//! # Features
//!
//! - **Service Abstraction**: Narrow [`InspectionService`] trait so test
//!   doubles substitute with no network dependency
//! - **Closed Content Typing**: Exact-match classification of payloads as
//!   image or UTF-8 text
//! - **Guaranteed Release**: The service handle is closed on every exit path
//!   of the inspection workflow
//! - **HTTP Backend**: [`HttpInspectionService`] speaks a DLP-style REST
//!   wire format with bearer-token auth
//!
//! # Example
//!
//! ```rust
//! use sentra_core::InfoType;
//! use sentra_inspect::{inspect_file, HttpInspectionService, InspectConfig};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = Arc::new(HttpInspectionService::new("auth-token")?);
//!
//! let config = InspectConfig::new(vec![
//!     InfoType::new("PHONE_NUMBER")?,
//!     InfoType::new("EMAIL_ADDRESS")?,
//! ])
//! .with_include_quote(true);
//!
//! let result = inspect_file(
//!     service,
//!     "projects/my-project",
//!     Path::new("notes.txt"),
//!     "TEXT_UTF8",
//!     &config,
//! )
//! .await?;
//!
//! sentra_inspect::write_report(&mut std::io::stdout().lock(), &result)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod content;
pub mod error;
pub mod inspect;
pub mod report;
pub mod service;
pub mod services;

// Re-export commonly used types
pub use content::{ByteContentItem, ContentKind};
pub use error::{InspectError, Result};
pub use inspect::inspect_file;
pub use report::write_report;
pub use service::{
    ByteRange, Finding, InspectConfig, InspectRequest, InspectResult, InspectionService,
};
pub use services::HttpInspectionService;
