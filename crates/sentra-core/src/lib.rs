//! Sentra Core - Foundation crate for the Sentra inspection toolkit.
//!
//! This crate provides shared types, error handling, and configuration
//! management that the other Sentra crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared domain types (`InfoType`, `Likelihood`)
//!
//! # Example
//!
//! ```rust
//! use sentra_core::{AppConfig, InfoType, Likelihood};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! assert!(config.inspection.include_quote);
//!
//! let info_type = InfoType::new("EMAIL_ADDRESS")?;
//! assert_eq!(info_type.as_str(), "EMAIL_ADDRESS");
//! assert!(Likelihood::Possible < Likelihood::VeryLikely);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, InspectionSettings, ServiceConfig};
pub use error::{ConfigError, ConfigResult, Result, SentraError};
pub use types::{InfoType, Likelihood};
