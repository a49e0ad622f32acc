//! Shared configuration and common types for the Lime token services
//!
//! This crate provides functionality used across the workspace:
//! - Configuration types (token secret, lifetimes, logging)
//! - Tracing bootstrap
//! - Error response structures

pub mod config;
pub mod errors;
pub mod logging;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LogFormat, LoggingConfig, TokenConfig};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use logging::init_tracing;
