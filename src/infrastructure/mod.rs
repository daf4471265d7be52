//! Infrastructure layer module
//!
//! Adapters for everything outside the orchestration core:
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)
//! - Module manifest reading (the descriptor source)
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
pub mod manifest;
