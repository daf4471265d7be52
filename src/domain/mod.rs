//! Domain layer for code-quality-tools
//!
//! This module contains the policy, module and execution models and the
//! ports the services are written against.

pub mod error;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use error::{ConfigurationError, DomainError, DomainResult, PipelineError};
