use thiserror::Error;

use super::models::tool::ToolKind;

/// Malformed policy input. Fatal: raised before any module is processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{tool}: config_file is set to an empty path; remove it to leave it unset")]
    EmptyConfigPath { tool: ToolKind },
}

/// Errors raised while collecting descriptors or wiring the verify graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Module '{0}' is declared more than once")]
    DuplicateModule(String),

    #[error("Task {0} already exists in the pipeline graph")]
    DuplicateTask(String),

    #[error("Task {0} does not exist in the pipeline graph")]
    UnknownTask(String),

    #[error("Edge from {from} to {to} already exists")]
    DuplicateEdge { from: String, to: String },

    #[error("Adding edge from {from} to {to} would create a cycle")]
    Cycle { from: String, to: String },
}

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

pub type DomainResult<T> = Result<T, DomainError>;
