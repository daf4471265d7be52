//! Code Quality Tools - build-time quality orchestrator
//!
//! Decides, per module of a multi-module build, which static-analysis tools
//! apply (style checker, deeper analyzer, Kotlin format checker,
//! compiler-warning escalation, lint), resolves each tool's effective
//! settings from a global policy and per-tool overrides, and wires the
//! resulting units into the module's verification step.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Capabilities, tool catalogue, policy and
//!   execution models, and the probe ports
//! - **Service Layer** (`services`): Policy model, merge engine, pipeline composer
//! - **Application Layer** (`application`): Two-phase orchestration run
//! - **Infrastructure Layer** (`infrastructure`): Configuration, logging, module manifest
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use code_quality_tools::application::Orchestrator;
//! use code_quality_tools::infrastructure::config::ConfigLoader;
//! use code_quality_tools::infrastructure::manifest::ManifestDescriptorSource;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load(".")?;
//!     let orchestrator = Orchestrator::from_config(&config, ".")?;
//!     let source = ManifestDescriptorSource::new(".code-quality/modules.yaml");
//!     let descriptors = orchestrator.collect_descriptors(&source)?;
//!     let plan = orchestrator.compose_pipeline(&descriptors)?;
//!     println!("{} units", plan.unit_count());
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::{DescriptorSet, Orchestrator};
pub use domain::error::{ConfigurationError, DomainError, PipelineError};
pub use domain::models::{
    Advisory, Capability, Config, ExecutionUnit, MergeDecision, ModuleDescriptor, ModulePlan,
    PipelinePlan, SkipReason, ToolKind,
};
pub use domain::ports::{CapabilityProbe, DescriptorSource, PathResolver, RuntimeProbe};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{MergeEngine, PipelineComposer, PolicyModel};
