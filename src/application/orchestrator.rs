//! Two-phase orchestration run.
//!
//! Phase one collects every module descriptor; phase two composes the
//! pipeline from the finalized set. The merge engine never sees a module
//! whose capability data could still change.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::domain::error::{ConfigurationError, PipelineError};
use crate::domain::models::config::Config;
use crate::domain::models::execution::{MergeDecision, PipelinePlan};
use crate::domain::models::module::ModuleDescriptor;
use crate::domain::models::tool::ToolKind;
use crate::domain::ports::{CapabilityProbe, DescriptorSource, PathResolver, RuntimeProbe};
use crate::services::{
    DeclaredRuntimeProbe, DescriptorCapabilityProbe, MergeEngine, PipelineComposer, PolicyModel,
    RootPathResolver,
};

/// Finalized module descriptors, unique by name and sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorSet {
    modules: Vec<ModuleDescriptor>,
}

impl DescriptorSet {
    pub fn new(mut modules: Vec<ModuleDescriptor>) -> Result<Self, PipelineError> {
        let mut seen = BTreeSet::new();
        for module in &modules {
            if !seen.insert(module.name.as_str()) {
                return Err(PipelineError::DuplicateModule(module.name.clone()));
            }
        }
        modules.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { modules })
    }

    pub fn modules(&self) -> &[ModuleDescriptor] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Owns the read-only inputs of one orchestration run.
pub struct Orchestrator {
    policy: PolicyModel,
    capabilities: Box<dyn CapabilityProbe>,
    runtimes: Box<dyn RuntimeProbe>,
    paths: Box<dyn PathResolver>,
}

impl Orchestrator {
    pub fn new(
        policy: PolicyModel,
        capabilities: Box<dyn CapabilityProbe>,
        runtimes: Box<dyn RuntimeProbe>,
        paths: Box<dyn PathResolver>,
    ) -> Self {
        Self {
            policy,
            capabilities,
            runtimes,
            paths,
        }
    }

    /// Build an orchestrator with the descriptor-backed probes.
    ///
    /// Fails before any module is looked at when the policy is malformed.
    pub fn from_config(config: &Config, root: impl Into<PathBuf>) -> Result<Self, ConfigurationError> {
        let policy = PolicyModel::from_config(config)?;
        Ok(Self::new(
            policy,
            Box::new(DescriptorCapabilityProbe::new()),
            Box::new(DeclaredRuntimeProbe::new(
                config.available_runtimes.iter().copied(),
            )),
            Box::new(RootPathResolver::new(root)),
        ))
    }

    pub fn policy(&self) -> &PolicyModel {
        &self.policy
    }

    /// Phase one: read every descriptor from the enumerator.
    #[instrument(skip_all)]
    pub fn collect_descriptors(&self, source: &dyn DescriptorSource) -> Result<DescriptorSet> {
        let modules = source
            .descriptors()
            .context("Failed to collect module descriptors")?;
        let set = DescriptorSet::new(modules)?;
        info!(modules = set.len(), "module descriptors collected");
        Ok(set)
    }

    /// Phase two: decide and wire every (module, tool) pair.
    #[instrument(skip_all, fields(modules = descriptors.len()))]
    pub fn compose_pipeline(&self, descriptors: &DescriptorSet) -> Result<PipelinePlan, PipelineError> {
        PipelineComposer::new(self.engine()).compose(descriptors.modules())
    }

    /// Single merge decision, for inspection.
    pub fn decide(&self, module: &ModuleDescriptor, tool: ToolKind) -> MergeDecision {
        self.engine().decide(module, tool)
    }

    fn engine(&self) -> MergeEngine<'_> {
        MergeEngine::new(
            &self.policy,
            self.capabilities.as_ref(),
            self.runtimes.as_ref(),
            self.paths.as_ref(),
        )
    }
}
