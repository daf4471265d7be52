//! Capability and runtime probes backed by module descriptors.

use std::collections::BTreeSet;

use crate::domain::models::module::{Capability, ModuleDescriptor};
use crate::domain::models::tool::ToolRuntime;
use crate::domain::ports::{CapabilityProbe, RuntimeProbe};

/// Answers capability queries straight from the descriptor's capability set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorCapabilityProbe;

impl DescriptorCapabilityProbe {
    pub fn new() -> Self {
        Self
    }
}

impl CapabilityProbe for DescriptorCapabilityProbe {
    fn has_capability(&self, module: &ModuleDescriptor, capability: Capability) -> bool {
        module.has(capability)
    }
}

/// Runtime probe fed by explicit declarations.
///
/// A runtime is available when it was declared installed through the
/// `available_runtimes` config list.
#[derive(Debug, Clone, Default)]
pub struct DeclaredRuntimeProbe {
    declared: BTreeSet<ToolRuntime>,
}

impl DeclaredRuntimeProbe {
    pub fn new(declared: impl IntoIterator<Item = ToolRuntime>) -> Self {
        Self {
            declared: declared.into_iter().collect(),
        }
    }
}

impl RuntimeProbe for DeclaredRuntimeProbe {
    fn is_available(&self, _module: &ModuleDescriptor, runtime: ToolRuntime) -> bool {
        self.declared.contains(&runtime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_probe_reads_capabilities() {
        let probe = DescriptorCapabilityProbe::new();
        let module = ModuleDescriptor::new("core", [Capability::CompiledLanguageA]);

        assert!(probe.has_capability(&module, Capability::CompiledLanguageA));
        assert!(!probe.has_capability(&module, Capability::CompiledLanguageB));
    }

    #[test]
    fn test_has_any_is_an_or() {
        let probe = DescriptorCapabilityProbe::new();
        let module = ModuleDescriptor::new("app", [Capability::PackagedComponent]);

        assert!(probe.has_any(
            &module,
            &[Capability::CompiledLanguageA, Capability::PackagedComponent]
        ));
        assert!(!probe.has_any(&module, &[Capability::CompiledLanguageB]));
        assert!(!probe.has_any(&module, &[]));
    }

    #[test]
    fn test_probe_answers_are_stable() {
        let probe = DescriptorCapabilityProbe::new();
        let module = ModuleDescriptor::new("app", Capability::ALL);
        for capability in Capability::ALL {
            let first = probe.has_capability(&module, capability);
            assert_eq!(first, probe.has_capability(&module, capability));
        }
    }

    #[test]
    fn test_has_all_is_an_and() {
        let probe = DescriptorCapabilityProbe::new();
        let plain = ModuleDescriptor::new("core", [Capability::CompiledLanguageA]);
        let with_lint = ModuleDescriptor::new(
            "core",
            [Capability::CompiledLanguageA, Capability::LintRuntimePresent],
        );
        let both = [Capability::CompiledLanguageA, Capability::LintRuntimePresent];

        assert!(probe.has_all(&with_lint, &both));
        assert!(!probe.has_all(&plain, &both));
        assert!(probe.has_all(&plain, &[]));
    }

    #[test]
    fn test_runtime_available_only_when_declared() {
        let module = ModuleDescriptor::new("app", Capability::ALL);

        assert!(!DeclaredRuntimeProbe::default().is_available(&module, ToolRuntime::AnalyzerCli));
        assert!(DeclaredRuntimeProbe::new([ToolRuntime::AnalyzerCli])
            .is_available(&module, ToolRuntime::AnalyzerCli));
    }
}
