use crate::domain::models::module::{Capability, ModuleDescriptor};

/// Port answering "does this module have capability C?"
///
/// Implementations must be pure: the same descriptor always yields the same
/// answer within one orchestration run. The core never caches answers.
pub trait CapabilityProbe: Send + Sync {
    fn has_capability(&self, module: &ModuleDescriptor, capability: Capability) -> bool;

    /// Composite predicate: true when the module has at least one of `capabilities`.
    fn has_any(&self, module: &ModuleDescriptor, capabilities: &[Capability]) -> bool {
        capabilities
            .iter()
            .any(|capability| self.has_capability(module, *capability))
    }

    /// Composite predicate: true when the module has every one of `capabilities`.
    fn has_all(&self, module: &ModuleDescriptor, capabilities: &[Capability]) -> bool {
        capabilities
            .iter()
            .all(|capability| self.has_capability(module, *capability))
    }
}
