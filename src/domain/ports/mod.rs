//! Port trait definitions (Hexagonal Architecture)
//!
//! The seams between the orchestration core and its collaborators:
//! - CapabilityProbe: module capability predicates
//! - RuntimeProbe: is a tool runtime installed
//! - PathResolver: root-relative config file resolution
//! - DescriptorSource: the module enumerator
//!
//! Keeping these explicit lets the merge engine stay pure and testable
//! without a real build system or tool runtime present.

pub mod capability_probe;
pub mod descriptor_source;
pub mod path_resolver;
pub mod runtime_probe;

pub use capability_probe::CapabilityProbe;
pub use descriptor_source::DescriptorSource;
pub use path_resolver::PathResolver;
pub use runtime_probe::RuntimeProbe;
