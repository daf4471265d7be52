pub mod capability_probe;
pub mod invocation;
pub mod merge_engine;
pub mod path_resolver;
pub mod pipeline_composer;
pub mod policy_model;
pub mod verify_graph;

pub use capability_probe::{DeclaredRuntimeProbe, DescriptorCapabilityProbe};
pub use merge_engine::MergeEngine;
pub use path_resolver::RootPathResolver;
pub use pipeline_composer::PipelineComposer;
pub use policy_model::PolicyModel;
pub use verify_graph::VerifyGraph;
