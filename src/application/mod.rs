pub mod orchestrator;

pub use orchestrator::{DescriptorSet, Orchestrator};
