use anyhow::Result;

use crate::domain::models::module::ModuleDescriptor;

/// Port for the external module enumerator.
///
/// Called once, in the collection phase, after every module's capability
/// data is final.
pub trait DescriptorSource {
    fn descriptors(&self) -> Result<Vec<ModuleDescriptor>>;
}
