use crate::domain::models::module::ModuleDescriptor;
use crate::domain::models::tool::ToolRuntime;

/// Port answering "is tool runtime R available for this module?"
///
/// A `false` answer never skips a tool; the merge engine attaches a
/// runtime-unavailable advisory and leaves the failure to execution time.
pub trait RuntimeProbe: Send + Sync {
    fn is_available(&self, module: &ModuleDescriptor, runtime: ToolRuntime) -> bool;
}
