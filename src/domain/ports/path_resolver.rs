use std::path::{Path, PathBuf};

/// Port resolving config file references against the pipeline root.
pub trait PathResolver: Send + Sync {
    /// Resolve a root-relative reference. Absolute references pass through.
    fn resolve(&self, reference: &str) -> PathBuf;

    /// Resolve a path inside a module directory.
    fn resolve_in_module(&self, module_dir: &Path, reference: &str) -> PathBuf {
        let relative = module_dir.join(reference);
        self.resolve(&relative.to_string_lossy())
    }
}
