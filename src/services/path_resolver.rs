use std::path::{Path, PathBuf};

use crate::domain::ports::PathResolver;

/// Resolves references by joining them onto the pipeline root.
#[derive(Debug, Clone)]
pub struct RootPathResolver {
    root: PathBuf,
}

impl RootPathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PathResolver for RootPathResolver {
    fn resolve(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_reference_joins_root() {
        let resolver = RootPathResolver::new("/repo");
        assert_eq!(
            resolver.resolve("config/checkstyle/checkstyle.xml"),
            PathBuf::from("/repo/config/checkstyle/checkstyle.xml")
        );
    }

    #[test]
    fn test_absolute_reference_passes_through() {
        let resolver = RootPathResolver::new("/repo");
        assert_eq!(
            resolver.resolve("/etc/detekt.yml"),
            PathBuf::from("/etc/detekt.yml")
        );
    }

    #[test]
    fn test_module_reference_is_under_module_dir() {
        let resolver = RootPathResolver::new("/repo");
        assert_eq!(
            resolver.resolve_in_module(Path::new("app"), "detekt-baseline.xml"),
            PathBuf::from("/repo/app/detekt-baseline.xml")
        );
    }
}
