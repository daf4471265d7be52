//! Module manifest
//!
//! YAML description of the module tree, standing in for the build-graph
//! enumerator:
//!
//! ```yaml
//! root:
//!   name: shop
//! modules:
//!   - name: app
//!     plugins: [com.android.application, kotlin-android]
//!   - name: core
//!     path: libs/core
//!     capabilities: [compiled_language_a]
//! ```
//!
//! A manifest without modules describes a single-project build: the root
//! project itself is the only module.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::domain::models::module::{Capability, ModuleDescriptor};
use crate::domain::ports::DescriptorSource;

/// Default manifest location, relative to the pipeline root.
pub const DEFAULT_MANIFEST: &str = ".code-quality/modules.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Manifest {
    #[serde(default)]
    pub root: ManifestModule,

    #[serde(default)]
    pub modules: Vec<ManifestModule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ManifestModule {
    pub name: String,

    /// Directory relative to the pipeline root; defaults to the module name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Applied build plugin ids
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Capabilities declared directly
    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

impl Default for ManifestModule {
    fn default() -> Self {
        Self {
            name: "root".to_string(),
            path: None,
            plugins: vec![],
            capabilities: vec![],
        }
    }
}

impl ManifestModule {
    fn to_descriptor(&self, default_path: &Path) -> ModuleDescriptor {
        let mut descriptor =
            ModuleDescriptor::from_plugins(self.name.clone(), self.plugins.iter().map(String::as_str));
        descriptor.capabilities.extend(self.capabilities.iter().copied());
        let path = self
            .path
            .as_deref()
            .map_or(default_path, Path::new);
        descriptor.with_path(relative(path))
    }
}

/// `.` segments dropped, so the root project is the empty path.
fn relative(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

impl Manifest {
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse module manifest")
    }

    /// Descriptors for every module, or for the root project alone when the
    /// manifest lists no modules.
    pub fn descriptors(&self) -> Vec<ModuleDescriptor> {
        if self.modules.is_empty() {
            return vec![self.root.to_descriptor(Path::new(""))];
        }
        self.modules
            .iter()
            .map(|module| module.to_descriptor(Path::new(&module.name)))
            .collect()
    }
}

/// Descriptor source reading a manifest file from disk.
#[derive(Debug, Clone)]
pub struct ManifestDescriptorSource {
    path: PathBuf,
}

impl ManifestDescriptorSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DescriptorSource for ManifestDescriptorSource {
    fn descriptors(&self) -> Result<Vec<ModuleDescriptor>> {
        let yaml = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read manifest {}", self.path.display()))?;
        let manifest = Manifest::parse(&yaml)
            .with_context(|| format!("Invalid manifest {}", self.path.display()))?;
        Ok(manifest.descriptors())
    }
}
