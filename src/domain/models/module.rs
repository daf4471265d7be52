//! Module domain model.
//!
//! A module is one unit of the codebase (an app or library subproject) that
//! tools are applied to independently. Descriptors are supplied by the
//! build-graph enumerator and never change during an orchestration run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Primitive capability a module may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Java-family compiled module
    CompiledLanguageA,
    /// Kotlin-family compiled module
    CompiledLanguageB,
    /// Android application, library, test or instant-app variant
    PackagedComponent,
    /// The standalone lint runtime is installed for this module
    LintRuntimePresent,
}

impl Capability {
    /// All capabilities, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::CompiledLanguageA,
        Self::CompiledLanguageB,
        Self::PackagedComponent,
        Self::LintRuntimePresent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompiledLanguageA => "compiled_language_a",
            Self::CompiledLanguageB => "compiled_language_b",
            Self::PackagedComponent => "packaged_component",
            Self::LintRuntimePresent => "lint_runtime_present",
        }
    }

    /// Map a build plugin id to the capability it implies, if any.
    pub fn from_plugin_id(plugin_id: &str) -> Option<Self> {
        match plugin_id {
            "java" | "java-library" | "java-gradle-plugin" => Some(Self::CompiledLanguageA),
            "kotlin"
            | "kotlin-android"
            | "org.jetbrains.kotlin.multiplatform"
            | "kotlin-platform-common"
            | "kotlin-platform-jvm"
            | "kotlin-platform-js" => Some(Self::CompiledLanguageB),
            "com.android.library"
            | "com.android.application"
            | "com.android.test"
            | "com.android.instantapp" => Some(Self::PackagedComponent),
            "com.android.lint" => Some(Self::LintRuntimePresent),
            _ => None,
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only description of one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Module name, matched against `ignore_projects`
    pub name: String,

    /// Module directory relative to the pipeline root
    pub path: PathBuf,

    /// Capabilities detected for this module
    pub capabilities: BTreeSet<Capability>,
}

impl ModuleDescriptor {
    /// Create a descriptor whose directory is named after the module.
    pub fn new(name: impl Into<String>, capabilities: impl IntoIterator<Item = Capability>) -> Self {
        let name = name.into();
        Self {
            path: PathBuf::from(&name),
            name,
            capabilities: capabilities.into_iter().collect(),
        }
    }

    /// Override the module directory.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Build a descriptor from applied plugin ids. Unknown ids are ignored.
    pub fn from_plugins<'a>(
        name: impl Into<String>,
        plugin_ids: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::new(
            name,
            plugin_ids.into_iter().filter_map(Capability::from_plugin_id),
        )
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}
