//! Tool catalogue.
//!
//! Every static-analysis facility the orchestrator knows about, in the fixed
//! priority order the pipeline composer walks them.

use serde::{Deserialize, Serialize};

use super::module::Capability;

/// One static-analysis or style-enforcement facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    /// Java style checker (checkstyle)
    #[serde(rename = "checkstyle")]
    StyleChecker,
    /// Deeper Kotlin static analyzer (detekt)
    #[serde(rename = "detekt")]
    DeepAnalyzer,
    /// Kotlin format checker (ktlint)
    #[serde(rename = "ktlint")]
    FormatChecker,
    /// Kotlin compiler warning escalation
    #[serde(rename = "kotlin")]
    CompilerWarnings,
    /// Android lint
    #[serde(rename = "lint")]
    Lint,
}

/// External runtime a tool may need installed before it can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolRuntime {
    /// Command-line distribution of the deeper analyzer
    AnalyzerCli,
}

impl ToolRuntime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnalyzerCli => "analyzer_cli",
        }
    }
}

impl std::fmt::Display for ToolRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tool needs `runtime` unless the module carries `exempt_when`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeGate {
    pub runtime: ToolRuntime,
    pub exempt_when: Capability,
}

impl ToolKind {
    /// Composition order.
    pub const PRIORITY: [Self; 5] = [
        Self::StyleChecker,
        Self::DeepAnalyzer,
        Self::FormatChecker,
        Self::CompilerWarnings,
        Self::Lint,
    ];

    /// Name used in configuration blocks and unit descriptors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StyleChecker => "checkstyle",
            Self::DeepAnalyzer => "detekt",
            Self::FormatChecker => "ktlint",
            Self::CompilerWarnings => "kotlin",
            Self::Lint => "lint",
        }
    }

    /// Task registered for this tool. The compiler escalation has no task of
    /// its own; it toggles a flag on the compile step instead.
    pub fn task_name(&self) -> Option<&'static str> {
        match self {
            Self::StyleChecker => Some("checkstyle"),
            Self::DeepAnalyzer => Some("detektCheck"),
            Self::FormatChecker => Some("ktlint"),
            Self::CompilerWarnings => None,
            Self::Lint => Some("lint"),
        }
    }

    /// Capability sets the tool accepts. The tool applies when the module
    /// carries every capability of at least one set.
    pub fn capability_requirements(&self) -> &'static [&'static [Capability]] {
        match self {
            Self::StyleChecker => &[&[Capability::CompiledLanguageA], &[Capability::PackagedComponent]],
            Self::DeepAnalyzer => &[&[Capability::CompiledLanguageB], &[Capability::PackagedComponent]],
            Self::FormatChecker | Self::CompilerWarnings => &[&[Capability::CompiledLanguageB]],
            // Plain Java modules only get lint when the standalone lint plugin is applied.
            Self::Lint => &[
                &[Capability::PackagedComponent],
                &[Capability::CompiledLanguageA, Capability::LintRuntimePresent],
            ],
        }
    }

    pub fn runtime_gate(&self) -> Option<RuntimeGate> {
        match self {
            Self::DeepAnalyzer => Some(RuntimeGate {
                runtime: ToolRuntime::AnalyzerCli,
                exempt_when: Capability::CompiledLanguageB,
            }),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::PRIORITY.into_iter().find(|tool| tool.name() == name)
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
