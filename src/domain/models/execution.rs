//! Execution domain models.
//!
//! What the merge engine decides for a (module, tool) pair and what the
//! pipeline composer hands to the task-execution engine.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::policy::ToolExtras;
use super::tool::{ToolKind, ToolRuntime};

/// Name of the per-module aggregate verification step.
pub const VERIFY_TASK: &str = "check";

/// Name of the compile step the compiler escalation flag is forwarded to.
pub const COMPILE_TASK: &str = "compileKotlin";

/// Fully qualified task path, `module:task`.
pub fn task_path(module: &str, task: &str) -> String {
    format!("{module}:{task}")
}

/// Fully resolved configuration for one (module, tool) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveSettings {
    pub tool: ToolKind,
    /// A finding fails the build
    pub fail_on_findings: bool,
    /// Findings are reported verbosely
    pub verbose: bool,
    pub xml_reports: bool,
    pub html_reports: bool,
    pub tool_version: String,
    /// Rule configuration resolved against the pipeline root
    pub config_file: Option<PathBuf>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub extras: ToolExtras,
}

/// Non-fatal warning attached to an emitted unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// The tool runtime could not be confirmed at configuration time;
    /// the task will fail at execution time if it is really missing
    RuntimeUnavailable {
        module: String,
        tool: ToolKind,
        runtime: ToolRuntime,
    },
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RuntimeUnavailable {
                module,
                tool,
                runtime,
            } => write!(
                f,
                "{tool} on '{module}' needs runtime '{runtime}', which could not be confirmed"
            ),
        }
    }
}

/// Why a tool does not apply to a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Module is listed in `ignore_projects`
    IgnoredModule,
    /// Tool master switch is off
    Disabled,
    /// Module has none of the capabilities the tool requires
    Unsupported,
}

/// Merge engine outcome for one (module, tool) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeDecision {
    Skip(SkipReason),
    Applicable {
        settings: EffectiveSettings,
        advisories: Vec<Advisory>,
    },
}

impl MergeDecision {
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip(_))
    }

    pub fn settings(&self) -> Option<&EffectiveSettings> {
        match self {
            Self::Skip(_) => None,
            Self::Applicable { settings, .. } => Some(settings),
        }
    }
}

/// Command line the task-execution engine runs for tools without a host plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Maven coordinates of the tool distribution
    pub artifact: String,
    pub main_class: String,
    pub args: Vec<String>,
    /// Report directory, relative to the pipeline root
    pub output_dir: PathBuf,
    /// Extra files whose changes invalidate the task
    pub inputs: Vec<PathBuf>,
    /// Findings exit non-zero; the runner treats that as success when set
    pub ignore_exit_code: bool,
}

/// One schedulable tool invocation against one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionUnit {
    pub module_name: String,
    pub tool: ToolKind,
    pub task_path: String,
    pub settings: EffectiveSettings,
    /// Prerequisites of this unit itself; sibling tools never depend on each other
    pub depends_on: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation: Option<Invocation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<Advisory>,
}

/// The module's existing compile step, as seen by the compiler escalation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileUnit {
    pub task_path: String,
    pub all_warnings_as_errors: bool,
}

/// Per-module aggregate verification step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyStep {
    pub task_path: String,
    pub prerequisites: Vec<String>,
}

/// `from` must finish before `to` runs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrerequisiteEdge {
    pub from: String,
    pub to: String,
}

/// Everything composed for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePlan {
    pub module: String,
    pub verify: VerifyStep,
    /// Units attached to the verify step, in tool priority order
    pub units: Vec<ExecutionUnit>,
    /// Units registered for manual use only, never attached to the verify step
    pub auxiliary_units: Vec<ExecutionUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile: Option<CompileUnit>,
}

impl ModulePlan {
    pub fn unit(&self, tool: ToolKind) -> Option<&ExecutionUnit> {
        self.units.iter().find(|unit| unit.tool == tool)
    }

    pub fn tools(&self) -> Vec<ToolKind> {
        self.units.iter().map(|unit| unit.tool).collect()
    }

    pub fn advisories(&self) -> impl Iterator<Item = &Advisory> {
        self.units
            .iter()
            .chain(&self.auxiliary_units)
            .flat_map(|unit| unit.advisories.iter())
    }
}

/// Composition result for a whole run, ordered by module name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelinePlan {
    pub modules: Vec<ModulePlan>,
    pub edges: Vec<PrerequisiteEdge>,
}

impl PipelinePlan {
    pub fn module(&self, name: &str) -> Option<&ModulePlan> {
        self.modules.iter().find(|plan| plan.module == name)
    }

    pub fn unit_count(&self) -> usize {
        self.modules.iter().map(|plan| plan.units.len()).sum()
    }

    pub fn advisories(&self) -> Vec<&Advisory> {
        self.modules.iter().flat_map(ModulePlan::advisories).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_path() {
        assert_eq!(task_path("app", VERIFY_TASK), "app:check");
    }

    #[test]
    fn test_advisory_display() {
        let advisory = Advisory::RuntimeUnavailable {
            module: "core".to_string(),
            tool: ToolKind::DeepAnalyzer,
            runtime: ToolRuntime::AnalyzerCli,
        };
        assert_eq!(
            advisory.to_string(),
            "detekt on 'core' needs runtime 'analyzer_cli', which could not be confirmed"
        );
    }

    #[test]
    fn test_skip_has_no_settings() {
        let decision = MergeDecision::Skip(SkipReason::Disabled);
        assert!(decision.is_skip());
        assert!(decision.settings().is_none());
    }
}
