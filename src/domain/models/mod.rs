pub mod config;
pub mod execution;
pub mod module;
pub mod policy;
pub mod tool;

pub use config::{
    CheckstyleConfig, Config, DetektConfig, KotlinConfig, KtlintConfig, LintConfig, LoggingConfig,
};
pub use execution::{
    task_path, Advisory, CompileUnit, EffectiveSettings, ExecutionUnit, Invocation, MergeDecision,
    ModulePlan, PipelinePlan, PrerequisiteEdge, SkipReason, VerifyStep, COMPILE_TASK, VERIFY_TASK,
};
pub use module::{Capability, ModuleDescriptor};
pub use policy::{
    CommonSettings, DeepAnalyzerExtras, FormatCheckerExtras, GlobalPolicy, LintExtras,
    StyleCheckerExtras, ToolExtras, ToolSettings,
};
pub use tool::{RuntimeGate, ToolKind, ToolRuntime};
