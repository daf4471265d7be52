//! Shared helpers for integration tests.

#![allow(dead_code)]

use code_quality_tools::domain::models::config::Config;
use code_quality_tools::domain::models::module::{Capability, ModuleDescriptor};
use code_quality_tools::domain::models::tool::ToolKind;
use code_quality_tools::Orchestrator;

pub const ROOT: &str = "/repo";

pub fn module(name: &str, capabilities: &[Capability]) -> ModuleDescriptor {
    ModuleDescriptor::new(name, capabilities.iter().copied())
}

pub fn orchestrator(config: &Config) -> Orchestrator {
    Orchestrator::from_config(config, ROOT).expect("config should build a policy")
}

/// Set the `failure_override` of one tool block.
pub fn set_failure_override(config: &mut Config, tool: ToolKind, value: Option<bool>) {
    match tool {
        ToolKind::StyleChecker => config.checkstyle.failure_override = value,
        ToolKind::DeepAnalyzer => config.detekt.failure_override = value,
        ToolKind::FormatChecker => config.ktlint.failure_override = value,
        ToolKind::CompilerWarnings => config.kotlin.failure_override = value,
        ToolKind::Lint => config.lint.failure_override = value,
    }
}

pub fn set_enabled(config: &mut Config, tool: ToolKind, enabled: bool) {
    match tool {
        ToolKind::StyleChecker => config.checkstyle.enabled = enabled,
        ToolKind::DeepAnalyzer => config.detekt.enabled = enabled,
        ToolKind::FormatChecker => config.ktlint.enabled = enabled,
        ToolKind::CompilerWarnings => config.kotlin.enabled = enabled,
        ToolKind::Lint => config.lint.enabled = enabled,
    }
}
