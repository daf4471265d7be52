//! Policy domain model.
//!
//! The global policy and the per-tool settings snapshots the merge engine
//! reads. Both are immutable once the policy model has been built.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::tool::ToolKind;

/// Process-wide defaults for one orchestration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalPolicy {
    /// Any finding aborts the run
    pub fail_early: bool,
    pub emit_xml_reports: bool,
    pub emit_html_reports: bool,
    /// Module names excluded from every tool
    pub ignored_modules: BTreeSet<String>,
}

impl Default for GlobalPolicy {
    fn default() -> Self {
        Self {
            fail_early: true,
            emit_xml_reports: true,
            emit_html_reports: false,
            ignored_modules: BTreeSet::new(),
        }
    }
}

impl GlobalPolicy {
    pub fn is_ignored(&self, module_name: &str) -> bool {
        self.ignored_modules.contains(module_name)
    }
}

/// Settings every tool shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonSettings {
    /// Tool-level master switch
    pub enabled: bool,
    /// Pinned dependency version
    pub tool_version: String,
    /// Rule configuration, relative to the pipeline root
    pub config_file_ref: Option<String>,
    /// Replaces `fail_early` for this tool only
    pub failure_override: Option<bool>,
    /// Replaces the show/abort posture for this tool only
    pub report_verbosity_override: Option<bool>,
}

impl CommonSettings {
    pub fn new(tool_version: impl Into<String>) -> Self {
        Self {
            enabled: true,
            tool_version: tool_version.into(),
            config_file_ref: None,
            failure_override: None,
            report_verbosity_override: None,
        }
    }
}

/// Checkstyle-only options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleCheckerExtras {
    pub source: String,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Detekt-only options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepAnalyzerExtras {
    pub input: String,
    pub baseline_file_name: Option<String>,
    pub fail_fast: bool,
    pub build_upon_default_config: bool,
    pub parallel: bool,
}

/// Ktlint-only options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatCheckerExtras {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    /// Shared `.editorconfig`, relative to the pipeline root
    pub editorconfig: String,
}

/// Lint-only options. `None` leaves the lint default untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintExtras {
    pub check_all_warnings: Option<bool>,
    pub absolute_paths: Option<bool>,
    pub baseline_file_name: Option<String>,
    pub check_release_builds: Option<bool>,
    pub check_test_sources: Option<bool>,
    pub check_dependencies: Option<bool>,
    pub text_report: Option<bool>,
    pub text_output: String,
}

/// Tool-specific payload. Never consulted during precedence resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum ToolExtras {
    #[serde(rename = "checkstyle")]
    StyleChecker(StyleCheckerExtras),
    #[serde(rename = "detekt")]
    DeepAnalyzer(DeepAnalyzerExtras),
    #[serde(rename = "ktlint")]
    FormatChecker(FormatCheckerExtras),
    #[serde(rename = "kotlin")]
    CompilerWarnings,
    #[serde(rename = "lint")]
    Lint(LintExtras),
}

impl ToolExtras {
    pub fn kind(&self) -> ToolKind {
        match self {
            Self::StyleChecker(_) => ToolKind::StyleChecker,
            Self::DeepAnalyzer(_) => ToolKind::DeepAnalyzer,
            Self::FormatChecker(_) => ToolKind::FormatChecker,
            Self::CompilerWarnings => ToolKind::CompilerWarnings,
            Self::Lint(_) => ToolKind::Lint,
        }
    }

    /// Include globs handed to the tool, if it filters files itself.
    pub fn include(&self) -> &[String] {
        match self {
            Self::StyleChecker(extras) => &extras.include,
            Self::FormatChecker(extras) => &extras.include,
            _ => &[],
        }
    }

    pub fn exclude(&self) -> &[String] {
        match self {
            Self::StyleChecker(extras) => &extras.exclude,
            Self::FormatChecker(extras) => &extras.exclude,
            _ => &[],
        }
    }
}

/// Immutable settings snapshot for one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSettings {
    pub common: CommonSettings,
    pub extras: ToolExtras,
}

impl ToolSettings {
    pub fn kind(&self) -> ToolKind {
        self.extras.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extras_kind() {
        let extras = ToolExtras::Lint(LintExtras::default());
        assert_eq!(extras.kind(), ToolKind::Lint);
        assert_eq!(ToolExtras::CompilerWarnings.kind(), ToolKind::CompilerWarnings);
    }

    #[test]
    fn test_globs_only_for_file_filtering_tools() {
        let extras = ToolExtras::StyleChecker(StyleCheckerExtras {
            source: "src".to_string(),
            include: vec!["**/*.java".to_string()],
            exclude: vec!["**/gen/**".to_string()],
        });
        assert_eq!(extras.include(), ["**/*.java".to_string()]);
        assert_eq!(extras.exclude(), ["**/gen/**".to_string()]);
        assert!(ToolExtras::CompilerWarnings.include().is_empty());
    }

    #[test]
    fn test_global_policy_ignore() {
        let policy = GlobalPolicy {
            ignored_modules: ["legacy".to_string()].into_iter().collect(),
            ..GlobalPolicy::default()
        };
        assert!(policy.is_ignored("legacy"));
        assert!(!policy.is_ignored("app"));
    }
}
