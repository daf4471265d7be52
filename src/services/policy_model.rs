//! Policy Model
//!
//! Turns the loaded configuration into the immutable global policy and one
//! settings snapshot per tool. The only validation performed here is the
//! empty config-file check; applicability is the merge engine's job.

use std::collections::BTreeMap;

use tracing::instrument;

use crate::domain::error::ConfigurationError;
use crate::domain::models::config::Config;
use crate::domain::models::policy::{
    CommonSettings, DeepAnalyzerExtras, FormatCheckerExtras, GlobalPolicy, LintExtras,
    StyleCheckerExtras, ToolExtras, ToolSettings,
};
use crate::domain::models::tool::ToolKind;

/// Kotlin sources the format checker looks at.
const KOTLIN_INCLUDE: [&str; 2] = ["**/*.kt", "**/*.kts"];
const KOTLIN_EXCLUDE: [&str; 4] = ["build/", "build/**", "generated/", "src/test/snapshots/"];
const EDITORCONFIG: &str = ".editorconfig";

/// Read-only view of the global policy and every tool's settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyModel {
    global: GlobalPolicy,
    tools: BTreeMap<ToolKind, ToolSettings>,
}

impl PolicyModel {
    /// Build the model from explicit parts.
    ///
    /// Tools missing from `tools` fall back to their defaults.
    pub fn new(
        global: GlobalPolicy,
        tools: impl IntoIterator<Item = ToolSettings>,
    ) -> Result<Self, ConfigurationError> {
        let mut by_kind: BTreeMap<ToolKind, ToolSettings> = Self::from_config(&Config::default())?
            .tools;
        for settings in tools {
            by_kind.insert(settings.kind(), settings);
        }

        for settings in by_kind.values() {
            Self::check_config_path(settings)?;
        }

        Ok(Self {
            global,
            tools: by_kind,
        })
    }

    /// Build the model from loaded configuration.
    #[instrument(skip(config), err)]
    pub fn from_config(config: &Config) -> Result<Self, ConfigurationError> {
        let global = GlobalPolicy {
            fail_early: config.fail_early,
            emit_xml_reports: config.xml_reports,
            emit_html_reports: config.html_reports,
            ignored_modules: config.ignore_projects.iter().cloned().collect(),
        };

        let checkstyle = &config.checkstyle;
        let detekt = &config.detekt;
        let ktlint = &config.ktlint;
        let kotlin = &config.kotlin;
        let lint = &config.lint;

        let tools = [
            ToolSettings {
                common: CommonSettings {
                    enabled: checkstyle.enabled,
                    tool_version: checkstyle.tool_version.clone(),
                    config_file_ref: checkstyle.config_file.clone(),
                    failure_override: checkstyle.failure_override,
                    report_verbosity_override: checkstyle.report_verbosity_override,
                },
                extras: ToolExtras::StyleChecker(StyleCheckerExtras {
                    source: checkstyle.source.clone(),
                    include: checkstyle.include.clone(),
                    exclude: checkstyle.exclude.clone(),
                }),
            },
            ToolSettings {
                common: CommonSettings {
                    enabled: detekt.enabled,
                    tool_version: detekt.tool_version.clone(),
                    config_file_ref: detekt.config_file.clone(),
                    failure_override: detekt.failure_override,
                    report_verbosity_override: detekt.report_verbosity_override,
                },
                extras: ToolExtras::DeepAnalyzer(DeepAnalyzerExtras {
                    input: detekt.input.clone(),
                    baseline_file_name: detekt.baseline_file_name.clone(),
                    fail_fast: detekt.fail_fast,
                    build_upon_default_config: detekt.build_upon_default_config,
                    parallel: detekt.parallel,
                }),
            },
            ToolSettings {
                common: CommonSettings {
                    enabled: ktlint.enabled,
                    tool_version: ktlint.tool_version.clone(),
                    config_file_ref: ktlint.config_file.clone(),
                    failure_override: ktlint.failure_override,
                    report_verbosity_override: ktlint.report_verbosity_override,
                },
                extras: ToolExtras::FormatChecker(FormatCheckerExtras {
                    include: KOTLIN_INCLUDE.iter().map(ToString::to_string).collect(),
                    exclude: KOTLIN_EXCLUDE.iter().map(ToString::to_string).collect(),
                    editorconfig: EDITORCONFIG.to_string(),
                }),
            },
            ToolSettings {
                common: CommonSettings {
                    enabled: kotlin.enabled,
                    tool_version: kotlin.tool_version.clone(),
                    config_file_ref: None,
                    failure_override: kotlin.failure_override,
                    report_verbosity_override: kotlin.report_verbosity_override,
                },
                extras: ToolExtras::CompilerWarnings,
            },
            ToolSettings {
                common: CommonSettings {
                    enabled: lint.enabled,
                    tool_version: lint.tool_version.clone(),
                    config_file_ref: lint.config_file.clone(),
                    failure_override: lint.failure_override,
                    report_verbosity_override: lint.report_verbosity_override,
                },
                extras: ToolExtras::Lint(LintExtras {
                    check_all_warnings: lint.check_all_warnings,
                    absolute_paths: lint.absolute_paths,
                    baseline_file_name: lint.baseline_file_name.clone(),
                    check_release_builds: lint.check_release_builds,
                    check_test_sources: lint.check_test_sources,
                    check_dependencies: lint.check_dependencies,
                    text_report: lint.text_report,
                    text_output: lint.text_output.clone(),
                }),
            },
        ];

        let mut by_kind = BTreeMap::new();
        for settings in tools {
            Self::check_config_path(&settings)?;
            by_kind.insert(settings.kind(), settings);
        }

        Ok(Self {
            global,
            tools: by_kind,
        })
    }

    fn check_config_path(settings: &ToolSettings) -> Result<(), ConfigurationError> {
        match settings.common.config_file_ref.as_deref() {
            Some(path) if path.is_empty() => Err(ConfigurationError::EmptyConfigPath {
                tool: settings.kind(),
            }),
            _ => Ok(()),
        }
    }

    pub fn global(&self) -> &GlobalPolicy {
        &self.global
    }

    /// Settings snapshot for `tool`. Every tool always has one.
    pub fn settings(&self, tool: ToolKind) -> &ToolSettings {
        &self.tools[&tool]
    }

    /// Settings in tool priority order.
    pub fn tools(&self) -> impl Iterator<Item = &ToolSettings> {
        self.tools.values()
    }
}
