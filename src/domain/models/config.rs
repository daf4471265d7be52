use serde::{Deserialize, Serialize};

use super::tool::ToolRuntime;

/// Main configuration structure for code-quality-tools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// When true every enabled tool is configured so that a single finding fails the build
    #[serde(default = "default_true")]
    pub fail_early: bool,

    /// Emit xml reports from every tool that supports them
    #[serde(default = "default_true")]
    pub xml_reports: bool,

    /// Emit html reports from every tool that supports them
    #[serde(default)]
    pub html_reports: bool,

    /// Modules, identified by name, that no tool is applied to
    #[serde(default)]
    pub ignore_projects: Vec<String>,

    /// Style checker configuration
    #[serde(default)]
    pub checkstyle: CheckstyleConfig,

    /// Deeper analyzer configuration
    #[serde(default)]
    pub detekt: DetektConfig,

    /// Kotlin format checker configuration
    #[serde(default)]
    pub ktlint: KtlintConfig,

    /// Kotlin compiler warning escalation
    #[serde(default)]
    pub kotlin: KotlinConfig,

    /// Lint configuration
    #[serde(default)]
    pub lint: LintConfig,

    /// Tool runtimes known to be installed on this machine
    #[serde(default)]
    pub available_runtimes: Vec<ToolRuntime>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

const fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fail_early: true,
            xml_reports: true,
            html_reports: false,
            ignore_projects: vec![],
            checkstyle: CheckstyleConfig::default(),
            detekt: DetektConfig::default(),
            ktlint: KtlintConfig::default(),
            kotlin: KotlinConfig::default(),
            lint: LintConfig::default(),
            available_runtimes: vec![],
            logging: LoggingConfig::default(),
        }
    }
}

/// Checkstyle block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CheckstyleConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_checkstyle_version")]
    pub tool_version: String,

    /// Rule file, relative to the pipeline root
    #[serde(default = "default_checkstyle_config_file")]
    pub config_file: Option<String>,

    /// Overrides `fail_early` for failing on violations
    #[serde(default)]
    pub failure_override: Option<bool>,

    /// Overrides `fail_early` for showing violations
    #[serde(default)]
    pub report_verbosity_override: Option<bool>,

    /// Source directory, relative to the module
    #[serde(default = "default_source_dir")]
    pub source: String,

    #[serde(default = "default_checkstyle_include")]
    pub include: Vec<String>,

    #[serde(default = "default_checkstyle_exclude")]
    pub exclude: Vec<String>,
}

fn default_checkstyle_version() -> String {
    "10.12.4".to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_checkstyle_config_file() -> Option<String> {
    Some("config/checkstyle/checkstyle.xml".to_string())
}

fn default_source_dir() -> String {
    "src".to_string()
}

fn default_checkstyle_include() -> Vec<String> {
    vec!["**/*.java".to_string()]
}

fn default_checkstyle_exclude() -> Vec<String> {
    vec!["**/gen/**".to_string()]
}

impl Default for CheckstyleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tool_version: default_checkstyle_version(),
            config_file: default_checkstyle_config_file(),
            failure_override: None,
            report_verbosity_override: None,
            source: default_source_dir(),
            include: default_checkstyle_include(),
            exclude: default_checkstyle_exclude(),
        }
    }
}

/// Detekt block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DetektConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_detekt_version")]
    pub tool_version: String,

    /// Rule file, relative to the pipeline root
    #[serde(default = "default_detekt_config_file")]
    pub config_file: Option<String>,

    #[serde(default)]
    pub failure_override: Option<bool>,

    #[serde(default)]
    pub report_verbosity_override: Option<bool>,

    /// Input directory, relative to the module
    #[serde(default = "default_source_dir")]
    pub input: String,

    /// Baseline file, relative to the module
    #[serde(default)]
    pub baseline_file_name: Option<String>,

    #[serde(default)]
    pub fail_fast: bool,

    #[serde(default)]
    pub build_upon_default_config: bool,

    /// Forwarded to the analyzer; the orchestrator itself does not parallelise it
    #[serde(default)]
    pub parallel: bool,
}

fn default_detekt_version() -> String {
    "1.23.3".to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_detekt_config_file() -> Option<String> {
    Some("config/detekt/detekt.yml".to_string())
}

impl Default for DetektConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tool_version: default_detekt_version(),
            config_file: default_detekt_config_file(),
            failure_override: None,
            report_verbosity_override: None,
            input: default_source_dir(),
            baseline_file_name: None,
            fail_fast: false,
            build_upon_default_config: false,
            parallel: false,
        }
    }
}

/// Ktlint block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct KtlintConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_ktlint_version")]
    pub tool_version: String,

    #[serde(default)]
    pub config_file: Option<String>,

    #[serde(default)]
    pub failure_override: Option<bool>,

    #[serde(default)]
    pub report_verbosity_override: Option<bool>,
}

fn default_ktlint_version() -> String {
    "1.0.1".to_string()
}

impl Default for KtlintConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tool_version: default_ktlint_version(),
            config_file: None,
            failure_override: None,
            report_verbosity_override: None,
        }
    }
}

/// Kotlin compiler block
///
/// `failure_override` is the `allWarningsAsErrors` flag forwarded to the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct KotlinConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_kotlin_version")]
    pub tool_version: String,

    #[serde(default)]
    pub failure_override: Option<bool>,

    #[serde(default)]
    pub report_verbosity_override: Option<bool>,
}

fn default_kotlin_version() -> String {
    "1.9.20".to_string()
}

impl Default for KotlinConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tool_version: default_kotlin_version(),
            failure_override: None,
            report_verbosity_override: None,
        }
    }
}

/// Lint block
///
/// `failure_override` maps to abort-on-error and `report_verbosity_override`
/// to warnings-as-errors. The remaining options are forwarded only when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LintConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_lint_version")]
    pub tool_version: String,

    /// `lint.xml`, relative to the pipeline root
    #[serde(default)]
    pub config_file: Option<String>,

    #[serde(default)]
    pub failure_override: Option<bool>,

    #[serde(default)]
    pub report_verbosity_override: Option<bool>,

    #[serde(default)]
    pub check_all_warnings: Option<bool>,

    #[serde(default)]
    pub absolute_paths: Option<bool>,

    /// Baseline file, relative to the module
    #[serde(default)]
    pub baseline_file_name: Option<String>,

    #[serde(default)]
    pub check_release_builds: Option<bool>,

    #[serde(default)]
    pub check_test_sources: Option<bool>,

    #[serde(default)]
    pub check_dependencies: Option<bool>,

    #[serde(default)]
    pub text_report: Option<bool>,

    #[serde(default = "default_text_output")]
    pub text_output: String,
}

fn default_lint_version() -> String {
    "31.1.2".to_string()
}

fn default_text_output() -> String {
    "stdout".to_string()
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tool_version: default_lint_version(),
            config_file: None,
            failure_override: None,
            report_verbosity_override: None,
            check_all_warnings: None,
            absolute_paths: None,
            baseline_file_name: None,
            check_release_builds: None,
            check_test_sources: None,
            check_dependencies: None,
            text_report: None,
            text_output: default_text_output(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; stderr only when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
