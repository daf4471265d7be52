//! Merge Engine
//!
//! Decides, for one (module, tool) pair, whether the tool applies and with
//! which effective settings. Precedence, highest first:
//!
//! 1. module listed in `ignore_projects` → skip
//! 2. tool disabled → skip
//! 3. module has none of the tool's required capabilities → skip
//! 4. applicable; `override ?? fail_early` for the fail and verbosity
//!    flags, report formats straight from the global policy
//!
//! Tools behind a runtime gate still apply when the runtime cannot be
//! confirmed; the decision carries a runtime-unavailable advisory instead.

use tracing::{debug, instrument, warn};

use crate::domain::models::execution::{Advisory, EffectiveSettings, MergeDecision, SkipReason};
use crate::domain::models::module::ModuleDescriptor;
use crate::domain::models::tool::ToolKind;
use crate::domain::ports::{CapabilityProbe, PathResolver, RuntimeProbe};

use super::policy_model::PolicyModel;

/// Pure decision function over an immutable policy model.
///
/// Holds only shared references, so one engine can be used from several
/// threads at once.
pub struct MergeEngine<'a> {
    policy: &'a PolicyModel,
    capabilities: &'a dyn CapabilityProbe,
    runtimes: &'a dyn RuntimeProbe,
    paths: &'a dyn PathResolver,
}

impl<'a> MergeEngine<'a> {
    pub fn new(
        policy: &'a PolicyModel,
        capabilities: &'a dyn CapabilityProbe,
        runtimes: &'a dyn RuntimeProbe,
        paths: &'a dyn PathResolver,
    ) -> Self {
        Self {
            policy,
            capabilities,
            runtimes,
            paths,
        }
    }

    pub fn policy(&self) -> &'a PolicyModel {
        self.policy
    }

    pub fn paths(&self) -> &'a dyn PathResolver {
        self.paths
    }

    #[instrument(skip_all, fields(module = %module.name, tool = %tool))]
    pub fn decide(&self, module: &ModuleDescriptor, tool: ToolKind) -> MergeDecision {
        let global = self.policy.global();
        let settings = self.policy.settings(tool);

        if global.is_ignored(&module.name) {
            debug!("module is ignored");
            return MergeDecision::Skip(SkipReason::IgnoredModule);
        }

        if !settings.common.enabled {
            debug!("tool is disabled");
            return MergeDecision::Skip(SkipReason::Disabled);
        }

        let required = tool.capability_requirements();
        if !required.is_empty()
            && !required
                .iter()
                .any(|all_of| self.capabilities.has_all(module, all_of))
        {
            debug!(?required, "module lacks required capabilities");
            return MergeDecision::Skip(SkipReason::Unsupported);
        }

        let effective = EffectiveSettings {
            tool,
            fail_on_findings: settings.common.failure_override.unwrap_or(global.fail_early),
            verbose: settings
                .common
                .report_verbosity_override
                .unwrap_or(global.fail_early),
            xml_reports: global.emit_xml_reports,
            html_reports: global.emit_html_reports,
            tool_version: settings.common.tool_version.clone(),
            config_file: settings
                .common
                .config_file_ref
                .as_deref()
                .map(|reference| self.paths.resolve(reference)),
            include: settings.extras.include().to_vec(),
            exclude: settings.extras.exclude().to_vec(),
            extras: settings.extras.clone(),
        };

        let mut advisories = Vec::new();
        if let Some(gate) = tool.runtime_gate() {
            let exempt = self.capabilities.has_capability(module, gate.exempt_when);
            if !exempt && !self.runtimes.is_available(module, gate.runtime) {
                warn!(runtime = %gate.runtime, "tool runtime could not be confirmed");
                advisories.push(Advisory::RuntimeUnavailable {
                    module: module.name.clone(),
                    tool,
                    runtime: gate.runtime,
                });
            }
        }

        MergeDecision::Applicable {
            settings: effective,
            advisories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::config::Config;
    use crate::domain::models::module::Capability;
    use crate::domain::models::tool::ToolRuntime;
    use crate::services::capability_probe::{DeclaredRuntimeProbe, DescriptorCapabilityProbe};
    use crate::services::path_resolver::RootPathResolver;
    use std::path::PathBuf;

    fn decide(config: &Config, module: &ModuleDescriptor, tool: ToolKind) -> MergeDecision {
        let policy = PolicyModel::from_config(config).unwrap();
        let probe = DescriptorCapabilityProbe::new();
        let runtimes = DeclaredRuntimeProbe::new(config.available_runtimes.iter().copied());
        let paths = RootPathResolver::new("/repo");
        MergeEngine::new(&policy, &probe, &runtimes, &paths).decide(module, tool)
    }

    fn java(name: &str) -> ModuleDescriptor {
        ModuleDescriptor::new(name, [Capability::CompiledLanguageA])
    }

    fn kotlin(name: &str) -> ModuleDescriptor {
        ModuleDescriptor::new(name, [Capability::CompiledLanguageB])
    }

    #[test]
    fn test_ignored_module_beats_enabled_tool() {
        let mut config = Config::default();
        config.ignore_projects = vec!["legacy".to_string()];
        config.checkstyle.enabled = true;

        let decision = decide(&config, &java("legacy"), ToolKind::StyleChecker);
        assert_eq!(decision, MergeDecision::Skip(SkipReason::IgnoredModule));
    }

    #[test]
    fn test_ignore_checked_before_enabled() {
        let mut config = Config::default();
        config.ignore_projects = vec!["legacy".to_string()];
        config.checkstyle.enabled = false;

        let decision = decide(&config, &java("legacy"), ToolKind::StyleChecker);
        assert_eq!(decision, MergeDecision::Skip(SkipReason::IgnoredModule));
    }

    #[test]
    fn test_disabled_tool_is_skipped() {
        let mut config = Config::default();
        config.checkstyle.enabled = false;

        let decision = decide(&config, &java("app"), ToolKind::StyleChecker);
        assert_eq!(decision, MergeDecision::Skip(SkipReason::Disabled));
    }

    #[test]
    fn test_unsupported_module_is_skipped() {
        let decision = decide(&Config::default(), &kotlin("app"), ToolKind::StyleChecker);
        assert_eq!(decision, MergeDecision::Skip(SkipReason::Unsupported));
    }

    #[test]
    fn test_fail_and_verbose_follow_fail_early() {
        for fail_early in [true, false] {
            let config = Config {
                fail_early,
                ..Config::default()
            };
            let decision = decide(&config, &java("app"), ToolKind::StyleChecker);
            let settings = decision.settings().unwrap();
            assert_eq!(settings.fail_on_findings, fail_early);
            assert_eq!(settings.verbose, fail_early);
        }
    }

    #[test]
    fn test_overrides_win_over_fail_early() {
        let mut config = Config::default();
        config.fail_early = true;
        config.checkstyle.failure_override = Some(false);
        config.checkstyle.report_verbosity_override = Some(false);

        let decision = decide(&config, &java("app"), ToolKind::StyleChecker);
        let settings = decision.settings().unwrap();
        assert!(!settings.fail_on_findings);
        assert!(!settings.verbose);
    }

    #[test]
    fn test_report_formats_come_from_policy() {
        let mut config = Config::default();
        config.xml_reports = false;
        config.html_reports = true;

        let decision = decide(&config, &kotlin("app"), ToolKind::DeepAnalyzer);
        let settings = decision.settings().unwrap();
        assert!(!settings.xml_reports);
        assert!(settings.html_reports);
    }

    #[test]
    fn test_config_file_resolved_against_root() {
        let decision = decide(&Config::default(), &java("app"), ToolKind::StyleChecker);
        assert_eq!(
            decision.settings().unwrap().config_file,
            Some(PathBuf::from("/repo/config/checkstyle/checkstyle.xml"))
        );
    }

    #[test]
    fn test_tool_local_globs_and_version() {
        let decision = decide(&Config::default(), &java("app"), ToolKind::StyleChecker);
        let settings = decision.settings().unwrap();
        assert_eq!(settings.include, vec!["**/*.java".to_string()]);
        assert_eq!(settings.exclude, vec!["**/gen/**".to_string()]);
        assert_eq!(settings.tool_version, "10.12.4");
    }

    #[test]
    fn test_analyzer_on_kotlin_module_needs_no_runtime() {
        let decision = decide(&Config::default(), &kotlin("app"), ToolKind::DeepAnalyzer);
        match decision {
            MergeDecision::Applicable { advisories, .. } => assert!(advisories.is_empty()),
            MergeDecision::Skip(reason) => panic!("unexpected skip: {reason:?}"),
        }
    }

    #[test]
    fn test_analyzer_without_runtime_is_flagged_not_skipped() {
        let module = ModuleDescriptor::new("app", [Capability::PackagedComponent]);
        let decision = decide(&Config::default(), &module, ToolKind::DeepAnalyzer);

        match decision {
            MergeDecision::Applicable { advisories, .. } => assert_eq!(
                advisories,
                vec![Advisory::RuntimeUnavailable {
                    module: "app".to_string(),
                    tool: ToolKind::DeepAnalyzer,
                    runtime: ToolRuntime::AnalyzerCli,
                }]
            ),
            MergeDecision::Skip(reason) => panic!("unexpected skip: {reason:?}"),
        }
    }

    #[test]
    fn test_declared_analyzer_runtime_clears_advisory() {
        let mut config = Config::default();
        config.available_runtimes = vec![ToolRuntime::AnalyzerCli];
        let module = ModuleDescriptor::new("app", [Capability::PackagedComponent]);

        let decision = decide(&config, &module, ToolKind::DeepAnalyzer);
        assert!(matches!(
            decision,
            MergeDecision::Applicable { ref advisories, .. } if advisories.is_empty()
        ));
    }

    #[test]
    fn test_lint_skips_plain_java_module() {
        let decision = decide(&Config::default(), &java("core"), ToolKind::Lint);
        assert_eq!(decision, MergeDecision::Skip(SkipReason::Unsupported));
    }

    #[test]
    fn test_lint_applies_to_java_module_with_lint_runtime() {
        let with_runtime = ModuleDescriptor::new(
            "core",
            [Capability::CompiledLanguageA, Capability::LintRuntimePresent],
        );
        let decision = decide(&Config::default(), &with_runtime, ToolKind::Lint);
        assert!(matches!(
            decision,
            MergeDecision::Applicable { ref advisories, .. } if advisories.is_empty()
        ));
    }

    #[test]
    fn test_lint_runtime_alone_is_not_enough() {
        let module = ModuleDescriptor::new("tools", [Capability::LintRuntimePresent]);
        let decision = decide(&Config::default(), &module, ToolKind::Lint);
        assert_eq!(decision, MergeDecision::Skip(SkipReason::Unsupported));
    }

    #[test]
    fn test_decide_is_idempotent() {
        let module = ModuleDescriptor::new("app", Capability::ALL);
        for tool in ToolKind::PRIORITY {
            let first = decide(&Config::default(), &module, tool);
            let second = decide(&Config::default(), &module, tool);
            assert_eq!(first, second);
        }
    }
}
