//! Property tests for merge precedence and pipeline composition.

mod common;

use code_quality_tools::domain::models::config::Config;
use code_quality_tools::domain::models::execution::{MergeDecision, SkipReason};
use code_quality_tools::domain::models::module::{Capability, ModuleDescriptor};
use code_quality_tools::domain::models::tool::ToolKind;
use code_quality_tools::DescriptorSet;
use proptest::prelude::*;
use std::collections::BTreeSet;

use common::{orchestrator, set_enabled, set_failure_override};

fn capability() -> impl Strategy<Value = Capability> {
    prop::sample::select(Capability::ALL.to_vec())
}

fn capabilities() -> impl Strategy<Value = BTreeSet<Capability>> {
    prop::collection::btree_set(capability(), 0..=Capability::ALL.len())
}

fn tool() -> impl Strategy<Value = ToolKind> {
    prop::sample::select(ToolKind::PRIORITY.to_vec())
}

/// Distinct module names with arbitrary capability sets.
fn modules() -> impl Strategy<Value = Vec<ModuleDescriptor>> {
    prop::collection::btree_map("[a-z]{1,8}", capabilities(), 0..8).prop_map(|modules| {
        modules
            .into_iter()
            .map(|(name, caps)| ModuleDescriptor::new(name, caps))
            .collect()
    })
}

proptest! {
    /// Property: an ignored module skips every tool, even explicitly enabled ones
    #[test]
    fn prop_ignore_precedence(
        caps in capabilities(),
        tool in tool(),
        fail_early in any::<bool>(),
        failure_override in any::<Option<bool>>(),
    ) {
        let mut config = Config::default();
        config.fail_early = fail_early;
        config.ignore_projects = vec!["legacy".to_string()];
        set_enabled(&mut config, tool, true);
        set_failure_override(&mut config, tool, failure_override);

        let legacy = ModuleDescriptor::new("legacy", caps);
        prop_assert_eq!(
            orchestrator(&config).decide(&legacy, tool),
            MergeDecision::Skip(SkipReason::IgnoredModule)
        );
    }

    /// Property: failure_override wins when set, otherwise fail_early applies
    #[test]
    fn prop_override_precedence(
        tool in tool(),
        fail_early in any::<bool>(),
        failure_override in any::<Option<bool>>(),
    ) {
        let mut config = Config::default();
        config.fail_early = fail_early;
        set_failure_override(&mut config, tool, failure_override);

        let everything = ModuleDescriptor::new("app", Capability::ALL);
        let decision = orchestrator(&config).decide(&everything, tool);
        let settings = decision.settings().expect("every tool applies to a module with every capability");

        prop_assert_eq!(settings.fail_on_findings, failure_override.unwrap_or(fail_early));
        prop_assert_eq!(settings.verbose, fail_early);
    }

    /// Property: the style checker needs CompiledLanguageA or PackagedComponent
    #[test]
    fn prop_style_checker_capability_gating(caps in capabilities()) {
        let supported = caps.contains(&Capability::CompiledLanguageA)
            || caps.contains(&Capability::PackagedComponent);

        let orchestrator = orchestrator(&Config::default());
        let set = DescriptorSet::new(vec![ModuleDescriptor::new("app", caps)]).unwrap();
        let plan = orchestrator.compose_pipeline(&set).unwrap();

        prop_assert_eq!(
            plan.module("app").unwrap().unit(ToolKind::StyleChecker).is_some(),
            supported
        );
    }

    /// Property: composing twice from identical input yields identical plans
    #[test]
    fn prop_composition_is_idempotent(modules in modules(), fail_early in any::<bool>()) {
        let mut config = Config::default();
        config.fail_early = fail_early;
        let orchestrator = orchestrator(&config);
        let set = DescriptorSet::new(modules).unwrap();

        let first = orchestrator.compose_pipeline(&set).unwrap();
        let second = orchestrator.compose_pipeline(&set).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: every module keeps a verify step whose prerequisites are
    /// exactly its own units, and edges only ever point into verify steps
    #[test]
    fn prop_verify_step_always_present(modules in modules()) {
        let orchestrator = orchestrator(&Config::default());
        let count = modules.len();
        let set = DescriptorSet::new(modules).unwrap();
        let plan = orchestrator.compose_pipeline(&set).unwrap();

        prop_assert_eq!(plan.modules.len(), count);
        for module in &plan.modules {
            prop_assert_eq!(&module.verify.task_path, &format!("{}:check", module.module));
            let units: Vec<_> = module.units.iter().map(|u| u.task_path.clone()).collect();
            prop_assert_eq!(&module.verify.prerequisites, &units);
            for unit in &module.units {
                prop_assert!(unit.depends_on.is_empty());
            }
        }
        for edge in &plan.edges {
            prop_assert!(edge.to.ends_with(":check"));
            prop_assert!(!edge.from.ends_with(":check"));
        }
        prop_assert_eq!(plan.edges.len(), plan.unit_count());
    }
}

#[test]
fn test_module_without_tools_has_empty_verify_step() {
    let orchestrator = orchestrator(&Config::default());
    let set = DescriptorSet::new(vec![ModuleDescriptor::new("docs", [])]).unwrap();

    let plan = orchestrator.compose_pipeline(&set).unwrap();
    let docs = plan.module("docs").unwrap();
    assert!(docs.units.is_empty());
    assert!(docs.verify.prerequisites.is_empty());
    assert!(docs.compile.is_none());
    assert!(plan.edges.is_empty());
}
