//! Pipeline Composer
//!
//! Walks every module and every tool in priority order, turns applicable
//! merge decisions into execution units, and wires each unit in as a
//! prerequisite of the module's verify step.

use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::domain::error::PipelineError;
use crate::domain::models::execution::{
    task_path, CompileUnit, ExecutionUnit, MergeDecision, ModulePlan, PipelinePlan, VerifyStep,
    COMPILE_TASK, VERIFY_TASK,
};
use crate::domain::models::module::{Capability, ModuleDescriptor};
use crate::domain::models::policy::ToolExtras;
use crate::domain::models::tool::ToolKind;

use super::invocation;
use super::merge_engine::MergeEngine;
use super::verify_graph::VerifyGraph;

/// Task registered next to the format checker for rewriting files in place.
pub const FORMAT_TASK: &str = "ktlintFormat";

pub struct PipelineComposer<'a> {
    engine: MergeEngine<'a>,
}

impl<'a> PipelineComposer<'a> {
    pub fn new(engine: MergeEngine<'a>) -> Self {
        Self { engine }
    }

    /// Compose one module. Never fails: a module with no applicable tool
    /// still gets a verify step, just without prerequisites.
    #[instrument(skip_all, fields(module = %module.name))]
    pub fn compose_module(&self, module: &ModuleDescriptor) -> ModulePlan {
        let mut plan = ModulePlan {
            module: module.name.clone(),
            verify: VerifyStep {
                task_path: task_path(&module.name, VERIFY_TASK),
                prerequisites: Vec::new(),
            },
            units: Vec::new(),
            auxiliary_units: Vec::new(),
            compile: module
                .has(Capability::CompiledLanguageB)
                .then(|| CompileUnit {
                    task_path: task_path(&module.name, COMPILE_TASK),
                    all_warnings_as_errors: false,
                }),
        };

        for tool in ToolKind::PRIORITY {
            let MergeDecision::Applicable {
                settings,
                advisories,
            } = self.engine.decide(module, tool)
            else {
                continue;
            };

            let Some(task) = tool.task_name() else {
                // Compiler escalation only flips the flag on the compile step.
                if let Some(compile) = plan.compile.as_mut() {
                    compile.all_warnings_as_errors = settings.fail_on_findings;
                }
                continue;
            };

            let paths = self.engine.paths();
            if let ToolExtras::FormatChecker(extras) = &settings.extras {
                plan.auxiliary_units.push(ExecutionUnit {
                    module_name: module.name.clone(),
                    tool,
                    task_path: task_path(&module.name, FORMAT_TASK),
                    invocation: Some(invocation::format_checker(
                        module, &settings, extras, paths, true,
                    )),
                    settings: settings.clone(),
                    depends_on: Vec::new(),
                    advisories: Vec::new(),
                });
            }

            let unit = ExecutionUnit {
                module_name: module.name.clone(),
                tool,
                task_path: task_path(&module.name, task),
                invocation: invocation::invocation_for(module, &settings, paths),
                settings,
                depends_on: Vec::new(),
                advisories,
            };
            plan.verify.prerequisites.push(unit.task_path.clone());
            plan.units.push(unit);
        }

        debug!(tools = ?plan.tools(), "module composed");
        plan
    }

    /// Compose every module and declare the prerequisite edges.
    ///
    /// Modules are independent, so they are composed in parallel; the result
    /// is ordered by module name, and units within a module by tool priority.
    pub fn compose(&self, modules: &[ModuleDescriptor]) -> Result<PipelinePlan, PipelineError> {
        let mut plans: Vec<ModulePlan> = modules
            .par_iter()
            .map(|module| self.compose_module(module))
            .collect();
        plans.sort_by(|a, b| a.module.cmp(&b.module));

        let mut graph = VerifyGraph::new();
        for plan in &plans {
            graph.add_node(plan.verify.task_path.as_str())?;
            for unit in plan.units.iter().chain(&plan.auxiliary_units) {
                graph.add_node(unit.task_path.as_str())?;
            }
            for unit in &plan.units {
                graph.add_edge(&unit.task_path, &plan.verify.task_path)?;
            }
        }

        let pipeline = PipelinePlan {
            modules: plans,
            edges: graph.into_edges(),
        };

        for advisory in pipeline.advisories() {
            warn!(%advisory, "runtime advisory");
        }
        info!(
            modules = pipeline.modules.len(),
            units = pipeline.unit_count(),
            edges = pipeline.edges.len(),
            "pipeline composed"
        );

        Ok(pipeline)
    }
}
