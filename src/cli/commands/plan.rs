//! `cqt plan`

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::application::Orchestrator;
use crate::cli::output::{flag, output, CommandOutput};
use crate::cli::table::{list_table, render_list};
use crate::domain::models::config::Config;
use crate::domain::models::execution::PipelinePlan;
use crate::infrastructure::manifest::{ManifestDescriptorSource, DEFAULT_MANIFEST};

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Module manifest (defaults to .code-quality/modules.yaml under the root)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct PlanOutput {
    #[serde(flatten)]
    pub plan: PipelinePlan,
}

impl CommandOutput for PlanOutput {
    fn to_human(&self) -> String {
        let mut units = list_table(&["module", "tool", "task", "fail", "verbose", "config"]);
        for unit in self.plan.modules.iter().flat_map(|module| &module.units) {
            units.add_row(vec![
                unit.module_name.clone(),
                unit.tool.to_string(),
                unit.task_path.clone(),
                flag(Some(unit.settings.fail_on_findings)).to_string(),
                flag(Some(unit.settings.verbose)).to_string(),
                unit.settings
                    .config_file
                    .as_ref()
                    .map_or_else(|| "-".to_string(), |path| path.display().to_string()),
            ]);
        }

        let mut sections = vec![render_list("unit", &units, self.plan.unit_count())];

        let mut steps = vec!["Verify steps:".to_string()];
        for module in &self.plan.modules {
            let prerequisites = if module.verify.prerequisites.is_empty() {
                "(nothing)".to_string()
            } else {
                module.verify.prerequisites.join(", ")
            };
            steps.push(format!("  {} <- {prerequisites}", module.verify.task_path));
            if let Some(compile) = &module.compile {
                steps.push(format!(
                    "  {} all_warnings_as_errors={}",
                    compile.task_path,
                    compile.all_warnings_as_errors
                ));
            }
            for unit in &module.auxiliary_units {
                steps.push(format!("  {} (manual)", unit.task_path));
            }
        }
        sections.push(steps.join("\n"));

        let advisories = self.plan.advisories();
        if !advisories.is_empty() {
            let mut lines = vec!["Advisories:".to_string()];
            lines.extend(advisories.iter().map(|advisory| format!("  - {advisory}")));
            sections.push(lines.join("\n"));
        }

        sections.join("\n\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run both phases against the manifest and return the composed plan.
pub fn compose(config: &Config, root: &Path, manifest: Option<&Path>) -> Result<PipelinePlan> {
    let orchestrator =
        Orchestrator::from_config(config, root).context("Invalid tool configuration")?;

    let manifest = manifest.map_or_else(|| root.join(DEFAULT_MANIFEST), Path::to_path_buf);
    let source = ManifestDescriptorSource::new(manifest);

    let descriptors = orchestrator.collect_descriptors(&source)?;
    let plan = orchestrator
        .compose_pipeline(&descriptors)
        .context("Failed to compose verification pipeline")?;
    Ok(plan)
}

pub fn execute(args: PlanArgs, config: &Config, root: &Path, json_mode: bool) -> Result<()> {
    let plan = compose(config, root, args.manifest.as_deref())?;
    output(&PlanOutput { plan }, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::tool::ToolKind;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, yaml: &str) -> PathBuf {
        let path = dir.path().join("modules.yaml");
        fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn test_compose_from_manifest() {
        let dir = TempDir::new().unwrap();
        let manifest = write_manifest(
            &dir,
            "modules:\n  - name: app\n    plugins: [com.android.application, kotlin-android]\n",
        );

        let plan = compose(&Config::default(), dir.path(), Some(&manifest)).unwrap();
        let app = plan.module("app").unwrap();
        assert_eq!(
            app.tools(),
            [
                ToolKind::StyleChecker,
                ToolKind::DeepAnalyzer,
                ToolKind::FormatChecker,
                ToolKind::Lint
            ]
        );
        assert_eq!(app.compile.as_ref().map(|c| c.all_warnings_as_errors), Some(true));
    }

    #[test]
    fn test_default_manifest_location() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".code-quality")).unwrap();
        fs::write(
            dir.path().join(DEFAULT_MANIFEST),
            "root:\n  name: tool\n  plugins: [java]\n",
        )
        .unwrap();

        let plan = compose(&Config::default(), dir.path(), None).unwrap();
        assert_eq!(plan.modules.len(), 1);
        assert_eq!(plan.modules[0].module, "tool");
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(compose(&Config::default(), dir.path(), None).is_err());
    }

    #[test]
    fn test_human_output_mentions_advisories() {
        let dir = TempDir::new().unwrap();
        let manifest = write_manifest(&dir, "modules:\n  - name: core\n    plugins: [com.android.library]\n");

        let plan = compose(&Config::default(), dir.path(), Some(&manifest)).unwrap();
        let human = PlanOutput { plan }.to_human();
        assert!(human.contains("core:checkstyle"));
        assert!(human.contains("Advisories:"));
        assert!(human.contains("analyzer_cli"));
    }
}
