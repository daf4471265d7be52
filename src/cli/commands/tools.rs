//! `cqt tools`

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::{flag, output, CommandOutput};
use crate::cli::table::{list_table, render_list};
use crate::domain::models::config::Config;
use crate::domain::models::tool::ToolKind;
use crate::services::PolicyModel;

#[derive(Debug, Serialize)]
pub struct ToolRow {
    pub priority: usize,
    pub tool: ToolKind,
    pub task: Option<String>,
    /// Accepted capability sets, each rendered as `a+b`
    pub requires_any: Vec<String>,
    pub enabled: bool,
    pub tool_version: String,
    pub config_file: Option<String>,
    /// `failure_override`, else the global `fail_early`
    pub fail_on_findings: bool,
    pub verbose: bool,
    pub runtime: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ToolListOutput {
    pub fail_early: bool,
    pub tools: Vec<ToolRow>,
}

impl CommandOutput for ToolListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&[
            "#", "tool", "task", "requires any", "enabled", "version", "config", "fail", "verbose",
            "runtime",
        ]);
        for row in &self.tools {
            table.add_row(vec![
                row.priority.to_string(),
                row.tool.to_string(),
                row.task.clone().unwrap_or_else(|| "(compile flag)".to_string()),
                row.requires_any.join(", "),
                flag(Some(row.enabled)).to_string(),
                row.tool_version.clone(),
                row.config_file.clone().unwrap_or_else(|| "-".to_string()),
                flag(Some(row.fail_on_findings)).to_string(),
                flag(Some(row.verbose)).to_string(),
                row.runtime.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }
        render_list("tool", &table, self.tools.len())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn list(policy: &PolicyModel) -> ToolListOutput {
    let fail_early = policy.global().fail_early;
    let tools = ToolKind::PRIORITY
        .into_iter()
        .enumerate()
        .map(|(index, tool)| {
            let common = &policy.settings(tool).common;
            ToolRow {
                priority: index + 1,
                tool,
                task: tool.task_name().map(str::to_string),
                requires_any: tool
                    .capability_requirements()
                    .iter()
                    .map(|all_of| {
                        all_of
                            .iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join("+")
                    })
                    .collect(),
                enabled: common.enabled,
                tool_version: common.tool_version.clone(),
                config_file: common.config_file_ref.clone(),
                fail_on_findings: common.failure_override.unwrap_or(fail_early),
                verbose: common.report_verbosity_override.unwrap_or(fail_early),
                runtime: tool.runtime_gate().map(|gate| gate.runtime.to_string()),
            }
        })
        .collect();

    ToolListOutput { fail_early, tools }
}

pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let policy = PolicyModel::from_config(config).context("Invalid tool configuration")?;
    output(&list(&policy), json_mode);
    Ok(())
}
