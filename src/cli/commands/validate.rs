//! `cqt validate`

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::config::Config;
use crate::services::PolicyModel;

#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub valid: bool,
    pub enabled_tools: Vec<String>,
    pub ignored_modules: Vec<String>,
}

impl CommandOutput for ValidateOutput {
    fn to_human(&self) -> String {
        let mut lines = vec!["Configuration is valid.".to_string()];
        lines.push(format!("Enabled tools: {}", join_or_none(&self.enabled_tools)));
        lines.push(format!("Ignored modules: {}", join_or_none(&self.ignored_modules)));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

pub fn summarize(policy: &PolicyModel) -> ValidateOutput {
    ValidateOutput {
        valid: true,
        enabled_tools: policy
            .tools()
            .filter(|settings| settings.common.enabled)
            .map(|settings| settings.kind().to_string())
            .collect(),
        ignored_modules: policy.global().ignored_modules.iter().cloned().collect(),
    }
}

pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let policy = PolicyModel::from_config(config).context("Invalid tool configuration")?;
    output(&summarize(&policy), json_mode);
    Ok(())
}
