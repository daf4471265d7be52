//! Command lines for tools that run outside a host build plugin.
//!
//! The format checker and the deeper analyzer are launched as plain JVM
//! programs; this module describes the launch so the task-execution engine
//! only has to run it.

use std::path::Path;

use crate::domain::models::execution::{EffectiveSettings, Invocation};
use crate::domain::models::module::ModuleDescriptor;
use crate::domain::models::policy::{DeepAnalyzerExtras, FormatCheckerExtras, ToolExtras};
use crate::domain::ports::PathResolver;

const KTLINT_ARTIFACT: &str = "com.pinterest.ktlint:ktlint-cli";
const KTLINT_MAIN: &str = "com.pinterest.ktlint.Main";
const KTLINT_REPORT: &str = "ktlint-checkstyle-report.xml";

const DETEKT_ARTIFACT: &str = "io.gitlab.arturbosch.detekt:detekt-cli";
const DETEKT_MAIN: &str = "io.gitlab.arturbosch.detekt.cli.Main";

/// Invocation for the unit attached to the verify step, if the tool needs one.
pub fn invocation_for(
    module: &ModuleDescriptor,
    settings: &EffectiveSettings,
    paths: &dyn PathResolver,
) -> Option<Invocation> {
    match &settings.extras {
        ToolExtras::FormatChecker(extras) => {
            Some(format_checker(module, settings, extras, paths, false))
        }
        ToolExtras::DeepAnalyzer(extras) => Some(deep_analyzer(module, settings, extras, paths)),
        _ => None,
    }
}

/// Format-checker launch. `apply_fixes` rewrites files instead of reporting.
pub fn format_checker(
    module: &ModuleDescriptor,
    settings: &EffectiveSettings,
    extras: &FormatCheckerExtras,
    paths: &dyn PathResolver,
    apply_fixes: bool,
) -> Invocation {
    let output_dir = paths.resolve_in_module(&module.path, "build/reports/ktlint");

    let mut args = vec![
        "--reporter=plain".to_string(),
        format!(
            "--reporter=checkstyle,output={}",
            output_dir.join(KTLINT_REPORT).display()
        ),
    ];
    if apply_fixes {
        args.push("-F".to_string());
    }
    if let Some(config) = &settings.config_file {
        args.push(format!("--editorconfig={}", config.display()));
    }
    if settings.verbose {
        args.push("--log-level=debug".to_string());
    }
    args.extend(settings.include.iter().cloned());
    args.extend(settings.exclude.iter().map(|glob| format!("!{glob}")));

    Invocation {
        artifact: format!("{KTLINT_ARTIFACT}:{}", settings.tool_version),
        main_class: KTLINT_MAIN.to_string(),
        args,
        output_dir,
        inputs: vec![paths.resolve(&extras.editorconfig)],
        ignore_exit_code: !settings.fail_on_findings,
    }
}

fn deep_analyzer(
    module: &ModuleDescriptor,
    settings: &EffectiveSettings,
    extras: &DeepAnalyzerExtras,
    paths: &dyn PathResolver,
) -> Invocation {
    let output_dir = paths.resolve_in_module(&module.path, "build/reports/detekt");
    let input = paths.resolve_in_module(&module.path, &extras.input);

    let mut args = vec!["--input".to_string(), input.display().to_string()];
    if let Some(config) = &settings.config_file {
        args.push("--config".to_string());
        args.push(config.display().to_string());
    }
    if let Some(baseline) = &extras.baseline_file_name {
        args.push("--baseline".to_string());
        args.push(
            paths
                .resolve_in_module(&module.path, baseline)
                .display()
                .to_string(),
        );
    }
    if extras.parallel {
        args.push("--parallel".to_string());
    }
    if extras.build_upon_default_config {
        args.push("--build-upon-default-config".to_string());
    }
    if extras.fail_fast {
        args.push("--fail-fast".to_string());
    }
    if settings.verbose {
        args.push("--debug".to_string());
    }
    push_report(&mut args, settings.xml_reports, "xml", &output_dir);
    push_report(&mut args, settings.html_reports, "html", &output_dir);

    Invocation {
        artifact: format!("{DETEKT_ARTIFACT}:{}", settings.tool_version),
        main_class: DETEKT_MAIN.to_string(),
        args,
        output_dir,
        inputs: vec![input],
        ignore_exit_code: !settings.fail_on_findings,
    }
}

fn push_report(args: &mut Vec<String>, enabled: bool, format: &str, output_dir: &Path) {
    if enabled {
        args.push("--report".to_string());
        args.push(format!(
            "{format}:{}",
            output_dir.join(format!("detekt.{format}")).display()
        ));
    }
}
