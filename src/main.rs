//! `cqt` CLI entry point.

use clap::Parser;

use code_quality_tools::cli::commands::{self, load_config};
use code_quality_tools::cli::{handle_error, Cli, Commands};
use code_quality_tools::infrastructure::logging::{LogConfig, LoggerImpl};

fn main() {
    let Cli {
        command,
        json,
        config,
        root,
    } = Cli::parse();

    let config = match load_config(&root, config.as_deref()) {
        Ok(config) => config,
        Err(err) => handle_error(err, json),
    };

    // Keeps the file writer flushing until exit.
    let _logger = match LoggerImpl::init(&LogConfig::from(&config.logging)) {
        Ok(logger) => Some(logger),
        Err(err) => {
            eprintln!("Warning: logging disabled: {err:#}");
            None
        }
    };

    let result = match command {
        Commands::Plan(args) => commands::plan::execute(args, &config, &root, json),
        Commands::Validate => commands::validate::execute(&config, json),
        Commands::Tools => commands::tools::execute(&config, json),
    };

    if let Err(err) = result {
        handle_error(err, json);
    }
}
