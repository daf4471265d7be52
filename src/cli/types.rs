//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::plan::PlanArgs;

#[derive(Parser, Debug)]
#[command(name = "cqt")]
#[command(
    about = "Code quality tools - decides which analyzers apply to each module",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file; replaces the layered project configuration
    #[arg(short, long, global = true, env = "CQT_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Pipeline root; config file references resolve against it
    #[arg(short, long, global = true, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose the verification pipeline for every module
    Plan(PlanArgs),

    /// Check that the configuration builds a valid policy
    Validate,

    /// List the tools in priority order with their base settings
    Tools,
}
