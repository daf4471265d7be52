//! CLI command implementations.

pub mod plan;
pub mod tools;
pub mod validate;

use anyhow::Result;
use std::path::Path;

use crate::domain::models::config::Config;
use crate::infrastructure::config::ConfigLoader;

/// Load the run configuration: an explicit file when given, otherwise the
/// layered project configuration under `root`.
pub fn load_config(root: &Path, config_file: Option<&Path>) -> Result<Config> {
    match config_file {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(root),
    }
}
