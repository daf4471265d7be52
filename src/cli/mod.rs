//! Command-line interface for the `cqt` binary.

pub mod commands;
pub mod output;
pub mod table;
pub mod types;

pub use output::{handle_error, output, CommandOutput};
pub use types::{Cli, Commands};
