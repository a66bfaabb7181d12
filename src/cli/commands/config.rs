//! Configuration command implementations

use super::print_structured;
use crate::cli::{ConfigCommands, OutputFormat};
use crate::config::FilesiftConfig;
use anyhow::Result;

/// Execute config commands
pub fn execute(cmd: ConfigCommands, config_path: Option<&str>, format: OutputFormat) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(config_path, format),
    }
}

fn show(config_path: Option<&str>, format: OutputFormat) -> Result<()> {
    let config = FilesiftConfig::load(config_path)?;
    print_structured(&config, format)
}
