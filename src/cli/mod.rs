//! Command-line interface for filesift
//!
//! Parses arguments with clap and dispatches to the command modules.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;
mod output;

pub use output::Output;

/// filesift - catalog a directory, sniff encodings and content types, filter files
#[derive(Parser)]
#[command(name = "filesift", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Catalog every file under ROOT and show its attributes
    List(ListArgs),
    /// Catalog ROOT and print the files that pass the given conditions
    Filter(FilterArgs),
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args)]
pub struct ListArgs {
    /// Directory to catalog
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Directory to catalog
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Unlabeled values; whether they are extensions, encodings or content
    /// types is inferred from the catalog
    #[arg(value_name = "VALUE", conflicts_with_all = ["extensions", "encodings", "content_types"])]
    pub values: Vec<String>,

    /// Accepted file extensions, e.g. .cpp (comma-separated or repeated)
    #[arg(long = "ext", value_name = "EXT", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Accepted encodings, e.g. utf-8 (comma-separated or repeated)
    #[arg(long = "encoding", value_name = "ENCODING", value_delimiter = ',')]
    pub encodings: Vec<String>,

    /// Accepted content types, e.g. text/plain (comma-separated or repeated)
    #[arg(
        long = "content-type",
        visible_alias = "magic",
        value_name = "MIME",
        value_delimiter = ','
    )]
    pub content_types: Vec<String>,

    /// Conditions as JSON: a mapping, a list of strings, or a single string
    #[arg(
        long = "where",
        value_name = "JSON",
        conflicts_with_all = ["values", "extensions", "encodings", "content_types"]
    )]
    pub conditions: Option<String>,

    /// Print only the number of matching files
    #[arg(long)]
    pub count_only: bool,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective merged configuration
    Show,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = Output::new(self.verbose > 0, self.quiet);
        let config_path = self.config.as_deref();

        match self.command {
            Some(Commands::List(args)) => commands::list::execute(args, config_path, self.format, &output),
            Some(Commands::Filter(args)) => {
                commands::filter::execute(args, config_path, self.format, &output)
            }
            Some(Commands::Config(cmd)) => commands::config::execute(cmd, config_path, self.format),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
