//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan the source tree and write the key -> string seed file
//! - `init`: Write a default configuration file
//! - `lookup`: Find the dotted key path of strings in an existing locale file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Source code root directory (overrides config file)
    #[arg(long, env = "TR_STRINGS_SOURCE_ROOT")]
    pub source_root: Option<PathBuf>,

    /// Output JSON file (overrides config file)
    #[arg(short, long, env = "TR_STRINGS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Directory name to skip at any depth (replaces the configured list)
    /// Can be specified multiple times: --exclude locales --exclude db
    #[arg(long = "exclude", value_name = "NAME")]
    pub excluded_dirs: Vec<String>,

    /// File name suffix to scan, e.g. ".js" (overrides config file)
    #[arg(long)]
    pub extension: Option<String>,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Nested JSON locale file to search
    pub messages: PathBuf,

    /// Texts to look up (default: every value of the extract output file)
    pub texts: Vec<String>,

    /// Extract output file to read when no texts are given (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub from: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract Turkish UI strings into a key -> string JSON file
    Extract(ExtractCommand),
    /// Initialize a new .trstringsrc.json configuration file
    Init,
    /// Show which locale keys already hold the given strings
    Lookup(LookupCommand),
}
