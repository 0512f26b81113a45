//! CLI argument parsing and command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

/// Validate Product Advertising API 5.0 resource requests
#[derive(Parser, Debug)]
#[command(name = "paapi", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that an operation may request the given resources.
    Validate(ValidateArgs),

    /// List resource names.
    Resources {
        /// Only list resources this operation may request.
        #[arg(short, long)]
        operation: Option<String>,
    },

    /// List operation names.
    Operations,

    /// Print the resource/operation compatibility table.
    Table {
        /// Output format (text or json).
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
}

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Operation name, e.g. SearchItems.
    #[arg(short, long, required_unless_present = "file", conflicts_with = "file")]
    pub operation: Option<String>,

    /// Resource name, e.g. ItemInfo.Title. May be repeated.
    #[arg(short, long = "resource", conflicts_with = "file")]
    pub resources: Vec<String>,

    /// Request description file (.toml or .json).
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Report every invalid resource instead of stopping at the first.
    #[arg(short, long, conflicts_with = "no_all")]
    pub all: bool,

    /// Stop at the first invalid resource even if PAAPI_REPORT_ALL is set.
    #[arg(long)]
    pub no_all: bool,

    /// Output format (text or json).
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

impl ValidateArgs {
    /// Report mode chosen on the command line, if any
    pub fn report_all(&self) -> Option<bool> {
        match (self.all, self.no_all) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
