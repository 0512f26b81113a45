//! # PA-API CLI
//!
//! Command-line front end for `paapi_core`: validates resource requests
//! and prints the resource/operation vocabulary.

// Module declarations
pub mod cli;
pub mod commands;
pub mod config;
pub mod report;

pub use cli::{CliArgs, Command};
pub use commands::{run, CommandOutput, ExitStatus};
pub use config::{CliPreferences, OutputFormat};
