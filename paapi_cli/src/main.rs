//! # PA-API Request Validator
//!

use clap::Parser;
use log::debug;
use paapi_cli::{run, CliArgs, CliPreferences, ExitStatus};

fn main() {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let preferences = CliPreferences::default();
    debug!("Runtime preferences: {:?}", preferences);

    let status = match run(args.command, preferences) {
        Ok(output) => {
            println!("{}", output.text);
            output.status
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitStatus::Error
        }
    };

    std::process::exit(status.code());
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
