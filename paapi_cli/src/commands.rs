//! Command implementations
//!
//! Each command renders its output into a [`CommandOutput`] so `main` only
//! prints and exits.

use log::{debug, info};
use paapi_core::{CompatibilityTable, Operation, Resource, ResourceRequest};
use serde::Serialize;

use crate::cli::{Command, ValidateArgs};
use crate::config::{CliPreferences, OutputFormat};
use crate::report::ValidationReport;

pub type CommandResult = Result<CommandOutput, Box<dyn std::error::Error>>;

/// Process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed and the request, if any, was valid
    Success,
    /// The request named a resource its operation may not request
    Invalid,
    /// Usage, I/O or parse failure
    Error,
}

impl ExitStatus {
    /// Process exit code: 0, 1 or 2
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Invalid => 1,
            Self::Error => 2,
        }
    }
}

/// Rendered command output plus the status to exit with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub status: ExitStatus,
}

impl CommandOutput {
    fn success(text: String) -> Self {
        Self {
            text,
            status: ExitStatus::Success,
        }
    }
}

/// Dispatch a parsed command
pub fn run(command: Command, preferences: CliPreferences) -> CommandResult {
    match command {
        Command::Validate(args) => run_validate(args, preferences),
        Command::Resources { operation } => run_resources(operation.as_deref()),
        Command::Operations => Ok(run_operations()),
        Command::Table { format } => run_table(format.unwrap_or(preferences.output_format)),
    }
}

/// Validate a request given on the command line or in a file
pub fn run_validate(args: ValidateArgs, preferences: CliPreferences) -> CommandResult {
    let preferences = preferences.with_overrides(args.report_all(), args.format);

    let request = match (&args.file, &args.operation) {
        (Some(path), _) => {
            info!("Validating request file {}", path.display());
            ResourceRequest::from_path(path)?
        }
        (None, Some(operation)) => ResourceRequest::from_names(operation, &args.resources),
        (None, None) => return Err("either --operation or --file is required".into()),
    };

    debug!(
        "Checking {} resource(s) against {} (report_all={})",
        request.resources.len(),
        request.operation,
        preferences.report_all
    );

    let report = ValidationReport::from_request(&request, preferences.report_all);
    let text = match preferences.output_format {
        OutputFormat::Text => report.to_text(),
        OutputFormat::Json => report.to_json()?,
    };

    Ok(CommandOutput {
        text,
        status: if report.valid {
            ExitStatus::Success
        } else {
            ExitStatus::Invalid
        },
    })
}

/// List resource names, optionally only those an operation may request
pub fn run_resources(operation: Option<&str>) -> CommandResult {
    let resources = match operation {
        Some(name) => name.parse::<Operation>()?.allowed_resources(),
        None => Resource::ALL.to_vec(),
    };

    let lines: Vec<&str> = resources.iter().map(|r| r.as_str()).collect();
    Ok(CommandOutput::success(lines.join("\n")))
}

/// List operation names
pub fn run_operations() -> CommandOutput {
    let lines: Vec<&str> = Operation::ALL.iter().map(|o| o.as_str()).collect();
    CommandOutput::success(lines.join("\n"))
}

#[derive(Serialize)]
struct TableRow {
    resource: Resource,
    operations: &'static [Operation],
}

/// Print the compatibility table
pub fn run_table(format: OutputFormat) -> CommandResult {
    let table = CompatibilityTable::global();

    let text = match format {
        OutputFormat::Text => {
            let width = Resource::ALL
                .iter()
                .map(|r| r.as_str().len())
                .max()
                .unwrap_or(0);

            table
                .entries()
                .map(|(resource, operations)| {
                    let names: Vec<&str> = operations.iter().map(|o| o.as_str()).collect();
                    format!("{:<width$}  {}", resource.as_str(), names.join(", "))
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        OutputFormat::Json => {
            let rows: Vec<TableRow> = table
                .entries()
                .map(|(resource, operations)| TableRow {
                    resource,
                    operations,
                })
                .collect();
            serde_json::to_string_pretty(&rows)?
        }
    };

    Ok(CommandOutput::success(text))
}
