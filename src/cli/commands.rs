//! Command implementations for the cdo-parse CLI
//!
//! This module contains the command execution logic: logging setup, input
//! reading, dispatch to the parsers and output formatting.

use crate::app::models::StructuredOutput;
use crate::app::services::operator_registry::{parse_cdo_output_with_config, supported_operators};
use crate::cli::args::{Commands, OutputFormat, ParseArgs};
use crate::cli::report::render_human;
use crate::{Error, Result};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Main command runner
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Parse(args) => run_parse(&args),
        Commands::Operators => {
            println!("{}", render_operators());
            Ok(())
        }
    }
}

/// Parse captured output and print the structured record
pub fn run_parse(args: &ParseArgs) -> Result<()> {
    setup_logging(args)?;
    debug!("Parse arguments: {:?}", args);

    let config = args.parser_config()?;
    let input = read_input(args.file.as_deref())?;
    info!("Read {} bytes of CDO output", input.len());

    let output = parse_cdo_output_with_config(&args.command, &input, &config)?;
    info!("Parsed output as {}", output.kind());

    println!("{}", format_output(&output, args.format)?);
    Ok(())
}

/// Read the whole input from a file, or from standard input
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| Error::io("Failed to read standard input", e))?;
            Ok(buffer)
        }
    }
}

/// Format a record for printing
pub fn format_output(output: &StructuredOutput, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(output).map_err(|e| {
            Error::serialization(format!("Failed to encode {} record", output.kind()), e)
        }),
        OutputFormat::Human => Ok(render_human(output)),
    }
}

/// One operator name per line
pub fn render_operators() -> String {
    supported_operators()
        .iter()
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Set up logging based on verbosity settings
fn setup_logging(args: &ParseArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cdo_output={}", log_level)));

    // Logs go to stderr so stdout stays clean for the record
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))
}
