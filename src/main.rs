use anyhow::Context;
use cdo_output::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let result = commands::run(command).context("cdo-parse failed");

    if let Err(error) = result {
        // Print the full error chain to stderr and exit with error code
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("cdo-parse - structured parsing of CDO text output");
    println!("=================================================");
    println!();
    println!("Turn the captured output of CDO information operators (griddes, zaxisdes,");
    println!("sinfo, showatts, partab, ...) into JSON or a short summary.");
    println!();
    println!("USAGE:");
    println!("    cdo-parse <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse captured CDO output from a file or stdin");
    println!("    operators   List operators with a registered parser");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Describe a grid as JSON:");
    println!("    cdo griddes in.nc | cdo-parse parse --command griddes");
    println!();
    println!("    # Summarise a saved sinfo dump:");
    println!("    cdo-parse parse --command \"sinfo in.nc\" --format human sinfo.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    cdo-parse <COMMAND> --help");
}
