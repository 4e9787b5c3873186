//! Command-line argument definitions for cdo-parse
//!
//! This module defines the CLI interface using the clap derive API.

use crate::Result;
use crate::config::ParserConfig;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the CDO output parser
///
/// Reads the captured text output of a CDO information operator and prints
/// it as structured JSON or as a short human-readable summary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cdo-parse",
    version,
    about = "Turn the text output of CDO information operators into structured data",
    long_about = "Parses the captured standard output of CDO commands such as griddes, zaxisdes, \
                  sinfo, showatts or partab into typed records. CDO itself is never run: pipe its \
                  output in, or point at a file holding it."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse captured CDO output
    Parse(ParseArgs),
    /// List operators with a registered parser
    Operators,
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// The CDO command that produced the output
    ///
    /// Only the operator is used; a leading `-` and any `,parameters` are
    /// ignored, so `-griddes,bilinear in.nc` selects the grid parser.
    #[arg(
        short = 'c',
        long = "command",
        value_name = "CMD",
        help = "CDO command that produced the output, e.g. \"sinfo in.nc\""
    )]
    pub command: String,

    /// File holding the captured output; standard input when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format for the parsed record
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "json",
        help = "Output format for the parsed record"
    )]
    pub format: OutputFormat,

    /// Leading character of comment lines
    #[arg(long = "comment-marker", value_name = "CHAR")]
    pub comment_marker: Option<char>,

    /// First word of the banner line CDO appends to its output
    #[arg(long = "banner-prefix", value_name = "WORD")]
    pub banner_prefix: Option<String>,

    /// Minimum number of dots in a row marking omitted timesteps
    #[arg(long = "min-omission-dots", value_name = "N")]
    pub min_omission_dots: Option<usize>,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress everything except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable summary
    Human,
}

impl ParseArgs {
    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the parser configuration from defaults and overrides
    pub fn parser_config(&self) -> Result<ParserConfig> {
        let mut config = ParserConfig::default();
        if let Some(marker) = self.comment_marker {
            config = config.with_comment_marker(marker);
        }
        if let Some(prefix) = &self.banner_prefix {
            config = config.with_banner_prefix(prefix.clone());
        }
        if let Some(dots) = self.min_omission_dots {
            config = config.with_min_omission_dots(dots);
        }

        config.validate()?;
        Ok(config)
    }
}
